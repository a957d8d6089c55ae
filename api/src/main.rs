//! Ride-hailing API Server
//!
//! Passenger and driver signup plus ride requests over HTTP.
//! Uses hexagonal (ports & adapters) architecture: use cases resolve their
//! repositories by name from a registry, so storage is swapped without
//! touching them.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod registry;

#[cfg(test)]
mod test_utils;


use adapters::{apply_schema, PostgresAccountRepository, PostgresRideRepository};
use app::{GetAccount, GetRide, RequestRide, Signup, ACCOUNT_REPOSITORY, RIDE_REPOSITORY};
use config::Config;
use domain::ports::{AccountRepository, RideRepository};
use registry::Registry;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub signup: Arc<Signup>,
    pub get_account: Arc<GetAccount>,
    pub request_ride: Arc<RequestRide>,
    pub get_ride: Arc<GetRide>,
}

impl AppState {
    /// Build every use case against the same registry
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            signup: Arc::new(Signup::new(registry.clone())),
            get_account: Arc::new(GetAccount::new(registry.clone())),
            request_ride: Arc::new(RequestRide::new(registry.clone())),
            get_ride: Arc::new(GetRide::new(registry)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
///
/// Rate limiting keys on the peer address, so it needs a server started with
/// connect info.
pub fn router(state: AppState, rate_limited: bool) -> anyhow::Result<Router> {
    // Write routes (signup, ride requests)
    let mut write_routes: Router<AppState> = Router::new()
        .route("/signup", post(handlers::signup))
        .route("/rides", post(handlers::request_ride));

    if rate_limited {
        // 2 req/sec sustained, burst of 5
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(2)
                .burst_size(5)
                .finish()
                .context("Failed to build governor config")?,
        );

        write_routes = write_routes.layer(GovernorLayer {
            config: governor_config,
        });
    }

    let app = Router::new()
        .route("/health", get(health))
        .route("/accounts/:account_id", get(handlers::get_account))
        .route("/rides/:ride_id", get(handlers::get_ride))
        .merge(write_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ridehail_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ride-hailing API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.apply_schema {
        apply_schema(&db)
            .await
            .context("Failed to apply database schema")?;
    }

    // Bind adapters by name
    let registry = Registry::global();
    registry.provide::<dyn AccountRepository>(
        ACCOUNT_REPOSITORY,
        Arc::new(PostgresAccountRepository::new(db.clone())),
    );
    registry.provide::<dyn RideRepository>(
        RIDE_REPOSITORY,
        Arc::new(PostgresRideRepository::new(db)),
    );

    let state = AppState::new(registry);
    let app = router(state, config.rate_limit)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(rate_limited = config.rate_limit, "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
