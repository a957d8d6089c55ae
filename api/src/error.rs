//! Unified error types for the ride-hailing API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Entity invariants, business rules and storage failures
//! - `RegistryError`: Dependency wiring faults
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid name")]
    InvalidName,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid tax id")]
    InvalidTaxId,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Invalid car plate")]
    InvalidCarPlate,

    #[error("Invalid latitude")]
    InvalidLatitude,

    #[error("Invalid longitude")]
    InvalidLongitude,

    #[error("Account already exists")]
    DuplicateAccount,

    #[error("The requester already has an active ride")]
    ActiveRideExists,

    #[error("The requester must be a passenger")]
    NotAPassenger,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Caller-input and business-rule faults, as opposed to lookup or storage failures
    pub fn is_rejection(&self) -> bool {
        !matches!(self, DomainError::NotFound(_) | DomainError::Database(_))
    }
}

/// Dependency registry errors
///
/// Both variants mean the process was wired incorrectly.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unresolved dependency: {0}")]
    Unresolved(String),

    #[error("Dependency '{name}' is not bound to a {expected}")]
    TypeMismatch { name: String, expected: &'static str },
}

/// Application layer errors - used by use cases and HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Registry(#[from] RegistryError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Domain(e) if e.is_rejection() => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            AppError::Domain(e @ DomainError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            AppError::Domain(e) => {
                tracing::error!("Storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Registry(e) => {
                tracing::error!("Misconfigured dependency registry: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
