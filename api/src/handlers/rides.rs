//! Ride handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::RequestRideInput;
use crate::domain::entities::{AccountId, Ride, RideId, RideStatus};
use super::json::JsonBody;
use crate::error::AppError;
use crate::AppState;

/// Request body for requesting a ride
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRideRequest {
    pub passenger_id: Uuid,
    pub from_lat: f64,
    pub from_long: f64,
    pub to_lat: f64,
    pub to_long: f64,
}

impl From<RequestRideRequest> for RequestRideInput {
    fn from(request: RequestRideRequest) -> Self {
        RequestRideInput {
            passenger_id: AccountId(request.passenger_id),
            from_lat: request.from_lat,
            from_long: request.from_long,
            to_lat: request.to_lat,
            to_long: request.to_long,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRideResponse {
    pub ride_id: RideId,
}

/// A stored ride as returned by the API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideResponse {
    pub ride_id: RideId,
    pub passenger_id: AccountId,
    pub driver_id: Option<AccountId>,
    pub from_lat: f64,
    pub from_long: f64,
    pub to_lat: f64,
    pub to_long: f64,
    pub fare: f64,
    pub distance: f64,
    pub status: RideStatus,
    pub date: DateTime<Utc>,
}

impl From<Ride> for RideResponse {
    fn from(ride: Ride) -> Self {
        let origin = ride.origin();
        let destination = ride.destination();

        Self {
            ride_id: ride.id(),
            passenger_id: ride.passenger_id(),
            driver_id: ride.driver_id(),
            from_lat: origin.lat,
            from_long: origin.long,
            to_lat: destination.lat,
            to_long: destination.long,
            fare: ride.fare(),
            distance: ride.distance(),
            status: ride.status(),
            date: ride.date(),
        }
    }
}

/// POST /rides
pub async fn request_ride(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RequestRideRequest>,
) -> Result<Json<RequestRideResponse>, AppError> {
    let output = state.request_ride.execute(request.into()).await?;

    Ok(Json(RequestRideResponse {
        ride_id: output.ride_id,
    }))
}

/// GET /rides/:rideId
pub async fn get_ride(
    State(state): State<AppState>,
    Path(ride_id): Path<Uuid>,
) -> Result<Json<RideResponse>, AppError> {
    let ride = state.get_ride.execute(RideId(ride_id)).await?;

    Ok(Json(ride.into()))
}
