//! Request ride use case

use std::sync::Arc;

use serde::Serialize;

use super::{ACCOUNT_REPOSITORY, RIDE_REPOSITORY};
use crate::domain::entities::{AccountId, Ride, RideId};
use crate::domain::ports::{AccountRepository, RideRepository};
use crate::error::{AppError, DomainError};
use crate::registry::{Inject, Registry};

/// Where a passenger wants to go
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestRideInput {
    pub passenger_id: AccountId,
    pub from_lat: f64,
    pub from_long: f64,
    pub to_lat: f64,
    pub to_long: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RequestRideOutput {
    pub ride_id: RideId,
}

pub struct RequestRide {
    accounts: Inject<dyn AccountRepository>,
    rides: Inject<dyn RideRepository>,
}

impl RequestRide {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            accounts: Inject::new(registry.clone(), ACCOUNT_REPOSITORY),
            rides: Inject::new(registry, RIDE_REPOSITORY),
        }
    }

    /// Open a new ride for a passenger without an active one
    pub async fn execute(&self, input: RequestRideInput) -> Result<RequestRideOutput, AppError> {
        let accounts = self.accounts.get()?;
        let rides = self.rides.get()?;

        let is_passenger = accounts
            .find_by_id(&input.passenger_id)
            .await?
            .is_some_and(|account| account.is_passenger());
        if !is_passenger {
            return Err(DomainError::NotAPassenger.into());
        }

        if rides.has_active_ride_for(&input.passenger_id).await? {
            tracing::debug!(passenger_id = %input.passenger_id, "Passenger already has an active ride");
            return Err(DomainError::ActiveRideExists.into());
        }

        let ride = Ride::create(
            input.passenger_id,
            input.from_lat,
            input.from_long,
            input.to_lat,
            input.to_long,
        )?;
        rides.save(&ride).await?;

        tracing::info!(
            ride_id = %ride.id(),
            passenger_id = %ride.passenger_id(),
            "Ride requested"
        );

        Ok(RequestRideOutput { ride_id: ride.id() })
    }
}
