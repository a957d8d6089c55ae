//! Get ride use case

use std::sync::Arc;

use super::RIDE_REPOSITORY;
use crate::domain::entities::{Ride, RideId};
use crate::domain::ports::RideRepository;
use crate::error::{AppError, DomainError};
use crate::registry::{Inject, Registry};

pub struct GetRide {
    rides: Inject<dyn RideRepository>,
}

impl GetRide {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            rides: Inject::new(registry, RIDE_REPOSITORY),
        }
    }

    pub async fn execute(&self, ride_id: RideId) -> Result<Ride, AppError> {
        let rides = self.rides.get()?;

        rides
            .find_by_id(&ride_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Ride {}", ride_id)).into())
    }
}
