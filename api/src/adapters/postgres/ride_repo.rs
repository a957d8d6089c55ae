//! PostgreSQL adapter for RideRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr,
};

use crate::domain::entities::{AccountId, Coordinates, Ride, RideId, RideStatus};
use crate::domain::ports::RideRepository;
use crate::entity::rides;
use crate::error::DomainError;

/// Partial unique index over rides in an active status
const ONE_ACTIVE_RIDE_INDEX: &str = "rides_one_active_per_passenger";

/// PostgreSQL implementation of RideRepository
pub struct PostgresRideRepository {
    db: DatabaseConnection,
}

impl PostgresRideRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RideRepository for PostgresRideRepository {
    async fn save(&self, ride: &Ride) -> Result<(), DomainError> {
        let origin = ride.origin();
        let destination = ride.destination();

        let model = rides::ActiveModel {
            ride_id: Set(ride.id().0),
            passenger_id: Set(ride.passenger_id().0),
            driver_id: Set(ride.driver_id().map(|id| id.0)),
            from_lat: Set(origin.lat),
            from_long: Set(origin.long),
            to_lat: Set(destination.lat),
            to_long: Set(destination.long),
            fare: Set(ride.fare()),
            distance: Set(ride.distance()),
            status: Set(ride.status().to_string()),
            date: Set(ride.date().fixed_offset()),
        };

        model.insert(&self.db).await.map_err(map_write_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &RideId) -> Result<Option<Ride>, DomainError> {
        let result = rides::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Ride::try_from).transpose()
    }

    async fn has_active_ride_for(&self, passenger_id: &AccountId) -> Result<bool, DomainError> {
        let active = RideStatus::ACTIVE.iter().map(|s| s.as_str());

        let count = rides::Entity::find()
            .filter(rides::Column::PassengerId.eq(passenger_id.0))
            .filter(rides::Column::Status.is_in(active))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn update_status(&self, id: &RideId, status: RideStatus) -> Result<(), DomainError> {
        rides::ActiveModel {
            ride_id: Set(id.0),
            status: Set(status.to_string()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::NotFound(format!("Ride {}", id)),
            e => map_write_error(e),
        })?;

        Ok(())
    }
}

/// A write that lost the race on the one-active-ride index
fn map_write_error(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains(ONE_ACTIVE_RIDE_INDEX) => {
            DomainError::ActiveRideExists
        }
        _ => DomainError::Database(e.to_string()),
    }
}

impl TryFrom<rides::Model> for Ride {
    type Error = DomainError;

    fn try_from(model: rides::Model) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<RideStatus>()
            .map_err(DomainError::Database)?;

        Ok(Ride::restore(
            RideId(model.ride_id),
            AccountId(model.passenger_id),
            model.driver_id.map(AccountId),
            Coordinates {
                lat: model.from_lat,
                long: model.from_long,
            },
            Coordinates {
                lat: model.to_lat,
                long: model.to_long,
            },
            model.fare,
            model.distance,
            status,
            model.date.with_timezone(&Utc),
        ))
    }
}
