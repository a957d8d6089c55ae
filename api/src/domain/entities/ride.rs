//! Ride domain entity
//!
//! A trip requested by a passenger between two coordinates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::AccountId;
use crate::error::DomainError;

/// Unique identifier for a ride
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RideId(pub Uuid);

impl RideId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RideId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RideId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ride status
///
/// Moves forward only: requested -> accepted -> in_progress -> completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Requested,
    Accepted,
    InProgress,
    Completed,
}

impl RideStatus {
    /// Statuses that count as an ongoing ride for the passenger
    pub const ACTIVE: [RideStatus; 3] = [
        RideStatus::Requested,
        RideStatus::Accepted,
        RideStatus::InProgress,
    ];

    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RideStatus::Requested => "requested",
            RideStatus::Accepted => "accepted",
            RideStatus::InProgress => "in_progress",
            RideStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for RideStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RideStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "requested" => Ok(RideStatus::Requested),
            "accepted" => Ok(RideStatus::Accepted),
            "in_progress" => Ok(RideStatus::InProgress),
            "completed" => Ok(RideStatus::Completed),
            _ => Err(format!("Unknown ride status: {}", s)),
        }
    }
}

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

fn check_latitude(lat: f64) -> Result<(), DomainError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        Err(DomainError::InvalidLatitude)
    }
}

fn check_longitude(long: f64) -> Result<(), DomainError> {
    if (-180.0..=180.0).contains(&long) {
        Ok(())
    } else {
        Err(DomainError::InvalidLongitude)
    }
}

/// A requested ride
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    id: RideId,
    passenger_id: AccountId,
    driver_id: Option<AccountId>,
    origin: Coordinates,
    destination: Coordinates,
    fare: f64,
    distance: f64,
    status: RideStatus,
    date: DateTime<Utc>,
}

impl Ride {
    /// Validate the coordinates and build a new `requested` ride
    ///
    /// Fare and distance start at zero; they are filled in by an external estimate.
    pub fn create(
        passenger_id: AccountId,
        from_lat: f64,
        from_long: f64,
        to_lat: f64,
        to_long: f64,
    ) -> Result<Self, DomainError> {
        check_latitude(from_lat)?;
        check_latitude(to_lat)?;
        check_longitude(from_long)?;
        check_longitude(to_long)?;

        Ok(Self {
            id: RideId::new(),
            passenger_id,
            driver_id: None,
            origin: Coordinates {
                lat: from_lat,
                long: from_long,
            },
            destination: Coordinates {
                lat: to_lat,
                long: to_long,
            },
            fare: 0.0,
            distance: 0.0,
            status: RideStatus::Requested,
            date: Utc::now(),
        })
    }

    /// Rebuild a ride that was already validated and stored
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: RideId,
        passenger_id: AccountId,
        driver_id: Option<AccountId>,
        origin: Coordinates,
        destination: Coordinates,
        fare: f64,
        distance: f64,
        status: RideStatus,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            passenger_id,
            driver_id,
            origin,
            destination,
            fare,
            distance,
            status,
            date,
        }
    }

    pub fn id(&self) -> RideId {
        self.id
    }

    pub fn passenger_id(&self) -> AccountId {
        self.passenger_id
    }

    pub fn driver_id(&self) -> Option<AccountId> {
        self.driver_id
    }

    pub fn origin(&self) -> Coordinates {
        self.origin
    }

    pub fn destination(&self) -> Coordinates {
        self.destination
    }

    pub fn fare(&self) -> f64 {
        self.fare
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn status(&self) -> RideStatus {
        self.status
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    #[allow(dead_code)]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
