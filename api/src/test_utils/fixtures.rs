//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Emails are unique per call so fixtures never collide on the email rule.

use std::sync::Arc;

use uuid::Uuid;

use crate::app::{ACCOUNT_REPOSITORY, RIDE_REPOSITORY};
use crate::domain::entities::{Account, AccountId, NewAccount, Ride};
use crate::domain::ports::{AccountRepository, RideRepository};
use crate::registry::Registry;

use super::mocks::{InMemoryAccountRepository, InMemoryRideRepository};

/// Passes the check-digit algorithm
pub const VALID_TAX_ID: &str = "97456321558";

pub const FROM_LAT: f64 = -27.584905257808835;
pub const FROM_LONG: f64 = -48.545022195325124;
pub const TO_LAT: f64 = -27.496887588317275;
pub const TO_LONG: f64 = -48.522234807851476;

/// A unique, well-formed email address
pub fn unique_email() -> String {
    format!("john.doe{}@gmail.com", Uuid::new_v4().simple())
}

/// Signup data for a passenger that passes every validation
pub fn new_passenger() -> NewAccount {
    NewAccount {
        name: "John Doe".to_string(),
        email: unique_email(),
        tax_id: VALID_TAX_ID.to_string(),
        password: "asdQWE123".to_string(),
        car_plate: None,
        is_passenger: true,
        is_driver: false,
    }
}

/// Signup data for a driver that passes every validation
pub fn new_driver() -> NewAccount {
    NewAccount {
        car_plate: Some("AAA9999".to_string()),
        is_passenger: false,
        is_driver: true,
        ..new_passenger()
    }
}

/// Create a validated passenger account
pub fn test_passenger() -> Account {
    Account::create(new_passenger()).unwrap()
}

/// Create a validated driver account
pub fn test_driver() -> Account {
    Account::create(new_driver()).unwrap()
}

/// Create a requested ride for the passenger
pub fn test_ride(passenger_id: AccountId) -> Ride {
    Ride::create(passenger_id, FROM_LAT, FROM_LONG, TO_LAT, TO_LONG).unwrap()
}

/// A fresh registry with both repositories bound to empty in-memory fakes
pub fn in_memory_registry() -> Arc<Registry> {
    let registry = Arc::new(Registry::new());
    registry.provide::<dyn AccountRepository>(
        ACCOUNT_REPOSITORY,
        Arc::new(InMemoryAccountRepository::new()),
    );
    registry.provide::<dyn RideRepository>(RIDE_REPOSITORY, Arc::new(InMemoryRideRepository::new()));
    registry
}
