//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL) and by the
//! in-memory doubles in `test_utils`.

use async_trait::async_trait;

use crate::domain::entities::{Account, AccountId, Ride, RideId, RideStatus};
use crate::error::DomainError;

/// Repository for Account entities
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account
    async fn save(&self, account: &Account) -> Result<(), DomainError>;

    /// Find an account by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by ID
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;
}

/// Repository for Ride entities
///
/// Implementations backed by shared storage must make `save` reject a second
/// active ride for the same passenger; `has_active_ride_for` alone is a
/// check-then-act and races with concurrent requests.
#[async_trait]
pub trait RideRepository: Send + Sync {
    /// Persist a new ride
    async fn save(&self, ride: &Ride) -> Result<(), DomainError>;

    /// Find a ride by ID
    async fn find_by_id(&self, id: &RideId) -> Result<Option<Ride>, DomainError>;

    /// Whether the passenger has a ride in an active status
    async fn has_active_ride_for(&self, passenger_id: &AccountId) -> Result<bool, DomainError>;

    /// Move a stored ride to another status
    #[allow(dead_code)]
    async fn update_status(&self, id: &RideId, status: RideStatus) -> Result<(), DomainError>;
}
