//! Domain entities
//!
//! Pure domain models that own their invariants.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod account;
pub mod ride;

pub use account::{Account, AccountId, NewAccount};
pub use ride::{Coordinates, Ride, RideId, RideStatus};
