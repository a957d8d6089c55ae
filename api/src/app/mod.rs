//! Application layer
//!
//! Contains the use cases. Each one resolves its repositories by name from a
//! [`Registry`](crate::registry::Registry) handed to its constructor.

pub mod get_account;
pub mod get_ride;
pub mod request_ride;
pub mod signup;

pub use get_account::GetAccount;
pub use get_ride::GetRide;
pub use request_ride::{RequestRide, RequestRideInput, RequestRideOutput};
pub use signup::{Signup, SignupOutput};

/// Registry name of the [`AccountRepository`](crate::domain::ports::AccountRepository)
pub const ACCOUNT_REPOSITORY: &str = "accountRepository";

/// Registry name of the [`RideRepository`](crate::domain::ports::RideRepository)
pub const RIDE_REPOSITORY: &str = "rideRepository";
