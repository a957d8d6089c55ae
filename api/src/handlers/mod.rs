//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod accounts;
pub mod json;
pub mod rides;

pub use accounts::{get_account, signup};
pub use rides::{get_ride, request_ride};
