//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - The repositories are resolved by name as `Arc<dyn Trait>`, so a double is
//!   just another implementation bound under the same name
//! - In-memory fakes keep state across calls, which the active-ride and
//!   duplicate-email rules need
//! - We control exactly what they return without macro magic

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
