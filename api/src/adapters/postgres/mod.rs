//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod account_repo;
pub mod ride_repo;
pub mod schema;


pub use account_repo::PostgresAccountRepository;
pub use ride_repo::PostgresRideRepository;
pub use schema::apply_schema;
