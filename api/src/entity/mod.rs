//! SeaORM entities
//!
//! Table models for the PostgreSQL adapters. The schema itself lives in
//! `migrations/`.

pub mod accounts;
pub mod rides;
