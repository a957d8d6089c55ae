//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `validators`: Well-formedness checks used by the entities

pub mod entities;
pub mod ports;
pub mod validators;
