//! Exercise binding: associates an exercise identity with one or more
//! fully-built worlds and hands them to the catalog as a single unit.
//!
//! # Invariants
//! - An exercise's variant set is registered exactly once and immutable
//!   after `build()`.
//! - Variant declaration order is preserved exactly; the harness runs tiers
//!   in that order.
//! - The catalog is an explicit object, not process-wide state; one
//!   malformed exercise never poisons the rest of a load.

pub mod catalog;
pub mod exercise;

pub use catalog::Catalog;
pub use exercise::{CatalogError, Exercise, ExerciseBuilder};
