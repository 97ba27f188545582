//! Shared types for the algospace exercise platform.
//!
//! # Invariants
//! - Types here are plain owned data: `Clone`, `Send`, serde-serializable.
//! - No crate in the workspace defines its own grid/direction vocabulary.

pub mod types;

pub use types::{Color, Direction, Edge, GridPos, WorldId};
