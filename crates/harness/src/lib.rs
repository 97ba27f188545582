//! Harness surface: what the (external) execution engine is handed.
//!
//! The engine that parses and sandboxes learner code lives outside this
//! workspace. Its contract with the world model is small and lives here:
//! every mutation it performs is a finite, replayable [`Command`], applied
//! by the [`Runner`] against a private clone of the catalog's world.
//!
//! # Invariants
//! - The catalog's worlds are never mutated by a run; the runner clones.
//! - Exercise variants run in declaration order, short-circuiting after the
//!   first failed tier.

pub mod command;
pub mod inspector;
pub mod runner;

pub use command::{Command, Script};
pub use inspector::{WorldInspector, WorldSummary};
pub use runner::{ExerciseRun, RunError, Runner, WorldRun};
