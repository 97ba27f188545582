//! World data model: the simulated environments an exercise configures and
//! the execution engine runs learner code against.
//!
//! # Invariants
//! - A world is fully initialized the moment construction returns; no
//!   partially-built world is ever exposed.
//! - All state mutations flow through explicit operations and produce event
//!   records, so every run can be replayed step by step.
//! - Initial state is deterministic: same construction parameters, same world.

pub mod grid;
pub mod sequence;
pub mod world;

pub use grid::{Agent, GridAgentWorld, GridEvent};
pub use sequence::{OpCounters, SequenceEvent, SequenceWorld};
pub use world::{World, WorldError, WorldKind};
