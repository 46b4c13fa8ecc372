//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces that the application layer uses.
//! Implementations live in `adapters` (and `testkit` for test oracles).

mod solver;

pub use solver::DirectionSolver;
