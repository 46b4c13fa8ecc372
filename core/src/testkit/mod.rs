//! Test support: a brute-force spiral walk used to cross-check the
//! closed-form rule. Compiled only for tests or with the `testkit` feature.

mod simulation;

pub use simulation::{simulate_final_direction, SimulatedSolver};
