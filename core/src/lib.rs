//! spiralsolve Core Library
//!
//! Predicts the heading of the last step of a clockwise spiral walk over an
//! `n x m` grid without simulating it, and speaks the contest-style batch
//! text protocol around that rule.
//! Provides functionality to:
//! - Compute the final heading for a single grid in O(1)
//! - Parse whitespace-delimited batches and render one token per line
//! - Persist output and parsing preferences
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure types and the closed-form rule
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: Solver implementations
//! - `protocol`: Batch text format
//! - `application`: Use case services
//!
//! # Example
//! ```
//! use spiralsolve_core::{final_direction, Direction};
//!
//! assert_eq!(final_direction(2, 3).unwrap(), Direction::Left);
//! assert_eq!(spiralsolve_core::solve_batch("2\n1 5\n5 1").unwrap(), "R\nD");
//! ```

// Hexagonal architecture layers
pub mod domain;
pub mod ports;
pub mod adapters;
pub mod application;

pub mod config;
pub mod error;
pub mod protocol;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

// Re-export domain types (primary API)
pub use domain::{final_direction, Answer, Direction, GridDimensions, Integer};

// Re-export other commonly used types
pub use adapters::ClosedFormSolver;
pub use application::{solve_batch, BatchService};
pub use config::{Config, ConfigStore, OutputFormat};
pub use error::{Error, Result};
pub use ports::DirectionSolver;
pub use protocol::{parse_batch, ParseOptions, QueryBatch};
