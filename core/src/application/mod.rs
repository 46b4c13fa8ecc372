//! Application layer - Use case services.
//!
//! Services are thin orchestrators that:
//! - Accept protocol text or domain types as inputs
//! - Use ports (traits) for the solving strategy
//! - Return domain types or protocol text as outputs

mod batch_service;

pub use batch_service::{solve_batch, BatchService};
