//! Domain layer - Pure spiral types and the closed-form rule.
//!
//! These types have no I/O dependencies and can be tested in isolation.

mod answer;
mod direction;
mod grid;
mod integer;

pub use answer::Answer;
pub use direction::Direction;
pub use grid::{final_direction, GridDimensions};
pub use integer::Integer;
