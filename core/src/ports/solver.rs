//! Direction solver port (interface).

use crate::domain::{Direction, GridDimensions};

/// Port for resolving the final heading of a clockwise spiral walk.
///
/// Implementations must be pure: the same grid always yields the same
/// heading, and no state is shared between calls.
pub trait DirectionSolver: Send + Sync {
    /// Heading of the last step taken when walking `grid` in a clockwise
    /// spiral from the top-left cell, starting rightwards.
    fn solve(&self, grid: &GridDimensions) -> Direction;
}
