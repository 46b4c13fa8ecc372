//! Constant-time solver based on the row/column parity rule.

use crate::domain::{Direction, GridDimensions};
use crate::ports::DirectionSolver;

/// Production solver. Runs in O(1) for any grid size.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedFormSolver;

impl ClosedFormSolver {
    pub fn new() -> Self {
        Self
    }
}

impl DirectionSolver for ClosedFormSolver {
    fn solve(&self, grid: &GridDimensions) -> Direction {
        grid.final_direction()
    }
}
