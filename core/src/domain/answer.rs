//! Solved case model.

use serde::Serialize;

use super::{Direction, GridDimensions};

/// A grid together with the heading it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    #[serde(flatten)]
    pub grid: GridDimensions,
    pub direction: Direction,
}

impl Answer {
    pub fn new(grid: GridDimensions, direction: Direction) -> Self {
        Self { grid, direction }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.grid, self.direction)
    }
}
