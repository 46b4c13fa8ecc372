//! Grid dimensions and the closed-form spiral rule.

use serde::Serialize;

use super::{Direction, Integer};
use crate::error::{Error, Result};

/// Rows and columns of a rectangular grid. Both are at least 1, with no
/// upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GridDimensions {
    rows: Integer,
    cols: Integer,
}

impl GridDimensions {
    /// Validate raw integers as grid dimensions.
    ///
    /// Fails with [`Error::InvalidDimensions`] when either side is below 1.
    pub fn new(rows: impl Into<Integer>, cols: impl Into<Integer>) -> Result<Self> {
        let (rows, cols) = (rows.into(), cols.into());
        if !rows.is_positive() || !cols.is_positive() {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows (`n`).
    pub fn rows(&self) -> &Integer {
        &self.rows
    }

    /// Number of columns (`m`).
    pub fn cols(&self) -> &Integer {
        &self.cols
    }

    /// True when the grid is at least as wide as it is tall (`n <= m`).
    /// Squares count as wide.
    pub fn is_wide(&self) -> bool {
        self.rows <= self.cols
    }

    /// The dimension whose parity decides the final heading: rows for wide
    /// grids, columns for tall ones.
    pub fn governing_dimension(&self) -> &Integer {
        if self.is_wide() {
            &self.rows
        } else {
            &self.cols
        }
    }

    /// Total number of cells, or `None` if it does not fit in `u64`.
    pub fn cell_count(&self) -> Option<u64> {
        self.rows.to_u64()?.checked_mul(self.cols.to_u64()?)
    }

    /// Heading of the last step of a clockwise spiral that starts at the
    /// top-left cell facing right.
    ///
    /// Wide grids end on a horizontal sweep: rightwards when the row count is
    /// odd, leftwards when even. Tall grids end on a vertical sweep: downwards
    /// when the column count is odd, upwards when even.
    pub fn final_direction(&self) -> Direction {
        let odd = self.governing_dimension().is_odd();
        match (self.is_wide(), odd) {
            (true, true) => Direction::Right,
            (true, false) => Direction::Left,
            (false, true) => Direction::Down,
            (false, false) => Direction::Up,
        }
    }
}

impl std::fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Final heading for raw `(rows, cols)` integers.
///
/// Rejects non-positive dimensions instead of guessing a heading.
pub fn final_direction(rows: impl Into<Integer>, cols: impl Into<Integer>) -> Result<Direction> {
    Ok(GridDimensions::new(rows, cols)?.final_direction())
}
