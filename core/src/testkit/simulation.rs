//! Visited-grid spiral simulation.

use crate::domain::{Direction, GridDimensions};
use crate::ports::DirectionSolver;

/// Walk the grid cell by cell and report the heading of the last step.
///
/// Starts at `(0, 0)` facing right and turns clockwise whenever the next
/// cell is off-grid or already visited. A 1x1 grid takes no step and keeps
/// the initial heading. O(rows * cols) time and memory.
pub fn simulate_final_direction(grid: &GridDimensions) -> Direction {
    let rows = grid.rows().to_i64().expect("simulation is only meant for small grids");
    let cols = grid.cols().to_i64().expect("simulation is only meant for small grids");
    let total = grid
        .cell_count()
        .expect("simulation is only meant for small grids") as usize;

    let mut visited = vec![false; total];
    let index = |r: i64, c: i64| (r * cols + c) as usize;

    let (mut r, mut c) = (0i64, 0i64);
    let mut heading = Direction::Right;
    let mut last = heading;
    visited[index(r, c)] = true;
    let mut seen = 1;

    while seen < total {
        let (dr, dc) = heading.delta();
        let (nr, nc) = (r + dr, c + dc);
        let blocked = nr < 0 || nr >= rows || nc < 0 || nc >= cols || visited[index(nr, nc)];
        if blocked {
            heading = heading.clockwise();
            continue;
        }
        r = nr;
        c = nc;
        visited[index(r, c)] = true;
        seen += 1;
        last = heading;
    }

    last
}

/// [`DirectionSolver`] backed by [`simulate_final_direction`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSolver;

impl DirectionSolver for SimulatedSolver {
    fn solve(&self, grid: &GridDimensions) -> Direction {
        simulate_final_direction(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: i64, m: i64) -> GridDimensions {
        GridDimensions::new(n, m).unwrap()
    }

    #[test]
    fn test_trivial_grids() {
        assert_eq!(simulate_final_direction(&grid(1, 1)), Direction::Right);
        assert_eq!(simulate_final_direction(&grid(1, 4)), Direction::Right);
        assert_eq!(simulate_final_direction(&grid(4, 1)), Direction::Down);
    }

    #[test]
    fn test_two_by_two_ends_left() {
        // (0,0) R (0,1) D (1,1) L (1,0)
        assert_eq!(simulate_final_direction(&grid(2, 2)), Direction::Left);
    }

    #[test]
    fn test_tall_even_width_ends_up() {
        assert_eq!(simulate_final_direction(&grid(4, 2)), Direction::Up);
        assert_eq!(simulate_final_direction(&grid(7, 4)), Direction::Up);
    }
}
