//! Solve command - final heading for one grid.

use anyhow::Result;
use spiralsolve_core::{Answer, GridDimensions, Integer};

pub fn run(rows: Integer, cols: Integer, json: bool) -> Result<()> {
    let grid = GridDimensions::new(rows, cols)?;
    let direction = grid.final_direction();
    let answer = Answer::new(grid, direction);

    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        println!("{}", answer.direction);
    }

    Ok(())
}
