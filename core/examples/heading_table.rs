//! Example: Print the final heading for every grid up to 8x8.

use spiralsolve_core::GridDimensions;

fn main() {
    const MAX: i64 = 8;

    print!("{:>6}", "n\\m");
    for m in 1..=MAX {
        print!("{:>3}", m);
    }
    println!();
    println!("{}", "-".repeat(6 + 3 * MAX as usize));

    for n in 1..=MAX {
        print!("{:>6}", n);
        for m in 1..=MAX {
            match GridDimensions::new(n, m) {
                Ok(grid) => print!("{:>3}", grid.final_direction()),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return;
                }
            }
        }
        println!();
    }
}
