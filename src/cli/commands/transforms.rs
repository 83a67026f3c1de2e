//! Demonstrate the square-grid transforms on a small matrix

use anyhow::Result;

use crate::cli::output::print_grid;
use crate::puzzle::{flip_horizontal, flip_vertical, rotate_clockwise};

pub fn execute() -> Result<()> {
    let matrix = vec![
        vec!['A', 'B', 'C'],
        vec!['D', 'E', 'F'],
        vec!['G', 'H', 'I'],
    ];

    println!("Original:");
    print_grid(&matrix);

    println!("\nRotated 90 degrees clockwise:");
    print_grid(&rotate_clockwise(&matrix));

    println!("\nFlipped across horizontal:");
    print_grid(&flip_horizontal(&matrix));

    println!("\nFlipped across vertical:");
    print_grid(&flip_vertical(&matrix));

    Ok(())
}
