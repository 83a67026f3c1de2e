//! Enumerate eight-queens placements

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{create_spinner, format_number, print_kv, print_section};
use crate::puzzle::{Solution, find_all_queen_placements};

/// Arguments for the solve command
#[derive(Args)]
pub struct SolveArgs {
    /// Print every solution grid
    #[arg(long)]
    pub show_boards: bool,

    /// Limit how many solution grids are printed
    #[arg(long)]
    pub limit: Option<usize>,

    /// Emit the report as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SolveReport<'a> {
    total_solutions: usize,
    solutions: &'a [Solution],
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let spinner = create_spinner("Enumerating queen placements...");
    let solutions = find_all_queen_placements();
    spinner.finish_and_clear();

    if args.json {
        let report = SolveReport {
            total_solutions: solutions.len(),
            solutions: &solutions,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Eight-Queens Placements");
    print_kv("Total solutions", &format_number(solutions.len()));

    if args.show_boards {
        let limit = args.limit.unwrap_or(solutions.len());
        for (i, solution) in solutions.iter().take(limit).enumerate() {
            println!("\nSolution {}:", i + 1);
            print!("{solution}");
        }
    }

    Ok(())
}
