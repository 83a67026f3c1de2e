//! Queens CLI - eight-queens enumeration and symmetry analysis
//!
//! This CLI provides a unified interface for:
//! - Enumerating every eight-queens placement
//! - Grouping placements by rotation and flip equivalence
//! - Demonstrating the square-grid transforms

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "queens")]
#[command(version, about = "Eight-queens solver and symmetry analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate all eight-queens placements
    Solve(queens::cli::commands::solve::SolveArgs),

    /// Group placements by rotation and flip equivalence
    Groups(queens::cli::commands::groups::GroupsArgs),

    /// Demonstrate the square-grid transforms on a 3x3 matrix
    Transforms,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => queens::cli::commands::solve::execute(args),
        Commands::Groups(args) => queens::cli::commands::groups::execute(args),
        Commands::Transforms => queens::cli::commands::transforms::execute(),
    }
}
