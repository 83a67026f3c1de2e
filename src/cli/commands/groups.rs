//! Group placements by rotation and flip equivalence

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{create_spinner, format_number, print_kv, print_section};
use crate::puzzle::{Solution, find_all_queen_placements, group_similar_boards};

/// Arguments for the groups command
#[derive(Args)]
pub struct GroupsArgs {
    /// Print each group's representative board
    #[arg(long)]
    pub show_boards: bool,

    /// Emit the report as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct GroupsReport {
    total_solutions: usize,
    group_count: usize,
    group_sizes: Vec<usize>,
    groups: Vec<Vec<Solution>>,
}

pub fn execute(args: GroupsArgs) -> Result<()> {
    let spinner = create_spinner("Enumerating and grouping placements...");
    let solutions = find_all_queen_placements();
    let groups = group_similar_boards(&solutions);
    spinner.finish_and_clear();

    if args.json {
        let report = GroupsReport {
            total_solutions: solutions.len(),
            group_count: groups.len(),
            group_sizes: groups.iter().map(Vec::len).collect(),
            groups,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Eight-Queens Symmetry Groups");
    print_kv("Total solutions", &format_number(solutions.len()));
    print_kv("Equivalence groups", &format_number(groups.len()));

    for (i, group) in groups.iter().enumerate() {
        println!("\nGroup {} ({} members)", i + 1, group.len());
        if args.show_boards {
            print!("{}", group[0]);
        }
    }

    Ok(())
}
