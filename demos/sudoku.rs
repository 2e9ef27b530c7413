//! Solves a sudoku puzzle read from a file (or a built-in sample) and
//! prints the completed grid.

use std::fs;
use std::path::PathBuf;

use bicsp::loaders::sudoku;
use bicsp::solver::heuristics::SmallestDomainHeuristic;
use bicsp::solver::{BacktrackEngine, SolverConfig};
use clap::Parser;

const SAMPLE: &str = "\
530070000\n\
600195000\n\
098000060\n\
800060003\n\
400803001\n\
700020006\n\
060000280\n\
000419005\n\
000080079\n";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a grid file; the classic sample puzzle is used if omitted.
    #[arg(long)]
    puzzle: Option<PathBuf>,

    #[arg(long, default_value_t = 3)]
    block_edge_size: usize,

    #[arg(long, default_value_t = true)]
    forward_checking: bool,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let contents = match &args.puzzle {
        Some(path) => fs::read_to_string(path).expect("puzzle file should be readable"),
        None => SAMPLE.to_string(),
    };

    let mut csp =
        sudoku::parse(&contents, args.block_edge_size).expect("malformed sudoku grid");

    let config = SolverConfig::new()
        .with_variable_heuristic(SmallestDomainHeuristic)
        .with_forward_checking(args.forward_checking);
    let outcome = BacktrackEngine::new(config).run(&mut csp);

    println!("{}", outcome.stats.render_table());

    let grid_edge_size = args.block_edge_size * args.block_edge_size;
    match outcome.assignment {
        Some(assignment) => {
            let mut grid = vec![vec![0u32; grid_edge_size]; grid_edge_size];
            for (label, value) in &assignment {
                let rest = label.trim_start_matches('x');
                let (row, col) = rest.split_once('_').expect("cell labels are x<row>_<col>");
                let row: usize = row.parse().unwrap();
                let col: usize = col.parse().unwrap();
                grid[row][col] = *value;
            }
            for row in grid {
                let line: String = row.iter().map(|v| v.to_string()).collect();
                println!("{line}");
            }
        }
        None => println!("no solution found"),
    }
}
