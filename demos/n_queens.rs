//! Solves the n-queens problem and prints the board, or reports that no
//! placement exists.

use bicsp::loaders::queens;
use bicsp::solver::heuristics::SmallestDomainHeuristic;
use bicsp::solver::{BacktrackEngine, SolverConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board size (and number of queens).
    #[arg(long, default_value_t = 8)]
    n: usize,

    #[arg(long, default_value_t = false)]
    forward_checking: bool,

    #[arg(long, default_value_t = false)]
    ac3: bool,

    /// Print the outcome as JSON instead of an ASCII board.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut csp = queens::build(args.n).expect("n-queens CSP should always be constructible");

    let config = SolverConfig::new()
        .with_variable_heuristic(SmallestDomainHeuristic)
        .with_forward_checking(args.forward_checking)
        .with_ac3(args.ac3);
    let outcome = BacktrackEngine::new(config).run(&mut csp);

    if args.json {
        println!("{}", outcome.to_json().expect("outcome should serialize"));
        return;
    }

    println!("{}", outcome.stats.render_table());

    match outcome.assignment {
        Some(assignment) => {
            let mut columns = vec![0i32; args.n];
            for (label, col) in &assignment {
                let row: usize = label
                    .trim_start_matches("row")
                    .parse()
                    .expect("queen labels are always row<N>");
                columns[row] = *col;
            }
            for col in columns {
                let mut line = String::new();
                for c in 1..=args.n as i32 {
                    line.push(if c == col { 'Q' } else { '.' });
                }
                println!("{line}");
            }
        }
        None => println!("no placement of {} queens exists", args.n),
    }
}
