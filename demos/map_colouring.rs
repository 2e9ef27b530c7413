//! Colors the classic Australia map-coloring instance, then finds the
//! fewest colors a given DIMACS-edge-list graph needs via dichotomic
//! search.

use std::path::PathBuf;

use bicsp::csp::constraint::not_equal;
use bicsp::solver::{BacktrackEngine, SolverConfig};
use bicsp::{loaders::coloring, optimization::dichotomic_color, Csp};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// DIMACS-edge-list graph file. Without one, colors Australia's regions.
    #[arg(long)]
    graph: Option<PathBuf>,
}

fn australia() -> Csp<u32> {
    // 0=WA 1=NT 2=SA 3=Q 4=NSW 5=V 6=T
    let labels = vec!["WA", "NT", "SA", "Q", "NSW", "V", "T"]
        .into_iter()
        .map(String::from)
        .collect();
    let domains = vec![vec![0, 1, 2]; 7];
    let adjacent = [
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (2, 5),
        (3, 4),
        (4, 5),
    ];
    let constraints = adjacent.iter().map(|&(i, j)| (i, j, not_equal())).collect();
    Csp::construct(labels, domains, constraints).expect("Australia map CSP is well-formed")
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    match args.graph {
        None => {
            let mut csp = australia();
            let outcome = BacktrackEngine::new(SolverConfig::new()).run(&mut csp);
            println!("{}", outcome.stats.render_table());
            match outcome.assignment {
                Some(assignment) => {
                    for (region, color) in assignment {
                        println!("{region}: {color}");
                    }
                }
                None => println!("no 3-coloring of Australia exists (it shouldn't happen)"),
            }
        }
        Some(path) => {
            let contents =
                std::fs::read_to_string(&path).expect("graph file should be readable");
            let instance = coloring::parse(&contents).expect("malformed graph file");
            let result = dichotomic_color(&instance, None);
            println!(
                "best found: {} colors ({}), {} nodes visited",
                result.best_color_count,
                if result.exact { "exact" } else { "bound" },
                result.nodes_visited
            );
        }
    }
}
