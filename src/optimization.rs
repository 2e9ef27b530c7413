//! Dichotomic search over a decision procedure: used to find the smallest
//! number of colors a graph can be colored with by repeatedly asking the
//! decision engine "can this be done with k colors?"

use std::time::{Duration, Instant};

use crate::loaders::coloring::ColoringInstance;
use crate::solver::{BacktrackEngine, SolverConfig};

/// The outcome of a dichotomic color-count search.
pub struct ColoringResult {
    /// The best color count found. An upper bound, not necessarily optimal,
    /// if `exact` is `false`.
    pub best_color_count: usize,
    pub best_assignment: Option<std::collections::HashMap<String, u32>>,
    pub nodes_visited: u64,
    pub exact: bool,
}

/// Searches for the minimum number of colors needed to color `instance`,
/// starting from the naive `max_degree + 1` upper bound (valid for any
/// graph) and binary-searching down. `time_budget` bounds the whole search,
/// not any single decision call; `None` means unbounded.
pub fn dichotomic_color(
    instance: &ColoringInstance,
    time_budget: Option<Duration>,
) -> ColoringResult {
    let start = Instant::now();
    let mut best_coloring_size = instance.max_degree + 1;
    let mut best_assignment = None;
    let mut best_nodes = 0;
    let mut smallest_size_to_test = 1usize;

    let budget_remaining = |elapsed: Duration| match time_budget {
        Some(budget) if !budget.is_zero() => elapsed < budget,
        _ => true,
    };

    while smallest_size_to_test <= best_coloring_size.saturating_sub(1)
        && budget_remaining(start.elapsed())
    {
        let size_to_test = (best_coloring_size + smallest_size_to_test) / 2;
        let mut csp = match instance.build(size_to_test) {
            Ok(csp) => csp,
            Err(_) => break,
        };

        let mut engine = BacktrackEngine::new(SolverConfig::new());
        let outcome = engine.run(&mut csp);

        if outcome.is_solved() {
            best_coloring_size = size_to_test;
            best_assignment = outcome.assignment;
            best_nodes = outcome.stats.nodes_visited;
        } else if best_coloring_size - smallest_size_to_test > 1 {
            smallest_size_to_test = size_to_test;
        } else {
            smallest_size_to_test += 1;
        }
    }

    ColoringResult {
        best_color_count: best_coloring_size,
        best_assignment,
        nodes_visited: best_nodes,
        exact: budget_remaining(start.elapsed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::coloring::parse;

    #[test]
    fn triangle_needs_exactly_three_colors() {
        let instance = parse("p edge 3 3\ne 1 2\ne 2 3\ne 1 3\n").unwrap();
        let result = dichotomic_color(&instance, None);
        assert_eq!(result.best_color_count, 3);
        assert!(result.exact);
        assert!(result.best_assignment.is_some());
    }

    #[test]
    fn bipartite_graph_needs_two_colors() {
        let instance = parse("p edge 4 4\ne 1 2\ne 2 3\ne 3 4\ne 4 1\n").unwrap();
        let result = dichotomic_color(&instance, None);
        assert_eq!(result.best_color_count, 2);
    }
}
