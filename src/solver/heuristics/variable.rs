//! Strategies for choosing which unassigned variable to branch on next.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::csp::Csp;

/// Chooses the next variable to branch on, or `None` if every variable is
/// already assigned.
pub trait VariableHeuristic<V: Clone + PartialEq + Debug + 'static>: Debug {
    fn choose(&self, csp: &Csp<V>, state: &HashMap<usize, V>) -> Option<usize>;
}

/// Picks the lowest-index unassigned variable. Deterministic, no insight
/// into domain shape.
#[derive(Debug, Default)]
pub struct NaiveVariableHeuristic;

impl<V: Clone + PartialEq + Debug + 'static> VariableHeuristic<V> for NaiveVariableHeuristic {
    fn choose(&self, csp: &Csp<V>, state: &HashMap<usize, V>) -> Option<usize> {
        (0..csp.num_variables()).find(|v| !state.contains_key(v))
    }
}

/// Minimum-remaining-values: picks the unassigned variable with the fewest
/// live values, a "fail first" strategy that tends to prune dead ends
/// earlier. Ties break on lowest index for determinism.
#[derive(Debug, Default)]
pub struct SmallestDomainHeuristic;

impl<V: Clone + PartialEq + Debug + 'static> VariableHeuristic<V> for SmallestDomainHeuristic {
    fn choose(&self, csp: &Csp<V>, state: &HashMap<usize, V>) -> Option<usize> {
        (0..csp.num_variables())
            .filter(|v| !state.contains_key(v))
            .min_by_key(|&v| csp.domain(v).live_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::constraint::not_equal;

    fn triangle() -> Csp<i32> {
        Csp::construct(
            vec!["a".into(), "b".into(), "c".into()],
            vec![vec![0, 1], vec![0], vec![0, 1, 2]],
            vec![(0, 1, not_equal()), (1, 2, not_equal())],
        )
        .unwrap()
    }

    #[test]
    fn naive_picks_lowest_unassigned_index() {
        let csp = triangle();
        let mut state = HashMap::new();
        state.insert(0, 0);
        assert_eq!(NaiveVariableHeuristic.choose(&csp, &state), Some(1));
    }

    #[test]
    fn naive_returns_none_when_fully_assigned() {
        let csp = triangle();
        let mut state = HashMap::new();
        state.insert(0, 0);
        state.insert(1, 0);
        state.insert(2, 0);
        assert_eq!(NaiveVariableHeuristic.choose(&csp, &state), None);
    }

    #[test]
    fn smallest_domain_picks_most_constrained() {
        let csp = triangle();
        let state = HashMap::new();
        // variable 1 has a single live value, the smallest domain.
        assert_eq!(SmallestDomainHeuristic.choose(&csp, &state), Some(1));
    }

    #[test]
    fn smallest_domain_ignores_assigned_variables() {
        let csp = triangle();
        let mut state = HashMap::new();
        state.insert(1, 0);
        // with the smallest-domain variable already assigned, 0 (domain size
        // 2) beats 2 (domain size 3).
        assert_eq!(SmallestDomainHeuristic.choose(&csp, &state), Some(0));
    }
}
