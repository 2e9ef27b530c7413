//! Conflict-directed backjumping: when a subtree is exhausted, compute how
//! far up the assignment order a dead end is actually relevant to, and
//! unwind directly there instead of backtracking one level at a time.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::time::Instant;

use tracing::debug;

use crate::csp::Csp;
use crate::solver::arc3::ac3;
use crate::solver::config::SolverConfig;
use crate::solver::forward_checking::forward_check;
use crate::solver::outcome::SolveOutcome;
use crate::solver::shrinking_log::ShrinkingLog;
use crate::solver::stats::{ResultKind, SearchStats};

/// A node's outcome: whether it succeeded, how many levels its caller
/// should unwind before trying another value (`None` on success), and the
/// set of ancestor variables this dead end is actually relevant to.
struct NodeResult {
    success: bool,
    jump: Option<usize>,
    relevant: HashSet<usize>,
}

pub struct BackjumpEngine<V> {
    config: SolverConfig<V>,
    nodes_visited: u64,
    start: Option<Instant>,
}

impl<V: Clone + PartialEq + Debug + 'static> BackjumpEngine<V> {
    pub fn new(config: SolverConfig<V>) -> Self {
        Self {
            config,
            nodes_visited: 0,
            start: None,
        }
    }

    pub fn run(&mut self, csp: &mut Csp<V>) -> SolveOutcome<V> {
        self.nodes_visited = 0;
        self.start = Some(Instant::now());
        let mut state = HashMap::new();
        let mut order = Vec::new();

        let result = self.node(csp, &mut state, &mut order, None);
        let elapsed = self.start.unwrap().elapsed();
        let timed_out = self.budget_exceeded();
        let outcome_kind = match (result.success, timed_out) {
            (true, _) => ResultKind::Solved,
            (false, true) => ResultKind::TimedOut,
            (false, false) => ResultKind::Unsatisfiable,
        };
        let stats = SearchStats {
            nodes_visited: self.nodes_visited,
            elapsed,
            result: outcome_kind,
        };
        if result.success {
            SolveOutcome::solved(csp, &state, stats)
        } else {
            SolveOutcome::unsolved(stats)
        }
    }

    fn budget_exceeded(&self) -> bool {
        match self.config.time_budget {
            Some(budget) if !budget.is_zero() => self.start.unwrap().elapsed() >= budget,
            _ => false,
        }
    }

    fn node(
        &mut self,
        csp: &mut Csp<V>,
        state: &mut HashMap<usize, V>,
        order: &mut Vec<usize>,
        last_assigned: Option<usize>,
    ) -> NodeResult {
        self.nodes_visited += 1;

        if self.budget_exceeded() {
            return NodeResult {
                success: false,
                jump: Some(csp.num_variables().max(1)),
                relevant: HashSet::new(),
            };
        }

        if !self.consistent_with_last_assignment(csp, state, last_assigned) {
            return NodeResult {
                success: false,
                jump: Some(1),
                relevant: HashSet::new(),
            };
        }

        if state.len() == csp.num_variables() {
            let accepted = (self.config.leaf_evaluator)(state);
            return NodeResult {
                success: accepted,
                jump: None,
                relevant: HashSet::new(),
            };
        }

        let pin = last_assigned.map(|l| {
            let value = state[&l].clone();
            (l, csp.domain_mut(l).pin(&value))
        });

        let mut log = ShrinkingLog::new();

        // Unlike chronological backtracking, AC-3 here is never gated by a
        // frequency counter: the reference backjump driver runs it at every
        // node when enabled.
        if self.config.use_ac3 && ac3(csp, state, last_assigned, &mut log) {
            log.rollback(csp);
            self.unpin(csp, pin);
            return NodeResult {
                success: false,
                jump: Some(1),
                relevant: HashSet::new(),
            };
        }

        if self.config.use_fc {
            if let Some(emptied) = forward_check(csp, state, last_assigned, &mut log) {
                log.rollback(csp);
                self.unpin(csp, pin);
                let mut relevant = HashSet::new();
                relevant.insert(emptied);
                return NodeResult {
                    success: false,
                    jump: Some(1),
                    relevant,
                };
            }
        }

        let next_var = match self.config.variable_heuristic.choose(csp, state) {
            Some(v) => v,
            None => {
                debug!("no unassigned variable left but state is incomplete");
                return NodeResult {
                    success: false,
                    jump: Some(1),
                    relevant: HashSet::new(),
                };
            }
        };
        let candidates = self.config.value_heuristic.order(csp, next_var);
        order.push(next_var);

        let mut relevant_variables = HashSet::new();

        for value in candidates {
            state.insert(next_var, value);
            let child = self.node(csp, state, order, Some(next_var));

            if child.success {
                return NodeResult {
                    success: true,
                    jump: None,
                    relevant: HashSet::new(),
                };
            }

            let child_jump = child.jump.unwrap_or(1);

            if child_jump > 1 {
                log.rollback(csp);
                self.unpin(csp, pin);
                state.remove(&next_var);
                order.pop();
                return NodeResult {
                    success: false,
                    jump: Some(child_jump - 1),
                    relevant: child.relevant,
                };
            }

            relevant_variables.extend(child.relevant);
        }

        state.remove(&next_var);
        order.pop();
        log.rollback(csp);
        self.unpin(csp, pin);

        relevant_variables.insert(next_var);
        let jump = self.compute_jump(csp, order, &relevant_variables);
        NodeResult {
            success: false,
            jump: Some(jump),
            relevant: relevant_variables,
        }
    }

    /// Unions the neighborhoods of every relevant dead-end variable, then
    /// scans `order` from its tail for the first ancestor in that union.
    /// Returns the 1-based distance from the tail, i.e. how many levels the
    /// caller should unwind to reach (and skip past) that ancestor.
    fn compute_jump(&self, csp: &Csp<V>, order: &[usize], relevant: &HashSet<usize>) -> usize {
        if order.is_empty() {
            return 1;
        }
        let mut relevant_ancestors = HashSet::new();
        for &variable in relevant {
            relevant_ancestors.extend(csp.neighbors(variable).iter().copied());
        }
        let n = order.len();
        for i in 1..=n {
            if relevant_ancestors.contains(&order[n - i]) {
                return i;
            }
        }
        // No ancestor is relevant: every value at the root is exhausted.
        n
    }

    fn consistent_with_last_assignment(
        &self,
        csp: &Csp<V>,
        state: &HashMap<usize, V>,
        last_assigned: Option<usize>,
    ) -> bool {
        let Some(last) = last_assigned else {
            return true;
        };
        let last_value = &state[&last];
        state
            .iter()
            .filter(|&(&other, _)| other != last)
            .all(|(&other, other_value)| csp.check(last, other, last_value, other_value))
    }

    fn unpin(&self, csp: &mut Csp<V>, pin: Option<(usize, (usize, usize))>) {
        if let Some((var, (pos, prior_cursor))) = pin {
            csp.domain_mut(var).unpin(pos, prior_cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::constraint::not_equal;
    use crate::solver::backtrack::BacktrackEngine;

    fn triangle_two_colors() -> Csp<i32> {
        Csp::construct(
            vec!["a".into(), "b".into(), "c".into()],
            vec![vec![0, 1], vec![0, 1], vec![0, 1]],
            vec![
                (0, 1, not_equal()),
                (1, 2, not_equal()),
                (0, 2, not_equal()),
            ],
        )
        .unwrap()
    }

    fn triangle_three_colors() -> Csp<i32> {
        Csp::construct(
            vec!["a".into(), "b".into(), "c".into()],
            vec![vec![0, 1, 2], vec![0, 1, 2], vec![0, 1, 2]],
            vec![
                (0, 1, not_equal()),
                (1, 2, not_equal()),
                (0, 2, not_equal()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn two_colors_on_a_triangle_is_unsat() {
        let mut csp = triangle_two_colors();
        let mut engine = BackjumpEngine::new(SolverConfig::new());
        let outcome = engine.run(&mut csp);
        assert!(!outcome.is_solved());
    }

    #[test]
    fn three_colors_on_a_triangle_is_solved() {
        let mut csp = triangle_three_colors();
        let mut engine = BackjumpEngine::new(SolverConfig::new());
        let outcome = engine.run(&mut csp);
        assert!(outcome.is_solved());
    }

    #[test]
    fn domains_are_restored_after_an_unsat_run() {
        let mut csp = triangle_two_colors();
        let mut engine = BackjumpEngine::new(
            SolverConfig::new()
                .with_forward_checking(true)
                .with_ac3(true),
        );
        engine.run(&mut csp);
        for v in 0..csp.num_variables() {
            assert_eq!(csp.domain(v).live_count(), 2);
        }
    }

    #[test]
    fn backjump_agrees_with_backtrack_on_satisfiability() {
        let mut a = triangle_three_colors();
        let mut b = triangle_three_colors();
        let backtrack_solved = BacktrackEngine::new(SolverConfig::new()).run(&mut a).is_solved();
        let backjump_solved = BackjumpEngine::new(SolverConfig::new()).run(&mut b).is_solved();
        assert_eq!(backtrack_solved, backjump_solved);
    }

    fn random_coloring(num_nodes: usize, edges: &[(usize, usize)], num_colors: u32) -> Csp<u32> {
        let labels = (0..num_nodes).map(|i| format!("n{i}")).collect();
        let domains = vec![(0..num_colors).collect(); num_nodes];
        let constraints = edges
            .iter()
            .map(|&(i, j)| (i, j, not_equal::<u32>()))
            .collect();
        Csp::construct(labels, domains, constraints).unwrap()
    }

    proptest::proptest! {
        /// Backjumping explores a different tree shape than chronological
        /// backtracking but must agree on satisfiability for every instance,
        /// not just the hand-picked triangle above.
        #[test]
        fn backjump_agrees_with_backtrack_on_random_small_graphs(
            num_nodes in 2usize..6,
            raw_edges in proptest::collection::vec((0usize..6, 0usize..6), 0..10),
            num_colors in 1u32..4,
        ) {
            let edges: Vec<(usize, usize)> = raw_edges
                .into_iter()
                .filter(|&(i, j)| i < num_nodes && j < num_nodes && i != j)
                .map(|(i, j)| if i < j { (i, j) } else { (j, i) })
                .collect();

            let mut a = random_coloring(num_nodes, &edges, num_colors);
            let mut b = random_coloring(num_nodes, &edges, num_colors);
            let backtrack_solved =
                BacktrackEngine::new(SolverConfig::new()).run(&mut a).is_solved();
            let backjump_solved =
                BackjumpEngine::new(SolverConfig::new()).run(&mut b).is_solved();
            assert_eq!(backtrack_solved, backjump_solved);
        }
    }
}
