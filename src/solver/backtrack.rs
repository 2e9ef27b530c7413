//! Chronological backtracking: the simplest complete search, with optional
//! forward checking and AC-3 layered on top.

use std::collections::HashMap;
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

/// Runs chronological backtracking search to completion (or time out).
pub struct BacktrackEngine<V> {
    config: SolverConfig<V>,
    nodes_visited: u64,
    start: Option<Instant>,
}

impl<V: Clone + PartialEq + Debug + 'static> BacktrackEngine<V> {
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

        let solved = self.node(csp, &mut state, None);
        let elapsed = self.start.unwrap().elapsed();
        let timed_out = self.budget_exceeded();
        let result = match (solved, timed_out) {
            (true, _) => ResultKind::Solved,
            (false, true) => ResultKind::TimedOut,
            (false, false) => ResultKind::Unsatisfiable,
        };
        let stats = SearchStats {
            nodes_visited: self.nodes_visited,
            elapsed,
            result,
        };
        if solved {
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
        last_assigned: Option<usize>,
    ) -> bool {
        self.nodes_visited += 1;
        if self.budget_exceeded() {
            return false;
        }

        if !self.consistent_with_last_assignment(csp, state, last_assigned) {
            return false;
        }

        if state.len() == csp.num_variables() {
            return (self.config.leaf_evaluator)(state);
        }

        let pin = last_assigned.map(|l| {
            let value = state[&l].clone();
            (l, csp.domain_mut(l).pin(&value))
        });

        let mut log = ShrinkingLog::new();
        let use_propagation = self.config.use_fc || self.config.use_ac3;

        if self.config.should_run_ac3(self.nodes_visited)
            && ac3(csp, state, last_assigned, &mut log)
        {
            log.rollback(csp);
            self.unpin(csp, pin);
            return false;
        }

        if self.config.use_fc && forward_check(csp, state, last_assigned, &mut log).is_some() {
            log.rollback(csp);
            self.unpin(csp, pin);
            return false;
        }

        let next_var = match self.config.variable_heuristic.choose(csp, state) {
            Some(v) => v,
            None => {
                debug!("no unassigned variable left but state is incomplete");
                return false;
            }
        };
        let candidates = self.config.value_heuristic.order(csp, next_var);

        for value in candidates {
            state.insert(next_var, value);
            if self.node(csp, state, Some(next_var)) {
                return true;
            }
        }

        if use_propagation {
            log.rollback(csp);
        }
        self.unpin(csp, pin);
        state.remove(&next_var);
        false
    }

    /// Mirrors the reference's direct constraint check against every other
    /// currently assigned variable — cheaper than full propagation and run
    /// before it at every node.
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
    use crate::solver::heuristics::SmallestDomainHeuristic;

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
        let mut engine = BacktrackEngine::new(SolverConfig::new());
        let outcome = engine.run(&mut csp);
        assert!(!outcome.is_solved());
    }

    #[test]
    fn three_colors_on_a_triangle_is_solved() {
        let mut csp = triangle_three_colors();
        let mut engine = BacktrackEngine::new(SolverConfig::new());
        let outcome = engine.run(&mut csp);
        assert!(outcome.is_solved());
        let assignment = outcome.assignment.unwrap();
        assert_ne!(assignment["a"], assignment["b"]);
        assert_ne!(assignment["b"], assignment["c"]);
        assert_ne!(assignment["a"], assignment["c"]);
    }

    #[test]
    fn domains_are_restored_after_an_unsat_run() {
        let mut csp = triangle_two_colors();
        let mut engine = BacktrackEngine::new(
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
    fn forward_checking_visits_no_more_nodes_than_plain_search() {
        let mut plain = triangle_three_colors();
        let mut plain_engine = BacktrackEngine::new(SolverConfig::new());
        let plain_stats = plain_engine.run(&mut plain).stats;

        let mut fc = triangle_three_colors();
        let mut fc_engine = BacktrackEngine::new(
            SolverConfig::new()
                .with_forward_checking(true)
                .with_variable_heuristic(SmallestDomainHeuristic),
        );
        let fc_stats = fc_engine.run(&mut fc).stats;

        assert!(fc_stats.nodes_visited <= plain_stats.nodes_visited);
    }
}
