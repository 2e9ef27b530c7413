//! Bundles the pluggable pieces a search run needs: heuristics, which
//! propagators to run, how often, a leaf acceptance test, and an optional
//! time budget.

use std::collections::HashMap;
use std::fmt::Debug;
use std::time::Duration;

use crate::solver::heuristics::{NaiveValueHeuristic, NaiveVariableHeuristic};
use crate::solver::heuristics::{ValueHeuristic, VariableHeuristic};

/// Configuration for a single search run. Built with the naive heuristics
/// and no propagation by default; combine `with_*` calls to turn pieces on.
pub struct SolverConfig<V> {
    pub variable_heuristic: Box<dyn VariableHeuristic<V>>,
    pub value_heuristic: Box<dyn ValueHeuristic<V>>,
    pub use_fc: bool,
    pub use_ac3: bool,
    /// AC-3 only runs at nodes whose visit count is a multiple of this.
    /// Forward checking is never gated by it. A value of 1 runs AC-3 at
    /// every node.
    pub ac3_frequency: u64,
    /// `None` or a non-positive duration means unbounded.
    pub time_budget: Option<Duration>,
    /// Accepts or rejects a complete assignment. Decision problems always
    /// accept; optimization drivers reject leaves outside the current bound.
    pub leaf_evaluator: Box<dyn Fn(&HashMap<usize, V>) -> bool>,
}

impl<V: Clone + PartialEq + Debug + 'static> Default for SolverConfig<V> {
    fn default() -> Self {
        Self {
            variable_heuristic: Box::new(NaiveVariableHeuristic),
            value_heuristic: Box::new(NaiveValueHeuristic),
            use_fc: false,
            use_ac3: false,
            ac3_frequency: 1,
            time_budget: None,
            leaf_evaluator: Box::new(|_| true),
        }
    }
}

impl<V: Clone + PartialEq + Debug + 'static> SolverConfig<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_leaf_evaluator(
        mut self,
        f: impl Fn(&HashMap<usize, V>) -> bool + 'static,
    ) -> Self {
        self.leaf_evaluator = Box::new(f);
        self
    }

    pub fn with_variable_heuristic(mut self, h: impl VariableHeuristic<V> + 'static) -> Self {
        self.variable_heuristic = Box::new(h);
        self
    }

    pub fn with_value_heuristic(mut self, h: impl ValueHeuristic<V> + 'static) -> Self {
        self.value_heuristic = Box::new(h);
        self
    }

    pub fn with_forward_checking(mut self, enabled: bool) -> Self {
        self.use_fc = enabled;
        self
    }

    pub fn with_ac3(mut self, enabled: bool) -> Self {
        self.use_ac3 = enabled;
        self
    }

    pub fn with_ac3_frequency(mut self, frequency: u64) -> Self {
        self.ac3_frequency = frequency.max(1);
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// `true` at nodes `frequency, 2*frequency, 3*frequency, ...`. With
    /// `frequency == 1` that's every node, including the root; with a
    /// higher frequency the root does not get AC-3.
    pub fn should_run_ac3(&self, nodes_visited: u64) -> bool {
        self.use_ac3 && nodes_visited % self.ac3_frequency == 0
    }
}
