//! The result of a search run: whether it solved the problem, the final
//! assignment (if any), and the run's statistics.

use std::collections::HashMap;
use std::fmt::Debug;

use serde::Serialize;

use crate::csp::Csp;
use crate::solver::stats::SearchStats;

#[derive(Debug, Clone, Serialize)]
pub struct SolveOutcome<V> {
    pub assignment: Option<HashMap<String, V>>,
    pub stats: SearchStats,
}

impl<V: Clone + PartialEq + Debug + 'static> SolveOutcome<V> {
    pub fn solved(csp: &Csp<V>, state: &HashMap<usize, V>, stats: SearchStats) -> Self {
        let assignment = (0..csp.num_variables())
            .map(|v| (csp.label(v).to_string(), state[&v].clone()))
            .collect();
        Self {
            assignment: Some(assignment),
            stats,
        }
    }

    pub fn unsolved(stats: SearchStats) -> Self {
        Self {
            assignment: None,
            stats,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.assignment.is_some()
    }
}

impl<V: Serialize> SolveOutcome<V> {
    /// Renders the outcome as pretty-printed JSON, for `--json` demo output.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
