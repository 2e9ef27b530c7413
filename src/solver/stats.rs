//! Observable counters exposed by a search run, and a table renderer for
//! displaying them.

use std::time::Duration;

use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultKind {
    Solved,
    Unsatisfiable,
    /// The time budget elapsed before the search could decide either way.
    TimedOut,
}

/// Counters reset at the start of every `run` and finalized when it returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub elapsed: Duration,
    pub result: ResultKind,
}

impl SearchStats {
    pub fn render_table(&self) -> String {
        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));
        table.add_row(Row::new(vec![
            Cell::new("Result"),
            Cell::new(match self.result {
                ResultKind::Solved => "solved",
                ResultKind::Unsatisfiable => "unsatisfiable",
                ResultKind::TimedOut => "timed out",
            }),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("Nodes visited"),
            Cell::new(&self.nodes_visited.to_string()),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("Elapsed"),
            Cell::new(&format!("{:.3}ms", self.elapsed.as_secs_f64() * 1000.0)),
        ]));
        table.to_string()
    }
}
