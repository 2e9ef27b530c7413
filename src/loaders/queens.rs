//! The n-queens CSP: one variable per row, holding the column its queen
//! occupies.

use std::sync::Arc;

use crate::csp::constraint::{and, not_equal, PredicateFn};
use crate::csp::Csp;
use crate::error::Result;

/// Builds the n-queens CSP for an `n x n` board. Variable `i` (0-based) is
/// the column of the queen on row `i`; two queens conflict if they share a
/// column or either diagonal.
pub fn build(n: usize) -> Result<Csp<i32>> {
    let labels = (0..n).map(|i| format!("row{i}")).collect();
    let common_domain: Vec<i32> = (1..=n as i32).collect();
    let domains = vec![common_domain; n];

    let mut constraints = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let row_gap = (j - i) as i32;
            constraints.push((i, j, not_equal_and_off_diagonal(row_gap)));
        }
    }

    Csp::construct(labels, domains, constraints)
}

fn not_equal_and_off_diagonal(row_gap: i32) -> PredicateFn<i32> {
    let no_diagonal_attack: PredicateFn<i32> =
        Arc::new(move |col_i: &i32, col_j: &i32| (col_i - col_j).abs() != row_gap);
    and(not_equal(), no_diagonal_attack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::backtrack::BacktrackEngine;
    use crate::solver::config::SolverConfig;

    #[test]
    fn four_queens_has_a_solution() {
        let mut csp = build(4).unwrap();
        let outcome = BacktrackEngine::new(SolverConfig::new()).run(&mut csp);
        assert!(outcome.is_solved());
    }

    #[test]
    fn two_and_three_queens_are_unsat() {
        for n in [2, 3] {
            let mut csp = build(n).unwrap();
            let outcome = BacktrackEngine::new(SolverConfig::new()).run(&mut csp);
            assert!(!outcome.is_solved());
        }
    }

    #[test]
    fn eight_queens_has_a_solution() {
        let mut csp = build(8).unwrap();
        let outcome = BacktrackEngine::new(
            SolverConfig::new().with_forward_checking(true),
        )
        .run(&mut csp);
        assert!(outcome.is_solved());
    }
}
