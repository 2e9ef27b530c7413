//! `bicsp` is a depth-first solver for finite-domain binary constraint
//! satisfaction problems (CSPs).
//!
//! A CSP here is a set of variables, each with a finite domain of values,
//! and a set of binary constraints — predicates over a pair of variables'
//! values. The engine searches for a complete assignment satisfying every
//! constraint, using in-place domain pruning with exact rollback so that a
//! dead end costs no allocation to undo.
//!
//! # Core Concepts
//!
//! - **[`Csp`]**: the problem itself — variables, domains, and constraints.
//! - **[`SolverConfig`]**: which heuristics and propagators a search run
//!   should use.
//! - **[`BacktrackEngine`]** / **[`BackjumpEngine`]**: the two complete
//!   search strategies, differing in how they unwind from a dead end.
//!
//! # Example
//!
//! ```
//! use bicsp::{Csp, PredicateFn, SolverConfig};
//! use bicsp::solver::BacktrackEngine;
//! use std::sync::Arc;
//!
//! let not_equal: PredicateFn<i32> = Arc::new(|a, b| a != b);
//! let mut csp = Csp::construct(
//!     vec!["a".into(), "b".into()],
//!     vec![vec![1, 2], vec![1]],
//!     vec![(0, 1, not_equal)],
//! )
//! .unwrap();
//!
//! let outcome = BacktrackEngine::new(SolverConfig::new()).run(&mut csp);
//! let assignment = outcome.assignment.unwrap();
//! assert_eq!(assignment["a"], 2);
//! ```

pub mod csp;
pub mod error;
pub mod loaders;
pub mod optimization;
pub mod solver;

pub use csp::{Csp, Domain, PredicateFn};
pub use error::{Error, Result};
pub use solver::{
    BackjumpEngine, BacktrackEngine, ResultKind, SearchStats, SolveOutcome, SolverConfig,
};
