//! Builders that turn a handful of classic benchmark instances into a
//! [`Csp`](crate::csp::Csp), so the demos and tests have something to run
//! against beyond hand-rolled toy problems.

pub mod coloring;
pub mod queens;
pub mod sudoku;
