//! Error types for CSP construction and instance loading.
//!
//! Search outcomes (solved / unsat / timeout) are not errors — they are
//! ordinary [`crate::solver::outcome::SolveOutcome`] values. Only malformed
//! input is represented here.

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("variable index {index} is out of range (0..{num_variables})")]
    InvalidIndex { index: usize, num_variables: usize },

    #[error("constraint cannot be added between variable {index} and itself")]
    SelfLoop { index: usize },

    #[error("malformed instance file: {0}")]
    Parse(String),
}
