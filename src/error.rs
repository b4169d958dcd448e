use crate::core::WordError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolverError>;

/// Contract violations detected at the library boundary
///
/// Running out of attempts or candidates is not an error; those outcomes are
/// reported through [`crate::solver::Outcome`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("Word '{word}' has {found} letters, session expects {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("Unknown strategy '{0}' (expected random, frequency or entropy)")]
    UnknownStrategy(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
