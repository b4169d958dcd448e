//! Solving algorithms
//!
//! Candidate filtering, the guess selection strategies and the session loop
//! that ties them together.

pub mod entropy;
pub mod filter;
pub mod frequency;
mod session;
pub mod strategy;

pub use session::{GuessRecord, Outcome, SessionState, SolverSession};
pub use strategy::{EntropyStrategy, FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
