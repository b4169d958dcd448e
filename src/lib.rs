//! Wordle Solver
//!
//! A deduction-game solver: narrows a word corpus down to a hidden target by
//! guessing, reading positional feedback and filtering the candidates.
//! Guesses come from one of three strategies (random, positional letter
//! frequency, entropy maximization).
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_solver::config::SolverConfig;
//! use wordle_solver::core::Word;
//! use wordle_solver::output::NullSink;
//! use wordle_solver::solver::{EntropyStrategy, SolverSession};
//! use wordle_solver::wordlists::{SAMPLE, parse_words};
//!
//! let corpus = parse_words(SAMPLE).unwrap();
//! let target = Word::new("smile").unwrap();
//!
//! let mut session =
//!     SolverSession::new(SolverConfig::default(), &corpus, target, EntropyStrategy).unwrap();
//! let outcome = session.run(&mut NullSink);
//! assert!(outcome.solved);
//! ```

// Core domain types
pub mod core;

// Session configuration
pub mod config;

// Contract errors
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output and reporting sinks
pub mod output;

pub use error::{Result, SolverError};
