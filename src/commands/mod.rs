//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod compare;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use compare::compare_strategies;
pub use solve::{GuessStep, SolveResult, solve_word};
