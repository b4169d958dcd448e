//! Strategy comparison command
//!
//! Plays the same target once with every strategy.

use super::solve::{SolveResult, solve_word};
use crate::config::SolverConfig;
use crate::core::Word;
use crate::error::Result;
use crate::output::sink::ReportSink;
use crate::solver::StrategyType;

/// Solve `target` with each strategy in turn
///
/// Results come back in [`StrategyType::NAMES`] order. `seed` fixes the
/// random strategy.
///
/// # Errors
/// Same as [`solve_word`]; the first failing strategy aborts the comparison.
pub fn compare_strategies(
    config: &SolverConfig,
    corpus: &[Word],
    target: &str,
    seed: Option<u64>,
    sink: &mut dyn ReportSink,
) -> Result<Vec<SolveResult>> {
    StrategyType::all(seed)
        .into_iter()
        .map(|strategy| solve_word(config, strategy, corpus, target, sink))
        .collect()
}
