//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use crate::config::SolverConfig;
use crate::core::Word;
use crate::error::Result;
use crate::solver::entropy::calculate_metrics;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub worst_case: usize,
    pub total_candidates: usize,
}

/// Analyze the entropy of a guess against a set of candidates
///
/// The word does not need to be a candidate itself.
///
/// # Errors
///
/// Returns an error if the word is invalid or its length differs from
/// `config.word_length`.
pub fn analyze_word(config: &SolverConfig, word: &str, candidates: &[Word]) -> Result<AnalysisResult> {
    let guess = Word::new(word)?;
    config.check_length(&guess)?;

    let metrics = calculate_metrics(&guess, candidates);
    let expected_reduction = metrics.entropy.exp2();

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction,
        expected_remaining: metrics.expected_remaining,
        worst_case: metrics.max_partition,
        total_candidates: candidates.len(),
    })
}
