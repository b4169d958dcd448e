//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::config::SolverConfig;
use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::output::sink::ReportSink;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Outcome, SessionState, SolverSession, Strategy};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub strategy: &'static str,
    pub state: SessionState,
    pub outcome: Outcome,
    pub guesses: Vec<GuessStep>,
    /// Candidates left when the session failed; empty on success
    pub survivors: Vec<Word>,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `target` with one session of `strategy` over `corpus`
///
/// Steps are reported to `sink` as they happen; the returned result adds the
/// entropy each guess had over the candidates it was chosen from.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid
/// - The target, a corpus word or the first guess has the wrong length
/// - The configuration is invalid
///
/// Failing to find the target is not an error; see `SolveResult::outcome`.
pub fn solve_word<S: Strategy>(
    config: &SolverConfig,
    strategy: S,
    corpus: &[Word],
    target: &str,
    sink: &mut dyn ReportSink,
) -> Result<SolveResult> {
    let target_word = Word::new(target)?;
    let mut session = SolverSession::new(config.clone(), corpus, target_word, strategy)?;
    let mut guesses: Vec<GuessStep> = Vec::with_capacity(config.max_attempts);

    while !session.state().is_terminal() {
        let candidates_before = session.candidates().len();
        let prior = (candidates_before > 1).then(|| session.candidates().to_vec());

        session.step(sink);

        // Stuck without playing
        let Some((guess, pattern)) = session.history().get(guesses.len()).cloned() else {
            break;
        };

        let (entropy, expected_remaining) = prior.map_or((None, None), |prior| {
            let metrics = calculate_metrics(&guess, &prior);
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        });

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after: session.candidates().len(),
            entropy,
            expected_remaining,
        });
    }

    // Already terminal, so this only emits the final report
    let outcome = session.run(sink);

    Ok(SolveResult {
        target: session.target().text().to_string(),
        strategy: session.strategy_name(),
        state: session.state(),
        outcome,
        guesses,
        survivors: if outcome.solved {
            Vec::new()
        } else {
            session.candidates().to_vec()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use crate::output::sink::{NullSink, RecordingSink};
    use crate::solver::{EntropyStrategy, FrequencyStrategy};
    use crate::wordlists::{SAMPLE, parse_words};

    fn crane_first() -> SolverConfig {
        SolverConfig::default().with_first_guess(Word::new("crane").unwrap())
    }

    #[test]
    fn solve_word_succeeds() {
        let corpus = parse_words(SAMPLE).unwrap();
        let result = solve_word(&crane_first(), EntropyStrategy, &corpus, "smile", &mut NullSink)
            .unwrap();

        assert!(result.outcome.solved);
        assert_eq!(result.outcome.attempts_used, result.guesses.len());
        assert_eq!(result.state, SessionState::Solved { attempts: 3 });
        assert!(result.survivors.is_empty());
        assert_eq!(result.strategy, "entropy");
    }

    #[test]
    fn solve_records_history() {
        let corpus = parse_words(SAMPLE).unwrap();
        let result =
            solve_word(&crane_first(), FrequencyStrategy, &corpus, "smile", &mut NullSink).unwrap();

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(result.guesses[0].word, "crane");
        assert_eq!(result.guesses[0].candidates_before, 7);
        assert_eq!(result.guesses[0].candidates_after, 2);
        // First guess is scored over the full corpus
        assert!(result.guesses[0].entropy.unwrap() > 0.0);
        assert!(result.guesses.last().unwrap().pattern.is_perfect());
    }

    #[test]
    fn single_candidate_has_no_entropy() {
        let corpus = parse_words(SAMPLE).unwrap();
        let result =
            solve_word(&crane_first(), EntropyStrategy, &corpus, "smile", &mut NullSink).unwrap();

        let last = result.guesses.last().unwrap();
        assert_eq!(last.candidates_before, 1);
        assert!(last.entropy.is_none());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let corpus = parse_words(SAMPLE).unwrap();
        assert!(matches!(
            solve_word(&crane_first(), EntropyStrategy, &corpus, "sm1le", &mut NullSink),
            Err(SolverError::InvalidWord(_))
        ));
        assert!(matches!(
            solve_word(&crane_first(), EntropyStrategy, &corpus, "smiles", &mut NullSink),
            Err(SolverError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn solve_with_max_attempts_limit() {
        let corpus = parse_words(SAMPLE).unwrap();
        let config = crane_first().with_max_attempts(2);

        let mut sink = RecordingSink::default();
        let result = solve_word(&config, EntropyStrategy, &corpus, "smile", &mut sink).unwrap();

        assert!(!result.outcome.solved);
        assert_eq!(result.guesses.len(), 2);
        assert_eq!(result.state, SessionState::Exhausted { attempts: 2 });
        assert_eq!(result.survivors, parse_words(&["smile"]).unwrap());
        assert_eq!(sink.steps.len(), 2);
        assert_eq!(sink.outcome, Some(result.outcome));
    }

    #[test]
    fn stuck_session_has_no_survivors() {
        let corpus = parse_words(&["crane", "crate"]).unwrap();
        let result =
            solve_word(&SolverConfig::default(), EntropyStrategy, &corpus, "smile", &mut NullSink)
                .unwrap();

        assert_eq!(result.state, SessionState::Stuck { attempts: 2 });
        assert_eq!(result.outcome.attempts_used, 2);
        assert_eq!(result.guesses.len(), 1);
        assert!(result.survivors.is_empty());
    }
}
