//! Benchmark command
//!
//! Runs one strategy against many targets and aggregates the outcomes.

use crate::config::SolverConfig;
use crate::core::Word;
use crate::error::Result;
use crate::output::sink::ReportSink;
use crate::solver::{SessionState, SolverSession, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub stuck: usize,
    pub total_guesses: usize,
    /// Mean attempts over solved targets
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Attempts used -> number of solved targets
    pub distribution: HashMap<usize, usize>,
    pub failed_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run benchmark on a set of target words
///
/// One session is reset for every target, so the random strategy keeps
/// drawing from a single generator across the run.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any corpus word or
/// target has the wrong length.
pub fn run_benchmark<S: Strategy>(
    config: &SolverConfig,
    strategy: S,
    corpus: &[Word],
    targets: &[Word],
    show_progress: bool,
    sink: &mut dyn ReportSink,
) -> Result<BenchmarkResult> {
    for target in targets {
        config.check_length(target)?;
    }

    let Some(first_target) = targets.first() else {
        config.validate()?;
        return Ok(empty_result(strategy.name()));
    };

    let mut session = SolverSession::new(config.clone(), corpus, first_target.clone(), strategy)?;

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut result = empty_result(session.strategy_name());
    result.total_words = targets.len();
    result.min_guesses = usize::MAX;

    for (idx, target) in targets.iter().enumerate() {
        if idx > 0 {
            session.reset(target.clone())?;
        }

        let outcome = session.run(sink);
        match session.state() {
            SessionState::Solved { attempts } => {
                result.solved += 1;
                result.total_guesses += attempts;
                result.min_guesses = result.min_guesses.min(attempts);
                result.max_guesses = result.max_guesses.max(attempts);
                *result.distribution.entry(attempts).or_insert(0) += 1;
            }
            SessionState::Exhausted { .. } => {
                result.exhausted += 1;
                result.failed_words.push(target.text().to_string());
            }
            SessionState::Stuck { .. } => {
                result.stuck += 1;
                result.failed_words.push(target.text().to_string());
            }
            SessionState::Active { .. } => unreachable!("run returns only in a terminal state"),
        }
        log::debug!("{target}: {outcome:?}");

        if result.solved > 0 && idx % 10 == 0 {
            pb.set_message(format!(
                "Avg: {:.2}",
                result.total_guesses as f64 / result.solved as f64
            ));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    result.duration = start.elapsed();
    if result.solved == 0 {
        result.min_guesses = 0;
    } else {
        result.average_guesses = result.total_guesses as f64 / result.solved as f64;
    }
    result.words_per_second =
        result.total_words as f64 / result.duration.as_secs_f64().max(f64::EPSILON);

    Ok(result)
}

fn empty_result(strategy: &'static str) -> BenchmarkResult {
    BenchmarkResult {
        strategy,
        total_words: 0,
        solved: 0,
        exhausted: 0,
        stuck: 0,
        total_guesses: 0,
        average_guesses: 0.0,
        min_guesses: 0,
        max_guesses: 0,
        distribution: HashMap::new(),
        failed_words: Vec::new(),
        duration: Duration::ZERO,
        words_per_second: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::sink::NullSink;
    use crate::solver::{EntropyStrategy, FrequencyStrategy, RandomStrategy};
    use crate::wordlists::{SAMPLE, SAMPLE_FIRST_GUESS, parse_words};

    fn crane_first() -> SolverConfig {
        SolverConfig::default().with_first_guess(Word::new(SAMPLE_FIRST_GUESS).unwrap())
    }

    #[test]
    fn benchmark_solves_whole_sample() {
        let corpus = parse_words(SAMPLE).unwrap();
        let result =
            run_benchmark(&crane_first(), EntropyStrategy, &corpus, &corpus, false, &mut NullSink)
                .unwrap();

        assert_eq!(result.strategy, "entropy");
        assert_eq!(result.total_words, 7);
        assert_eq!(result.solved, 7);
        assert!(result.failed_words.is_empty());
        assert_eq!(result.min_guesses, 1); // CRANE itself
        assert!(result.max_guesses <= 6);
        assert!(result.average_guesses >= 1.0);
    }

    #[test]
    fn benchmark_distribution_sums_to_solved() {
        let corpus = parse_words(SAMPLE).unwrap();
        let result = run_benchmark(
            &crane_first(),
            RandomStrategy::seeded(5),
            &corpus,
            &corpus,
            false,
            &mut NullSink,
        )
        .unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.exhausted + result.stuck, result.total_words);
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }

    #[test]
    fn benchmark_counts_stuck_targets() {
        let corpus = parse_words(&["crane", "crate"]).unwrap();
        let targets = parse_words(&["smile", "crate"]).unwrap();
        let result = run_benchmark(
            &SolverConfig::default(),
            FrequencyStrategy,
            &corpus,
            &targets,
            false,
            &mut NullSink,
        )
        .unwrap();

        assert_eq!(result.stuck, 1);
        assert_eq!(result.solved, 1);
        assert_eq!(result.failed_words, ["smile"]);
    }

    #[test]
    fn benchmark_empty_target_list() {
        let corpus = parse_words(SAMPLE).unwrap();
        let result =
            run_benchmark(&crane_first(), EntropyStrategy, &corpus, &[], false, &mut NullSink)
                .unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn benchmark_rejects_bad_target_length() {
        let corpus = parse_words(SAMPLE).unwrap();
        let targets = parse_words(&["cat"]).unwrap();
        assert!(
            run_benchmark(&crane_first(), EntropyStrategy, &corpus, &targets, false, &mut NullSink)
                .is_err()
        );
    }
}
