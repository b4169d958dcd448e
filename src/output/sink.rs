//! Observers for session progress
//!
//! A session reports every step and its final outcome to a [`ReportSink`].
//! How that is rendered is up to the sink.

use crate::core::{Pattern, Word};
use crate::solver::{Outcome, SessionState};

/// Emitted after every guess
#[derive(Debug, Clone, Copy)]
pub struct StepEvent<'e> {
    /// 1-based attempt number
    pub attempt: usize,
    pub guess: &'e Word,
    pub pattern: Pattern,
    /// Candidates still consistent after this guess
    pub remaining: usize,
    pub strategy: &'static str,
}

/// Emitted once a session reaches a terminal state
#[derive(Debug, Clone, Copy)]
pub struct SessionReport<'e> {
    pub strategy: &'static str,
    pub target: &'e Word,
    pub state: SessionState,
    pub outcome: Outcome,
    pub history: &'e [(Word, Pattern)],
    /// Remaining candidates, only when the session failed
    pub survivors: Option<&'e [Word]>,
}

/// Receives session events
pub trait ReportSink {
    fn on_step(&mut self, event: &StepEvent<'_>);

    fn on_finish(&mut self, report: &SessionReport<'_>);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn on_step(&mut self, _event: &StepEvent<'_>) {}

    fn on_finish(&mut self, _report: &SessionReport<'_>) {}
}

/// Forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        log::info!(
            "Guess {}: {} -> {} ({} candidates remain, method: {})",
            event.attempt,
            event.guess,
            event.pattern,
            event.remaining,
            event.strategy
        );
    }

    fn on_finish(&mut self, report: &SessionReport<'_>) {
        if report.outcome.solved {
            log::info!(
                "Solved '{}' in {} guesses ({})",
                report.target,
                report.outcome.attempts_used,
                report.strategy
            );
        } else {
            let survivors: Vec<&str> = report
                .survivors
                .unwrap_or_default()
                .iter()
                .map(Word::text)
                .collect();
            log::info!(
                "Failed to solve '{}' after {} attempts ({}, {}); possible words: {survivors:?}",
                report.target,
                report.outcome.attempts_used,
                report.state.label(),
                report.strategy
            );
        }
    }
}

/// Owned copy of a [`StepEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedStep {
    pub attempt: usize,
    pub guess: Word,
    pub pattern: Pattern,
    pub remaining: usize,
    pub strategy: &'static str,
}

/// Keeps every event in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub steps: Vec<RecordedStep>,
    pub outcome: Option<Outcome>,
    pub survivors: Option<Vec<Word>>,
}

impl ReportSink for RecordingSink {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        self.steps.push(RecordedStep {
            attempt: event.attempt,
            guess: event.guess.clone(),
            pattern: event.pattern,
            remaining: event.remaining,
            strategy: event.strategy,
        });
    }

    fn on_finish(&mut self, report: &SessionReport<'_>) {
        self.outcome = Some(report.outcome);
        self.survivors = report.survivors.map(<[Word]>::to_vec);
    }
}
