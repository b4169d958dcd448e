//! Guess/feedback/filter loop against one hidden target

use super::filter;
use super::strategy::Strategy;
use crate::config::SolverConfig;
use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::output::sink::{ReportSink, SessionReport, StepEvent};

/// Ordered log of guesses and the feedback each received
pub type GuessRecord = Vec<(Word, Pattern)>;

/// Where a session stands
///
/// `attempts` counts guesses played so far. A stuck session also counts the
/// attempt that found no candidate to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Still guessing
    Active { attempts: usize },
    /// Last guess matched the target
    Solved { attempts: usize },
    /// Attempt budget used up without a match
    Exhausted { attempts: usize },
    /// No candidate left to guess on the attempt that ran dry
    Stuck { attempts: usize },
}

impl SessionState {
    /// True for every state except `Active`
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active { .. })
    }

    /// Attempts counted so far
    #[must_use]
    pub const fn attempts(self) -> usize {
        match self {
            Self::Active { attempts }
            | Self::Solved { attempts }
            | Self::Exhausted { attempts }
            | Self::Stuck { attempts } => attempts,
        }
    }

    /// Result tuple for terminal states, `None` while active
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Active { .. } => None,
            Self::Solved { attempts } => Some(Outcome {
                solved: true,
                attempts_used: attempts,
            }),
            Self::Exhausted { attempts } | Self::Stuck { attempts } => Some(Outcome {
                solved: false,
                attempts_used: attempts,
            }),
        }
    }

    /// Lowercase name for reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active { .. } => "active",
            Self::Solved { .. } => "solved",
            Self::Exhausted { .. } => "exhausted",
            Self::Stuck { .. } => "stuck",
        }
    }
}

/// Final result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub solved: bool,
    pub attempts_used: usize,
}

/// One game against a hidden target
///
/// Owns the shrinking candidate set and the guess record. The corpus is
/// borrowed so the session can be [`reset`](Self::reset) for a new target.
pub struct SolverSession<'a, S: Strategy> {
    config: SolverConfig,
    corpus: &'a [Word],
    strategy: S,
    target: Word,
    candidates: Vec<Word>,
    history: GuessRecord,
    state: SessionState,
}

impl<'a, S: Strategy> SolverSession<'a, S> {
    /// Start a session at `Active { attempts: 0 }`
    ///
    /// # Errors
    /// Fails if the configuration is invalid, or if the target or any corpus
    /// word does not have the configured length.
    pub fn new(config: SolverConfig, corpus: &'a [Word], target: Word, strategy: S) -> Result<Self> {
        config.validate()?;
        for word in corpus {
            config.check_length(word)?;
        }
        config.check_length(&target)?;

        Ok(Self {
            history: Vec::with_capacity(config.max_attempts),
            candidates: corpus.to_vec(),
            config,
            corpus,
            strategy,
            target,
            state: SessionState::Active { attempts: 0 },
        })
    }

    /// Discard all progress and play again against `target`
    ///
    /// # Errors
    /// `LengthMismatch` if the target has the wrong length; the session is
    /// left untouched in that case.
    pub fn reset(&mut self, target: Word) -> Result<()> {
        self.config.check_length(&target)?;
        self.target = target;
        self.candidates = self.corpus.to_vec();
        self.history.clear();
        self.state = SessionState::Active { attempts: 0 };
        Ok(())
    }

    /// Play one guess
    ///
    /// Does nothing once the session has reached a terminal state.
    pub fn step(&mut self, sink: &mut dyn ReportSink) -> SessionState {
        let SessionState::Active { attempts } = self.state else {
            return self.state;
        };

        let Some(guess) = self.next_guess(attempts) else {
            log::debug!(
                "No guess available on attempt {} ({})",
                attempts + 1,
                self.strategy.name()
            );
            self.state = SessionState::Stuck {
                attempts: attempts + 1,
            };
            return self.state;
        };

        let pattern = Pattern::calculate(&guess, &self.target);
        let attempts = attempts + 1;

        if pattern.is_perfect() {
            self.candidates = vec![guess.clone()];
            self.state = SessionState::Solved { attempts };
        } else {
            self.candidates = filter::retain(&self.candidates, &guess, pattern);
            self.state = if attempts >= self.config.max_attempts {
                SessionState::Exhausted { attempts }
            } else {
                SessionState::Active { attempts }
            };
        }

        sink.on_step(&StepEvent {
            attempt: attempts,
            guess: &guess,
            pattern,
            remaining: self.candidates.len(),
            strategy: self.strategy.name(),
        });
        self.history.push((guess, pattern));

        self.state
    }

    /// Step until a terminal state, then report the outcome
    pub fn run(&mut self, sink: &mut dyn ReportSink) -> Outcome {
        loop {
            if let Some(outcome) = self.step(sink).outcome() {
                self.finish(sink, outcome);
                return outcome;
            }
        }
    }

    fn finish(&self, sink: &mut dyn ReportSink, outcome: Outcome) {
        log::debug!(
            "Session for '{}' ended {} after {} attempts ({})",
            self.target,
            self.state.label(),
            outcome.attempts_used,
            self.strategy.name()
        );

        sink.on_finish(&SessionReport {
            strategy: self.strategy.name(),
            target: &self.target,
            state: self.state,
            outcome,
            history: &self.history,
            survivors: (!outcome.solved).then_some(self.candidates.as_slice()),
        });
    }

    fn next_guess(&mut self, attempts: usize) -> Option<Word> {
        if self.candidates.is_empty() {
            return None;
        }
        if attempts == 0
            && let Some(first) = &self.config.first_guess
        {
            return Some(first.clone());
        }
        self.strategy.select_guess(&self.candidates).cloned()
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Outcome once terminal, `None` while active
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Words still consistent with every guess so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Guesses played, in order, with their feedback
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// The hidden word
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Configuration the session was built with
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Name of the guess selection strategy
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use crate::output::sink::NullSink;
    use crate::solver::strategy::{EntropyStrategy, FrequencyStrategy, RandomStrategy};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn sample() -> Vec<Word> {
        words(&["crane", "house", "smile", "grape", "stone", "flame", "lakes"])
    }

    fn crane_first() -> SolverConfig {
        SolverConfig::default().with_first_guess(word("crane"))
    }

    #[test]
    fn starts_active_with_full_corpus() {
        let corpus = sample();
        let session =
            SolverSession::new(SolverConfig::default(), &corpus, word("smile"), EntropyStrategy)
                .unwrap();

        assert_eq!(session.state(), SessionState::Active { attempts: 0 });
        assert_eq!(session.candidates(), corpus.as_slice());
        assert!(session.history().is_empty());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn entropy_solves_in_three() {
        let corpus = sample();
        let mut session =
            SolverSession::new(crane_first(), &corpus, word("smile"), EntropyStrategy).unwrap();

        // crane -> {house, smile}; house -> {smile}; smile
        assert_eq!(session.step(&mut NullSink), SessionState::Active { attempts: 1 });
        assert_eq!(session.candidates(), words(&["house", "smile"]).as_slice());
        assert_eq!(session.step(&mut NullSink), SessionState::Active { attempts: 2 });
        assert_eq!(session.candidates(), words(&["smile"]).as_slice());
        assert_eq!(session.step(&mut NullSink), SessionState::Solved { attempts: 3 });

        let guesses: Vec<&str> = session.history().iter().map(|(g, _)| g.text()).collect();
        assert_eq!(guesses, ["crane", "house", "smile"]);
    }

    #[test]
    fn frequency_solves_in_three() {
        let corpus = sample();
        let mut session =
            SolverSession::new(crane_first(), &corpus, word("smile"), FrequencyStrategy).unwrap();

        let outcome = session.run(&mut NullSink);
        assert_eq!(
            outcome,
            Outcome {
                solved: true,
                attempts_used: 3
            }
        );
    }

    #[test]
    fn first_guess_is_played_first() {
        let corpus = sample();
        let mut session =
            SolverSession::new(crane_first(), &corpus, word("lakes"), RandomStrategy::seeded(9))
                .unwrap();

        session.step(&mut NullSink);
        assert_eq!(session.history()[0].0.text(), "crane");
    }

    #[test]
    fn lucky_first_guess_solves_in_one() {
        let corpus = sample();
        let mut session =
            SolverSession::new(crane_first(), &corpus, word("crane"), EntropyStrategy).unwrap();

        let outcome = session.run(&mut NullSink);
        assert!(outcome.solved);
        assert_eq!(outcome.attempts_used, 1);
        assert_eq!(session.candidates(), words(&["crane"]).as_slice());
    }

    #[test]
    fn target_outside_corpus_gets_stuck() {
        // CRANE against SMILE leaves nothing: CRATE has a C
        let corpus = words(&["crane", "crate"]);
        let mut session =
            SolverSession::new(SolverConfig::default(), &corpus, word("smile"), FrequencyStrategy)
                .unwrap();

        let outcome = session.run(&mut NullSink);
        // One guess played, the second attempt finds nothing
        assert_eq!(session.state(), SessionState::Stuck { attempts: 2 });
        assert!(!outcome.solved);
        assert_eq!(outcome.attempts_used, 2);
        assert_eq!(session.history().len(), 1);
        assert!(session.candidates().is_empty());
    }

    #[test]
    fn empty_corpus_is_stuck_immediately() {
        let mut session =
            SolverSession::new(crane_first(), &[], word("smile"), EntropyStrategy).unwrap();

        assert_eq!(session.step(&mut NullSink), SessionState::Stuck { attempts: 1 });
        assert!(session.history().is_empty());
        assert_eq!(
            session.outcome(),
            Some(Outcome {
                solved: false,
                attempts_used: 1
            })
        );
    }

    #[test]
    fn budget_runs_out() {
        let corpus = sample();
        let config = crane_first().with_max_attempts(1);
        let mut session = SolverSession::new(config, &corpus, word("smile"), EntropyStrategy).unwrap();

        let outcome = session.run(&mut NullSink);
        assert_eq!(session.state(), SessionState::Exhausted { attempts: 1 });
        assert_eq!(
            outcome,
            Outcome {
                solved: false,
                attempts_used: 1
            }
        );
    }

    #[test]
    fn terminal_state_ignores_further_steps() {
        let corpus = sample();
        let mut session =
            SolverSession::new(crane_first(), &corpus, word("crane"), EntropyStrategy).unwrap();
        session.run(&mut NullSink);

        assert_eq!(session.step(&mut NullSink), SessionState::Solved { attempts: 1 });
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn reset_starts_over() {
        let corpus = sample();
        let mut session =
            SolverSession::new(crane_first(), &corpus, word("smile"), EntropyStrategy).unwrap();
        session.run(&mut NullSink);

        session.reset(word("stone")).unwrap();
        assert_eq!(session.state(), SessionState::Active { attempts: 0 });
        assert_eq!(session.candidates().len(), corpus.len());
        assert!(session.history().is_empty());

        assert!(session.run(&mut NullSink).solved);
        assert_eq!(session.target().text(), "stone");
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let corpus = sample();
        let err = SolverSession::new(SolverConfig::default(), &corpus, word("cat"), EntropyStrategy)
            .err()
            .unwrap();
        assert!(matches!(err, SolverError::LengthMismatch { found: 3, .. }));

        let mixed = words(&["crane", "cats"]);
        assert!(
            SolverSession::new(SolverConfig::default(), &mixed, word("crane"), EntropyStrategy)
                .is_err()
        );

        let mut session =
            SolverSession::new(SolverConfig::default(), &corpus, word("smile"), EntropyStrategy)
                .unwrap();
        assert!(session.reset(word("smiles")).is_err());
        assert_eq!(session.target().text(), "smile");
    }

    #[test]
    fn other_word_lengths_work() {
        let corpus = words(&["cat", "cot", "cut", "dog"]);
        let mut session =
            SolverSession::new(SolverConfig::new(3, 4), &corpus, word("cut"), EntropyStrategy)
                .unwrap();
        assert!(session.run(&mut NullSink).solved);
    }
}
