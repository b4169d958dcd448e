//! Session configuration

use crate::core::{MAX_WORD_LENGTH, Word};
use crate::error::{Result, SolverError};

/// Parameters shared by every session of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Letters per word; every corpus word, guess and target must match
    pub word_length: usize,
    /// Attempt budget per session
    pub max_attempts: usize,
    /// Opening guess used by every strategy instead of searching the full corpus
    pub first_guess: Option<Word>,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
            first_guess: None,
        }
    }

    #[must_use]
    pub fn with_first_guess(mut self, first_guess: Word) -> Self {
        self.first_guess = Some(first_guess);
        self
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    /// `InvalidConfig` for a zero attempt budget or an unsupported word length,
    /// `LengthMismatch` if the first guess has the wrong length.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(SolverError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.word_length == 0 || self.word_length > MAX_WORD_LENGTH {
            return Err(SolverError::InvalidConfig(format!(
                "word_length must be between 1 and {MAX_WORD_LENGTH}, got {}",
                self.word_length
            )));
        }
        if let Some(first) = &self.first_guess {
            self.check_length(first)?;
        }
        Ok(())
    }

    /// Fail unless `word` has the configured length
    ///
    /// # Errors
    /// `LengthMismatch` naming the offending word.
    pub fn check_length(&self, word: &Word) -> Result<()> {
        if word.len() == self.word_length {
            Ok(())
        } else {
            Err(SolverError::LengthMismatch {
                word: word.text().to_string(),
                expected: self.word_length,
                found: word.len(),
            })
        }
    }
}

impl Default for SolverConfig {
    /// Classic game: five letters, six attempts, no fixed opening
    fn default() -> Self {
        Self::new(5, 6)
    }
}
