//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::{entropy, frequency};
use crate::core::Word;
use crate::error::SolverError;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A strategy for picking the next guess from the remaining candidates
pub trait Strategy {
    /// Short name used in reports
    fn name(&self) -> &'static str;

    /// Select a guess from `candidates`
    ///
    /// Returns `None` when the set is empty; the caller cannot continue.
    fn select_guess<'c>(&mut self, candidates: &'c [Word]) -> Option<&'c Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Uniform random choice
    Random(RandomStrategy),
    /// Positional letter-frequency score
    Frequency(FrequencyStrategy),
    /// Pure entropy maximization
    Entropy(EntropyStrategy),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Random(s) => s.name(),
            Self::Frequency(s) => s.name(),
            Self::Entropy(s) => s.name(),
        }
    }

    fn select_guess<'c>(&mut self, candidates: &'c [Word]) -> Option<&'c Word> {
        match self {
            Self::Random(s) => s.select_guess(candidates),
            Self::Frequency(s) => s.select_guess(candidates),
            Self::Entropy(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 3] = ["random", "frequency", "entropy"];

    /// Create strategy from name string
    ///
    /// Supported names: "random", "frequency" (or "freq"), "entropy".
    /// `seed` fixes the random strategy's generator; without it the generator
    /// is seeded from the OS.
    ///
    /// # Errors
    /// `UnknownStrategy` for any other name.
    pub fn from_name(name: &str, seed: Option<u64>) -> Result<Self, SolverError> {
        match name.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random(RandomStrategy::with_seed(seed))),
            "frequency" | "freq" => Ok(Self::Frequency(FrequencyStrategy)),
            "entropy" => Ok(Self::Entropy(EntropyStrategy)),
            _ => Err(SolverError::UnknownStrategy(name.to_string())),
        }
    }

    /// One instance of every strategy, in [`StrategyType::NAMES`] order
    #[must_use]
    pub fn all(seed: Option<u64>) -> Vec<Self> {
        vec![
            Self::Random(RandomStrategy::with_seed(seed)),
            Self::Frequency(FrequencyStrategy),
            Self::Entropy(EntropyStrategy),
        ]
    }
}

impl std::str::FromStr for StrategyType {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s, None)
    }
}

/// Random strategy
///
/// Picks uniformly among the candidates using an injected generator, so tests
/// can supply a seeded one.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    /// Draw from `rng`
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStrategy<StdRng> {
    /// Reproducible generator from a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, OS entropy otherwise
    #[must_use]
    pub fn with_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_guess<'c>(&mut self, candidates: &'c [Word]) -> Option<&'c Word> {
        candidates.choose(&mut self.rng)
    }
}

/// Frequency-weighted strategy
///
/// Picks the candidate with the highest positional letter-frequency score.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn select_guess<'c>(&mut self, candidates: &'c [Word]) -> Option<&'c Word> {
        frequency::select_best_guess(candidates).map(|(best, _)| best)
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the candidate whose feedback splits the remaining set with
/// the highest Shannon entropy. Cost is quadratic in the candidate count.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn select_guess<'c>(&mut self, candidates: &'c [Word]) -> Option<&'c Word> {
        entropy::select_best_guess(candidates, candidates).map(|(best, _)| best)
    }
}
