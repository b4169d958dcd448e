//! Positional letter-frequency scoring
//!
//! Greedy heuristic: prefer the candidate whose letters are most common at
//! their positions across the remaining candidates.

use crate::core::{ALPHABET_SIZE, Word};

/// Per-position letter counts over a candidate set
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: Vec<[usize; ALPHABET_SIZE]>,
}

impl FrequencyTable {
    /// Count letters at each position of `candidates`
    #[must_use]
    pub fn build(candidates: &[Word]) -> Self {
        let width = candidates.first().map_or(0, Word::len);
        let mut counts = vec![[0usize; ALPHABET_SIZE]; width];

        for word in candidates {
            debug_assert_eq!(word.len(), width);
            for (position, slot) in counts.iter_mut().enumerate() {
                slot[word.letter_index(position)] += 1;
            }
        }

        Self { counts }
    }

    /// How many candidates have `letter` at `position`
    #[must_use]
    pub fn count(&self, position: usize, letter: u8) -> usize {
        self.counts
            .get(position)
            .map_or(0, |slot| slot[usize::from(letter - b'a')])
    }

    /// Sum of the frequencies of each letter of `word` at its position
    #[must_use]
    pub fn score(&self, word: &Word) -> usize {
        self.counts
            .iter()
            .enumerate()
            .map(|(position, slot)| slot[word.letter_index(position)])
            .sum()
    }
}

/// Pick the highest scoring candidate, first one on ties
///
/// Returns the word and its score, or `None` for an empty set.
#[must_use]
pub fn select_best_guess(candidates: &[Word]) -> Option<(&Word, usize)> {
    let table = FrequencyTable::build(candidates);

    candidates.iter().fold(None, |best, word| {
        let score = table.score(word);
        match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((word, score)),
        }
    })
}
