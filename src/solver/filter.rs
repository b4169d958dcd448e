//! Candidate filtering
//!
//! Decides which words could still be the hidden target after a guess and its
//! feedback have been observed.

use crate::core::{ALPHABET_SIZE, Mark, Pattern, Word};

/// Check whether `word` could have produced `pattern` when `guess` was played
///
/// Rules per position:
/// - Correct: `word` has the guessed letter at that position
/// - Present: `word` has the letter, but not at that position
/// - Absent: `word` holds no more copies of the letter than the pattern
///   credited elsewhere (Correct or Present)
///
/// Additionally every credited letter must occur in `word` at least as often
/// as it was credited.
#[must_use]
pub fn is_consistent(word: &Word, guess: &Word, pattern: Pattern) -> bool {
    debug_assert_eq!(word.len(), guess.len());
    debug_assert_eq!(pattern.len(), guess.len());

    // Letters credited by Correct/Present marks, per alphabet slot
    let mut credited = [0usize; ALPHABET_SIZE];
    for (i, mark) in pattern.marks().enumerate() {
        if mark != Mark::Absent {
            credited[guess.letter_index(i)] += 1;
        }
    }

    let mut in_word = [0usize; ALPHABET_SIZE];
    for i in 0..word.len() {
        in_word[word.letter_index(i)] += 1;
    }

    if credited.iter().zip(&in_word).any(|(&need, &have)| have < need) {
        return false;
    }

    pattern.marks().enumerate().all(|(i, mark)| {
        let letter = guess.char_at(i);
        match mark {
            Mark::Correct => word.char_at(i) == letter,
            Mark::Present => word.char_at(i) != letter && word.has_letter(letter),
            Mark::Absent => {
                let slot = guess.letter_index(i);
                in_word[slot] <= credited[slot]
            }
        }
    })
}

/// Keep the candidates consistent with `guess` having produced `pattern`
///
/// Builds a new set in input order; the input is never grown. Applying
/// the same observation twice is a no-op, and the true target always survives
/// its own feedback.
#[must_use]
pub fn retain(candidates: &[Word], guess: &Word, pattern: Pattern) -> Vec<Word> {
    candidates
        .iter()
        .filter(|&candidate| is_consistent(candidate, guess, pattern))
        .cloned()
        .collect()
}
