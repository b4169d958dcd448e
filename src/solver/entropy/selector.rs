//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;

/// Select best guess by maximizing entropy
///
/// Every word in `guess_pool` is scored against `candidates` in parallel.
/// Ties go to the word that comes first in `guess_pool`, so the result does
/// not depend on scheduling.
///
/// Returns the word with highest entropy and its entropy value,
/// or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.text(), "aeros");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(guess_pool: &'a [Word], candidates: &[Word]) -> Option<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, calculate_entropy(guess, candidates)))
        .reduce_with(|a, b| {
            // Higher entropy wins, then the earlier index
            match a.1.total_cmp(&b.1) {
                std::cmp::Ordering::Less => b,
                std::cmp::Ordering::Greater => a,
                std::cmp::Ordering::Equal => {
                    if a.0 <= b.0 {
                        a
                    } else {
                        b
                    }
                }
            }
        })
        .map(|(index, entropy)| (&guess_pool[index], entropy))
}
