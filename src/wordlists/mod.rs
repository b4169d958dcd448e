//! Word lists
//!
//! The corpus normally comes from the caller; this module only provides the
//! small built-in sample and strict conversion from strings.

use crate::core::Word;
use crate::error::Result;

/// Seven-word sample corpus used when no words are given
pub const SAMPLE: &[&str] = &["crane", "house", "smile", "grape", "stone", "flame", "lakes"];

/// Opening guess paired with [`SAMPLE`]
pub const SAMPLE_FIRST_GUESS: &str = "crane";

/// Convert strings to words, failing on the first invalid entry
///
/// Entries are trimmed; blank entries are skipped.
///
/// # Errors
/// `InvalidWord` naming the first entry that is not a valid word.
///
/// # Examples
/// ```
/// use wordle_solver::wordlists::{SAMPLE, parse_words};
///
/// let words = parse_words(SAMPLE).unwrap();
/// assert_eq!(words.len(), SAMPLE.len());
/// assert!(parse_words(["crane", "cr4ne"]).is_err());
/// ```
pub fn parse_words<I, S>(entries: I) -> Result<Vec<Word>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let trimmed = entry.as_ref().trim();
            (!trimmed.is_empty()).then(|| Word::new(trimmed).map_err(Into::into))
        })
        .collect()
}
