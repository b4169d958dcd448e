//! Word representation
//!
//! A Word stores a fixed-length lowercase word as bytes. The length is chosen
//! by the session (five for classic Wordle) but every word in one session
//! must share it.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Longest word a [`Word`] may hold
///
/// Bounded so a feedback pattern still fits its base-3 code in a `u64`.
pub const MAX_WORD_LENGTH: usize = 32;

/// Size of the letter alphabet (`a..=z`)
pub const ALPHABET_SIZE: usize = 26;

/// An immutable word over the lowercase ASCII alphabet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Box<[u8]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must be at most {MAX_WORD_LENGTH} letters, got {0}")]
    TooLong(usize),
    #[error("Word must contain only ASCII letters a-z: {0:?}")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - It is longer than [`MAX_WORD_LENGTH`]
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        // ASCII only from here, so bytes == chars
        if text.len() > MAX_WORD_LENGTH {
            return Err(WordError::TooLong(text.len()));
        }

        let chars = text.as_bytes().into();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: empty words are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Number of times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&ch| ch == letter).count()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for pattern calculation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars.iter() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Alphabet index (0-25) of the letter at `position`
    #[inline]
    pub(crate) fn letter_index(&self, position: usize) -> usize {
        usize::from(self.chars[position] - b'a')
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_other_lengths() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("lengthy").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        let long = "a".repeat(MAX_WORD_LENGTH + 1);
        assert_eq!(Word::new(long), Err(WordError::TooLong(MAX_WORD_LENGTH + 1)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("crané").is_err());
    }

    #[test]
    fn word_letter_queries() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.char_at(0), b's');
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b'z'), 0);
        assert_eq!(word.letter_index(4), 3);
    }

    #[test]
    fn word_char_counts() {
        let counts = Word::new("speed").unwrap().char_counts();
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "SMILE".parse().unwrap();
        assert_eq!(format!("{word}"), "smile");
    }
}
