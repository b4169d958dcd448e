//! Core domain types for the deduction game
//!
//! Words and feedback patterns. Everything here is pure and has clear
//! mathematical properties.

mod pattern;
mod word;

pub use pattern::{Mark, Pattern};
pub use word::{ALPHABET_SIZE, MAX_WORD_LENGTH, Word, WordError};
