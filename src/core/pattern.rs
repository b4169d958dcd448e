//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, or all its instances already credited)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! Each position contributes digit × 3^position to a single `u64` code, which
//! keeps patterns `Copy` and cheap to hash when bucketing candidates.

use super::Word;
use super::word::MAX_WORD_LENGTH;
use std::fmt;

/// Per-position verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter does not occur in the target (beyond credited instances)
    Absent,
    /// Letter occurs in the target at another position
    Present,
    /// Letter is at this exact position in the target
    Correct,
}

impl Mark {
    const fn digit(self) -> u64 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u64) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Single-letter form: `G`, `Y` or `X`
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    code: u64,
    len: u8,
}

impl Pattern {
    /// Build a pattern from explicit marks
    ///
    /// Feedback is only ever produced by [`Pattern::calculate`]; this exists so
    /// in-crate tests can describe impossible feedback.
    pub(crate) fn from_marks(marks: &[Mark]) -> Self {
        debug_assert!(marks.len() <= MAX_WORD_LENGTH);
        let code = marks
            .iter()
            .rev()
            .fold(0u64, |acc, mark| acc * 3 + mark.digit());
        Self {
            code,
            len: marks.len() as u8,
        }
    }

    /// Calculate the pattern when `guess` is played and `target` is hidden
    ///
    /// Implements the standard feedback rules, including duplicate letters:
    /// a letter that occurs once in the target is credited at most once.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and remove them from the pool
    /// 2. Second pass: mark present-but-misplaced letters from what remains
    /// 3. Encode as base-3 number
    ///
    /// # Panics
    /// Panics if the words differ in length. Sessions validate lengths up
    /// front, so reaching this is a programming error.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{Word, Pattern};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("abide").unwrap();
    ///
    /// // Only one E is credited, since ABIDE has a single E
    /// assert_eq!(Pattern::calculate(&guess, &target).to_string(), "XXYXY");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        assert_eq!(
            guess.len(),
            target.len(),
            "guess '{guess}' and target '{target}' differ in length"
        );

        let len = guess.len();
        let mut result = [Mark::Absent; MAX_WORD_LENGTH];
        let mut available = target.char_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = Mark::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an uncredited instance remains
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Mark::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self::from_marks(&result[..len])
    }

    /// Raw base-3 code
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.code
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// True only for a zero-length pattern, which `calculate` never produces
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Mark at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn mark(self, position: usize) -> Mark {
        assert!(position < self.len(), "position {position} out of range");
        Mark::from_digit(self.code / 3u64.pow(position as u32) % 3)
    }

    /// Iterate over the marks in position order
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        let mut val = self.code;
        (0..self.len()).map(move |_| {
            let mark = Mark::from_digit(val % 3);
            val /= 3;
            mark
        })
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.code == 3u64.pow(u32::from(self.len)) - 1
    }

    /// Count the Correct positions
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.marks().filter(|&m| m == Mark::Correct).count()
    }

    /// Count the Present positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().filter(|&m| m == Mark::Present).count()
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(guess: &str, target: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = calc("abcde", "fghij");
        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.to_string(), "XXXXX");
        assert_eq!(pattern.count_correct(), 0);
        assert_eq!(pattern.count_present(), 0);
    }

    #[test]
    fn pattern_self_match_is_perfect() {
        for word in ["crane", "speed", "aaaaa", "cat", "zz"] {
            let pattern = calc(word, word);
            assert!(pattern.is_perfect(), "{word}");
            assert_eq!(pattern.count_correct(), word.len());
        }
    }

    #[test]
    fn pattern_duplicate_letter_credited_once() {
        // ABIDE has a single E, so only one of SPEED's two E's is credited
        let pattern = calc("speed", "abide");
        let marks: Vec<Mark> = pattern.marks().collect();
        assert_eq!(
            marks,
            [
                Mark::Absent,
                Mark::Absent,
                Mark::Present,
                Mark::Absent,
                Mark::Present
            ]
        );
    }

    #[test]
    fn pattern_correct_takes_priority_over_present() {
        // ROBOT vs FLOOR: second O is exact, first O still finds the other O
        assert_eq!(calc("robot", "floor").to_string(), "YYXGX");
        // LLAMA vs HELLO: both L's find one of HELLO's two L's
        assert_eq!(calc("llama", "hello").to_string(), "YYXXX");
    }

    #[test]
    fn pattern_duplicates_in_both_words() {
        // SPEED vs ERASE: S yellow, both E's yellow
        assert_eq!(calc("speed", "erase").to_string(), "YXYYX");
    }

    #[test]
    fn pattern_real_example() {
        // CRANE vs SLATE: A and E exact, rest absent
        let pattern = calc("crane", "slate");
        assert_eq!(pattern.to_string(), "XXGXG");
        assert_eq!(pattern.value(), 2 * 9 + 2 * 81);
    }

    #[test]
    fn pattern_mark_accessor() {
        let pattern = calc("crane", "smile");
        assert_eq!(pattern.mark(0), Mark::Absent);
        assert_eq!(pattern.mark(4), Mark::Correct);
        assert_eq!(pattern.len(), 5);
    }

    #[test]
    fn pattern_from_marks_matches_calculate() {
        let marks = [Mark::Absent, Mark::Absent, Mark::Correct, Mark::Absent, Mark::Correct];
        assert_eq!(Pattern::from_marks(&marks), calc("crane", "slate"));
    }

    #[test]
    fn pattern_emoji() {
        assert_eq!(calc("crane", "slate").to_emoji(), "⬜⬜🟩⬜🟩");
    }

    #[test]
    #[should_panic(expected = "differ in length")]
    fn pattern_length_mismatch_panics() {
        let _ = calc("crane", "cat");
    }

    #[test]
    fn pattern_long_words() {
        let word = "abcdefghijklmnopqrstuvwxyzabcdef";
        assert!(calc(word, word).is_perfect());
    }
}
