//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern};
use colored::{ColoredString, Colorize};

/// Color each letter of `guess` by its mark
#[must_use]
pub fn colored_guess(guess: &str, pattern: Pattern) -> String {
    guess
        .chars()
        .zip(pattern.marks())
        .map(|(ch, mark)| colored_letter(ch, mark).to_string())
        .collect()
}

fn colored_letter(ch: char, mark: Mark) -> ColoredString {
    let letter = ch.to_ascii_uppercase().to_string();
    match mark {
        Mark::Correct => letter.black().on_green().bold(),
        Mark::Present => letter.black().on_yellow().bold(),
        Mark::Absent => letter.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy bar scaled to the most a candidate set of this size can yield
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
