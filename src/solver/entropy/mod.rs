//! Entropy-based guess selection
//!
//! Implements Shannon entropy calculation for feedback pattern distributions.
//! This is the foundation of information-theoretic solving.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::select_best_guess;
