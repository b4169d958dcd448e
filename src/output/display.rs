//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, entropy_bar};
use super::sink::{ReportSink, SessionReport, StepEvent};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Word;
use colored::Colorize;

/// Prints each guess as it is played
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        println!(
            "Guess {}: {} {}  {} (Method: {})",
            event.attempt,
            colored_guess(event.guess.text(), event.pattern),
            event.pattern.to_emoji(),
            format!("{} left", event.remaining).bright_black(),
            event.strategy
        );
    }

    fn on_finish(&mut self, report: &SessionReport<'_>) {
        let attempts = report.outcome.attempts_used;
        if report.outcome.solved {
            println!(
                "{}",
                format!(
                    "✅ Solved in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        } else {
            println!(
                "{}",
                format!(
                    "❌ Failed to solve after {attempts} attempts ({})",
                    report.state.label()
                )
                .red()
                .bold()
            );
            println!(
                "   Final possible words: {}",
                word_list(report.survivors.unwrap_or_default())
            );
        }
    }
}

fn word_list(words: &[Word]) -> String {
    if words.is_empty() {
        return "(none)".to_string();
    }
    words
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the header shown before a session starts
pub fn print_solve_header(target: &str, strategy: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({})",
        target.to_uppercase().bright_yellow().bold(),
        strategy.bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print per-guess statistics of a finished session
pub fn print_solve_details(result: &SolveResult) {
    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.pattern),
            step.pattern.to_emoji()
        );
        println!(
            "  Candidates: {} → {}",
            step.candidates_before, step.candidates_after
        );

        if let Some(entropy) = step.entropy {
            println!("  Entropy:    {entropy:.3} bits");
            if let Some(expected) = step.expected_remaining {
                println!("  Expected:   {expected:.1} candidates");
            }

            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }
}

/// Print one line per strategy for a comparison run
pub fn print_comparison(results: &[SolveResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STRATEGY COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in results {
        let path = result
            .guesses
            .iter()
            .map(|step| step.word.to_uppercase())
            .collect::<Vec<_>>()
            .join(" → ");
        let verdict = if result.outcome.solved {
            format!("solved in {}", result.outcome.attempts_used).green()
        } else {
            format!("{} after {}", result.state.label(), result.outcome.attempts_used).red()
        };
        println!("  {:<10} {verdict:<20} {path}", result.strategy.bright_white().bold());
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.worst_case);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Exhausted:        {}",
        format!("{}", result.exhausted).yellow()
    );
    println!("   Stuck:            {}", format!("{}", result.stuck).red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:        {}", result.min_guesses);
    println!("   Worst case:       {}", result.max_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for guess_count in 1..=max_attempts {
            if let Some(&count) = result.distribution.get(&guess_count) {
                let pct = (count as f64 / result.total_words as f64) * 100.0;
                let bar = create_progress_bar(pct, 100.0, 40);
                println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
            }
        }
    }

    if !result.failed_words.is_empty() {
        println!(
            "\n❌ {} {}",
            "Failed:".red().bold(),
            result.failed_words.join(", ")
        );
    }
}
