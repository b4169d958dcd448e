//! Wordle Solver - CLI
//!
//! Plays the deduction game against a chosen target with random, frequency or
//! entropy guess selection.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_solver::{
    commands::{analyze_word, compare_strategies, run_benchmark, solve_word},
    config::SolverConfig,
    core::Word,
    output::{
        ConsoleSink, LogSink, print_analysis_result, print_benchmark_result, print_comparison,
        print_solve_details, print_solve_header,
    },
    solver::{Strategy, StrategyType},
    wordlists::{SAMPLE, SAMPLE_FIRST_GUESS, parse_words},
};

#[derive(Parser)]
#[command(
    name = "wordle_solver",
    about = "Wordle-style deduction solver (random, frequency and entropy strategies)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: random, frequency, entropy
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Corpus as comma-separated words (default: built-in seven-word sample)
    #[arg(short = 'w', long, global = true, value_delimiter = ',')]
    words: Vec<String>,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,

    /// Attempt budget per game
    #[arg(short = 'm', long, global = true, default_value_t = 6)]
    max_attempts: usize,

    /// Fixed opening guess for every strategy (default: CRANE with the sample corpus)
    #[arg(short = 'f', long, global = true)]
    first_guess: Option<String>,

    /// Seed for the random strategy
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log every step
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show per-guess entropy and candidate counts
        #[arg(short, long)]
        details: bool,
    },

    /// Solve a target once with every strategy
    Compare {
        /// The target word to solve
        word: String,
    },

    /// Run the strategy against every corpus word as target
    Benchmark {
        /// Limit number of targets
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Analyze the entropy of a guess over the corpus
    Analyze {
        /// Word to analyze
        word: String,
    },
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

/// Build the corpus and configuration from the global flags
fn load_setup(cli: &Cli) -> Result<(Vec<Word>, SolverConfig)> {
    let using_sample = cli.words.is_empty();
    let corpus = if using_sample {
        parse_words(SAMPLE)?
    } else {
        parse_words(&cli.words).context("Invalid corpus")?
    };

    let mut config = SolverConfig::new(cli.length, cli.max_attempts);
    let first_guess = cli
        .first_guess
        .as_deref()
        .or(using_sample.then_some(SAMPLE_FIRST_GUESS));
    if let Some(first) = first_guess {
        config = config.with_first_guess(Word::new(first).context("Invalid first guess")?);
    }
    config.validate()?;

    log::debug!(
        "Corpus of {} words, length {}, {} attempts",
        corpus.len(),
        config.word_length,
        config.max_attempts
    );
    Ok((corpus, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let (corpus, config) = load_setup(&cli)?;

    match &cli.command {
        Commands::Solve { word, details } => {
            let strategy = StrategyType::from_name(&cli.strategy, cli.seed)?;
            print_solve_header(word, strategy.name());
            let result = solve_word(&config, strategy, &corpus, word, &mut ConsoleSink)?;
            if *details {
                print_solve_details(&result);
            }
        }
        Commands::Compare { word } => {
            let results = compare_strategies(&config, &corpus, word, cli.seed, &mut LogSink)?;
            print_comparison(&results);
        }
        Commands::Benchmark { count } => {
            let strategy = StrategyType::from_name(&cli.strategy, cli.seed)?;
            let targets = &corpus[..count.unwrap_or(corpus.len()).min(corpus.len())];
            println!(
                "Running benchmark on {} words ({})...",
                targets.len(),
                strategy.name()
            );
            let result = run_benchmark(&config, strategy, &corpus, targets, true, &mut LogSink)?;
            print_benchmark_result(&result, config.max_attempts);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&config, word, &corpus)?;
            print_analysis_result(&result);
        }
    }

    Ok(())
}
