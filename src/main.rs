//! Wordle Elimination Solver - CLI
//!
//! Ranks guesses by expected eliminations and narrows the possible words from
//! the colours each guess receives.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use std::io;
use wordle_elimination::{
    commands::{
        analyze_word, apply_results, letter_statistics, rank_starters, run_compare,
        run_interactive, simulate_game,
    },
    config::GameConfig,
    core::{CandidateSet, ColorNotation, DEFAULT_WORD_LENGTH},
    output::{print_analysis, print_comparison, print_ranking, print_simulation, print_stats},
    solver::Ranking,
    wordlists::{DEFAULT_WORDLIST, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_elimination",
    about = "Wordle solver that ranks guesses by expected eliminations",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: String,

    /// Letters per word; other dictionary lines are skipped
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Symbols for green, yellow and gray, in that order
    #[arg(long, global = true, default_value = "gyr")]
    notation: ColorNotation,

    /// Games taking more guesses than this count as failures
    #[arg(long, global = true, default_value_t = 6)]
    max_tries: usize,

    /// Words shown per ranking
    #[arg(long, global = true, default_value_t = 10)]
    show: usize,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive helper: suggests words and narrows on your results (default)
    Play,

    /// Highest-scoring starter words
    Best {
        /// Number of words to list
        #[arg(default_value_t = 10)]
        count: usize,
    },

    /// Lowest-scoring starter words
    Worst {
        /// Number of words to list
        #[arg(default_value_t = 10)]
        count: usize,
    },

    /// Play a known solution with a strategy: validonly or maxeliminations
    Simulate {
        strategy: String,
        word: String,
    },

    /// Compare both strategies on random dictionary words
    Compare {
        /// Number of random words to play
        #[arg(short = 'n', long, default_value_t = 500)]
        sample: usize,
    },

    /// Letter counts over the dictionary
    Stats,

    /// Score a word and, for small sets, its exact expected remaining words
    Analyze {
        /// Word to analyze
        word: String,

        /// Earlier guess and its colours, e.g. --result crane rgyrr
        #[arg(long = "result", num_args = 2, value_names = ["GUESS", "PATTERN"])]
        results: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig {
        word_length: cli.length,
        max_tries: cli.max_tries,
        words_to_show: cli.show,
        notation: cli.notation,
    };

    let words = load_from_file(&cli.wordlist, config.word_length)
        .with_context(|| format!("failed to load word list \"{}\"", cli.wordlist))?;
    let mut candidates = CandidateSet::new(words, config.word_length)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&mut candidates, &config),
        Commands::Best { count } => {
            print_ranking(&rank_starters(&candidates, count, Ranking::Best));
            Ok(())
        }
        Commands::Worst { count } => {
            print_ranking(&rank_starters(&candidates, count, Ranking::Worst));
            Ok(())
        }
        Commands::Simulate { strategy, word } => {
            let result = simulate_game(
                &strategy,
                &word,
                candidates.all_words(),
                config.word_length,
            )?;
            print_simulation(&result, &config.notation, config.max_tries);
            Ok(())
        }
        Commands::Compare { sample } => {
            println!("Comparing strategies on {sample} random words...");
            let result = run_compare(&candidates, sample, config.max_tries, &mut rand::rng(), true)?;
            print_comparison(&result);
            Ok(())
        }
        Commands::Stats => {
            print_stats(&letter_statistics(&candidates));
            Ok(())
        }
        Commands::Analyze { word, results } => {
            let pairs: Vec<(String, String)> = results
                .chunks_exact(2)
                .map(|pair| (pair[0].clone(), pair[1].clone()))
                .collect();
            apply_results(&mut candidates, &pairs, &config.notation)?;
            print_analysis(&analyze_word(&word, &candidates)?);
            Ok(())
        }
    }
}

fn run_play_command(candidates: &mut CandidateSet, config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive(candidates, config, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
