//! Wordle Wrangler - CLI
//!
//! Auto-plays Wordle games, assists with real ones from F/P/U feedback, and
//! maintains dictionary files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use wordle_wrangler::{
    commands::{PlayConfig, play_game, run_assist, run_bench},
    core::Word,
    output::{print_bench_result, print_play_result},
    solver::RandomChooser,
    wordlists::{
        WORDS,
        loader::{clean_file, load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wrangler",
    about = "Wordle solver ranking guesses by how many candidates they eliminate",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (whitespace-separated words); default is the embedded list
    #[arg(short = 'w', long, global = true)]
    words: Option<String>,

    /// Seed for random choices, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Auto-play a game (default)
    Play {
        /// Secret word; random if omitted
        secret: Option<String>,
    },

    /// Suggest guesses for a game whose answer is unknown
    Assist,

    /// Auto-play a game for each of the first N dictionary words
    Bench {
        /// Number of secrets to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Remove duplicate words from a dictionary file
    Clean {
        /// Dictionary file to rewrite
        path: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_words(path: Option<&str>) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path).with_context(|| format!("Failed to read {path}")),
        None => Ok(words_from_slice(WORDS)),
    }
}

fn chooser(seed: Option<u64>) -> RandomChooser {
    seed.map_or_else(RandomChooser::new, RandomChooser::seeded)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { secret: None });

    match command {
        Commands::Play { secret } => {
            run_play_command(secret.as_deref(), cli.words.as_deref(), cli.seed)
        }
        Commands::Assist => run_assist_command(cli.words.as_deref(), cli.seed),
        Commands::Bench { count } => run_bench_command(count, cli.words.as_deref(), cli.seed),
        Commands::Clean { path } => run_clean_command(&path),
    }
}

fn run_play_command(secret: Option<&str>, words_path: Option<&str>, seed: Option<u64>) -> Result<()> {
    let words = load_words(words_path)?;
    let secret = secret.map(Word::new).transpose()?;

    let config = PlayConfig::new(secret);
    let result = play_game(&config, words, &mut chooser(seed))?;

    print_play_result(&result);
    Ok(())
}

fn run_assist_command(words_path: Option<&str>, seed: Option<u64>) -> Result<()> {
    let words = load_words(words_path)?;
    run_assist(&words, &mut chooser(seed)).map_err(|e| anyhow::anyhow!(e))
}

fn run_bench_command(count: usize, words_path: Option<&str>, seed: Option<u64>) -> Result<()> {
    let words = load_words(words_path)?;
    println!(
        "🎯 Playing {} games over {} words...",
        count.min(words.len()),
        words.len()
    );

    let result = run_bench(&words, count, true, &mut chooser(seed))?;
    print_bench_result(&result);
    Ok(())
}

fn run_clean_command(path: &str) -> Result<()> {
    let count = clean_file(path).with_context(|| format!("Failed to clean {path}"))?;
    println!(
        "{}",
        format!("Found {count} unique words.").green().bold()
    );
    Ok(())
}
