//! Yorkle - CLI
//!
//! Terminal word-guessing game. Plays one game per invocation and keeps a
//! persistent tally of outcomes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use yorkle::{
    core::Word,
    game::play_game,
    output::print_summary,
    stats,
    wordlists::{WordSet, loader},
};

const DEFAULT_WORDS_FILE: &str = "words.txt";
const DEFAULT_ANSWER_FILE: &str = "answer.txt";

#[derive(Parser)]
#[command(
    name = "yorkle",
    about = "Terminal word-guessing game with persistent stats",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file [default: words.txt, or the embedded list]
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Answer file holding the secret word [default: answer.txt, or random]
    #[arg(short = 'a', long, global = true)]
    answer: Option<PathBuf>,

    /// Stats file
    #[arg(short = 's', long, global = true, default_value = "stats.txt")]
    stats: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game (default)
    Play,

    /// Print the stored stats without playing
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli),
        Commands::Stats => {
            print_summary(&stats::load(&cli.stats).summary());
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let words = load_words(cli.words.as_deref())?;
    let secret = load_secret(cli.answer.as_deref(), &words)?;

    let mut player_stats = stats::load(&cli.stats);

    let mut input = io::stdin().lock();
    let Some(attempts_used) = play_game(&words, &secret, &mut input)? else {
        println!("Game abandoned; nothing recorded.");
        return Ok(());
    };

    player_stats.record_outcome(Some(attempts_used));

    // A failed save must not look like success, but the game still counts
    if let Err(err) = stats::save(&cli.stats, &player_stats) {
        eprintln!("Warning: {err:#}");
    }

    println!();
    print_summary(&player_stats.summary());
    Ok(())
}

/// Resolve the accepted-word set
///
/// An explicit `--words` path must load. Otherwise the conventional
/// `words.txt` is used when present, the embedded list when not.
fn load_words(explicit: Option<&Path>) -> Result<WordSet> {
    match explicit {
        Some(path) => loader::load_words(path),
        None if Path::new(DEFAULT_WORDS_FILE).exists() => loader::load_words(DEFAULT_WORDS_FILE),
        None => Ok(loader::embedded_words()),
    }
}

/// Resolve the secret word
///
/// An explicit `--answer` path must load. Otherwise the conventional
/// `answer.txt` is used when present, a random draw from the word set when
/// not.
fn load_secret(explicit: Option<&Path>, words: &WordSet) -> Result<Word> {
    match explicit {
        Some(path) => loader::load_secret(path),
        None if Path::new(DEFAULT_ANSWER_FILE).exists() => loader::load_secret(DEFAULT_ANSWER_FILE),
        None => loader::random_secret(words),
    }
}
