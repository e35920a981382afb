//! Mystery Word - CLI
//!
//! Console word-guessing game. Running with no arguments starts the
//! interactive session with the embedded vocabulary and the default
//! wrong-guess budget.

use anyhow::Result;
use clap::Parser;
use mystery_word::{
    commands::run_play,
    core::Secret,
    game::MAX_WRONG_GUESSES,
    wordlists::{
        WORDS,
        loader::{load_from_file, secrets_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "mystery_word",
    about = "Guess the secret word one letter at a time before your wrong guesses run out",
    version,
    author
)]
struct Cli {
    /// Wordlist: 'embedded' (default) or path to a file of words
    #[arg(short = 'w', long, default_value = "embedded")]
    wordlist: String,

    /// Wrong guesses allowed per round
    #[arg(short = 'l', long, default_value_t = MAX_WRONG_GUESSES)]
    lives: u32,
}

/// Load the vocabulary based on the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": load a custom word file, one word per line
fn load_vocabulary(wordlist_mode: &str) -> Result<Vec<Secret>> {
    match wordlist_mode {
        "embedded" => Ok(secrets_from_slice(WORDS)),
        path => {
            let words = load_from_file(path)?;
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vocabulary = load_vocabulary(&cli.wordlist)?;
    anyhow::ensure!(
        !vocabulary.is_empty(),
        "word list '{}' contains no usable words",
        cli.wordlist
    );
    anyhow::ensure!(cli.lives >= 1, "at least one wrong guess must be allowed");

    run_play(&vocabulary, cli.lives).map_err(|e| anyhow::anyhow!(e))
}
