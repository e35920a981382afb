//! Interactive play mode
//!
//! The session loop and the round driver: prompt, validate, apply, repeat
//! until the word is revealed or the budget runs out, then offer a rematch.

use crate::core::Secret;
use crate::game::{GuessError, GuessOutcome, Round, RoundState, choose_secret, parse_guess};
use crate::output::{
    print_defeat, print_farewell, print_round_status, print_victory, print_welcome,
};
use std::collections::BTreeSet;
use std::io::{self, Write};

/// How a round handed control back to the session loop
enum RoundExit {
    Finished,
    Quit,
}

/// What the guess prompt produced
enum PromptResult {
    Letter(char),
    Hint,
    Quit,
}

/// Run the interactive session: rounds repeat until the player declines
///
/// Only an explicit `Y` (case-insensitive) at the replay prompt starts
/// another round; anything else ends the session with a farewell.
///
/// # Errors
///
/// Returns an error if reading player input from stdin fails.
pub fn run_play(vocabulary: &[Secret], lives: u32) -> Result<(), String> {
    loop {
        if let RoundExit::Quit = play_round(vocabulary, lives)? {
            print_farewell();
            return Ok(());
        }

        let again = get_user_input("Play again? (Y/N)")?.trim().to_uppercase();
        if again != "Y" {
            print_farewell();
            return Ok(());
        }
    }
}

/// Drive one round from secret selection to its terminal state
fn play_round(vocabulary: &[Secret], lives: u32) -> Result<RoundExit, String> {
    let secret = choose_secret(vocabulary).ok_or("the word list is empty")?;
    let mut round = Round::new(secret.clone(), lives);

    print_welcome();

    while !round.is_over() {
        print_round_status(&round);

        let letter = match prompt_guess(round.used_letters())? {
            PromptResult::Letter(letter) => letter,
            PromptResult::Hint => {
                match round.hint() {
                    Some(letter) => {
                        println!("💡 Revealed '{letter}'. That cost you one wrong guess.\n");
                    }
                    None => {
                        println!("💡 No hints now: you need at least two wrong guesses in reserve.\n");
                    }
                }
                continue;
            }
            PromptResult::Quit => return Ok(RoundExit::Quit),
        };

        match round.apply(letter) {
            GuessOutcome::Hit => println!("✅ That guess is correct!\n"),
            GuessOutcome::Miss => println!("❌ Sorry, that letter is not in the word.\n"),
            // The prompt filters repeats; nothing was consumed either way
            GuessOutcome::Repeat => println!("🔁 You already guessed that letter.\n"),
        }
    }

    match round.state() {
        RoundState::Won => print_victory(&round),
        RoundState::Lost => print_defeat(&round),
        RoundState::InProgress => {}
    }

    Ok(RoundExit::Finished)
}

/// Prompt until the player supplies a valid, previously-unused letter
///
/// Command words (`hint`, `quit`/`exit`) are checked before letter parsing.
/// Malformed input and repeats re-prompt without consuming a turn.
fn prompt_guess(used: &BTreeSet<char>) -> Result<PromptResult, String> {
    loop {
        let raw = get_user_input("Type a single letter here, then press Enter")?;

        match raw.trim().to_lowercase().as_str() {
            "quit" | "exit" => return Ok(PromptResult::Quit),
            "hint" => return Ok(PromptResult::Hint),
            _ => {}
        }

        match parse_guess(&raw, used) {
            Ok(letter) => return Ok(PromptResult::Letter(letter)),
            Err(GuessError::AlreadyUsed(letter)) => {
                println!("🔁 You already guessed '{letter}'. It won't cost you, but pick another.");
            }
            Err(error) => {
                println!("⚠️  {error} Try again.");
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
