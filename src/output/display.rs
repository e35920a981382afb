//! Display functions for the game console

use super::formatters::{guess_noun, lives_meter, used_letters_line};
use crate::game::Round;
use colored::Colorize;

/// Print the welcome banner and the rules of the game
pub fn print_welcome() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 🎉  Welcome to Mystery Word!  🎉             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I've picked a secret English word. Uncover every letter to win.");
    println!("Type one letter per turn (A-Z). Repeats never cost a guess.\n");
    println!("Commands: 'hint' to reveal a letter (costs one wrong guess),");
    println!("          'quit' to leave the game\n");
}

/// Print the per-turn status block: board, remaining budget, used letters
pub fn print_round_status(round: &Round) {
    let lives = round.lives_left();

    println!("{}", "────────────────────────────────────────────".bright_black());
    println!(
        "The word now looks like this: {}",
        round.board().render().bright_yellow().bold()
    );
    println!(
        "You have {} wrong {} left  {}",
        lives.to_string().bright_cyan(),
        guess_noun(lives),
        lives_meter(lives, round.lives_total()).green()
    );
    println!("Used letters: {}", used_letters_line(round.used_letters()));
}

/// Print the victory banner with the revealed secret
pub fn print_victory(round: &Round) {
    println!("\n{}", "═".repeat(64).bright_cyan());
    println!(
        "{}",
        "    🏆  Y O U   W I N !  🏆    ".bright_green().bold()
    );
    println!("{}", "═".repeat(64).bright_cyan());
    println!(
        "\nCongratulations! You guessed the word: {}\n",
        round.secret().text().bright_yellow().bold()
    );
}

/// Print the defeat notice, disclosing the secret word
pub fn print_defeat(round: &Round) {
    println!("\n{}", "═".repeat(64).bright_black());
    println!("{}", "💀 Out of guesses.".red().bold());
    println!(
        "The word was: {}\n",
        round.secret().text().bright_yellow().bold()
    );
}

/// Print the goodbye message when the session ends
pub fn print_farewell() {
    println!("\n👋 Thanks for playing Mystery Word. Goodbye!\n");
}
