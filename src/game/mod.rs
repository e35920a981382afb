//! Round state machine, guess validation, and secret selection

mod guess;
mod round;

pub use guess::{GuessError, parse_guess};
pub use round::{GuessOutcome, MAX_WRONG_GUESSES, Round, RoundState};

use crate::core::Secret;

/// Pick one secret word uniformly at random from the vocabulary
///
/// Returns `None` if the vocabulary is empty. Callers are expected to
/// guarantee a non-empty vocabulary at startup.
#[must_use]
pub fn choose_secret(vocabulary: &[Secret]) -> Option<&Secret> {
    use rand::prelude::IndexedRandom;

    vocabulary.choose(&mut rand::rng())
}
