//! Round state machine
//!
//! One round: a secret word, a reveal board, the set of guessed letters, and
//! a wrong-guess budget. Guesses are applied one at a time until the board is
//! complete (won) or the budget is exhausted (lost).

use std::collections::BTreeSet;

use crate::core::{Board, Secret};

/// Default wrong-guess budget per round
pub const MAX_WRONG_GUESSES: u32 = 8;

/// Terminal status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

/// What applying one guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter occurs in the secret; matching positions were revealed
    Hit,
    /// Letter does not occur; one wrong guess was spent
    Miss,
    /// Letter was guessed before; nothing changed
    Repeat,
}

/// State for one complete play-through of a secret word
#[derive(Debug, Clone)]
pub struct Round {
    secret: Secret,
    board: Board,
    used: BTreeSet<char>,
    lives_left: u32,
    lives_total: u32,
}

impl Round {
    /// Start a round over `secret` with a wrong-guess budget of `lives`
    #[must_use]
    pub fn new(secret: Secret, lives: u32) -> Self {
        let board = Board::new(&secret);
        Self {
            secret,
            board,
            used: BTreeSet::new(),
            lives_left: lives,
            lives_total: lives,
        }
    }

    /// Apply one normalized guess letter
    ///
    /// A repeated letter changes nothing and never costs a wrong guess. A hit
    /// reveals every matching board position; a miss spends one wrong guess.
    /// Only meaningful while the round is in progress.
    pub fn apply(&mut self, letter: char) -> GuessOutcome {
        debug_assert!(
            letter.is_ascii_uppercase(),
            "guesses are normalized to A-Z before apply"
        );
        debug_assert!(
            self.state() == RoundState::InProgress,
            "no guesses after a terminal state"
        );

        if !self.used.insert(letter) {
            return GuessOutcome::Repeat;
        }

        if self.secret.contains(letter) {
            self.board.apply(&self.secret, letter);
            GuessOutcome::Hit
        } else {
            self.lives_left = self.lives_left.saturating_sub(1);
            GuessOutcome::Miss
        }
    }

    /// Reveal one randomly chosen still-hidden letter, spending a wrong guess
    ///
    /// Refused (returns `None`) when the board is already complete or when
    /// fewer than two wrong guesses remain, so a hint can never end the round
    /// as a loss by itself. Returns the revealed letter.
    pub fn hint(&mut self) -> Option<char> {
        use rand::prelude::IndexedRandom;

        if self.board.is_complete() || self.lives_left <= 1 {
            return None;
        }

        let hidden: BTreeSet<char> = self
            .board
            .hidden_positions()
            .map(|i| self.secret.char_at(i))
            .collect();
        let hidden: Vec<char> = hidden.into_iter().collect();

        let letter = *hidden.choose(&mut rand::rng())?;
        self.used.insert(letter);
        self.board.apply(&self.secret, letter);
        self.lives_left -= 1;

        Some(letter)
    }

    /// Current state, derived from the board and the remaining budget
    ///
    /// `Won` and `Lost` are mutually exclusive: a complete board wins even if
    /// the final guess spent the last wrong guess earlier in the round.
    #[must_use]
    pub fn state(&self) -> RoundState {
        if self.board.is_complete() {
            RoundState::Won
        } else if self.lives_left == 0 {
            RoundState::Lost
        } else {
            RoundState::InProgress
        }
    }

    /// True once the round has reached a terminal state
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state() != RoundState::InProgress
    }

    /// The secret word being guessed
    #[must_use]
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// The reveal board
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Letters guessed so far, in sorted order
    #[must_use]
    pub fn used_letters(&self) -> &BTreeSet<char> {
        &self.used
    }

    /// Wrong guesses remaining
    #[must_use]
    pub fn lives_left(&self) -> u32 {
        self.lives_left
    }

    /// The round's initial wrong-guess budget
    #[must_use]
    pub fn lives_total(&self) -> u32 {
        self.lives_total
    }
}
