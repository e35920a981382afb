//! Reveal-state board
//!
//! The board tracks, position by position, which letters of the secret the
//! player has uncovered so far. Hidden positions show a placeholder; correct
//! guesses reveal every matching position in place.

use super::Secret;

/// Symbol shown for a letter position that has not been revealed yet
pub const PLACEHOLDER: char = '-';

/// Per-position reveal state of the secret word
///
/// Invariant: the cell count always equals the secret's letter count.
/// Cells only ever change from placeholder to revealed letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<char>,
}

impl Board {
    /// Create a board of placeholders, one per letter of the secret
    #[must_use]
    pub fn new(secret: &Secret) -> Self {
        Self {
            cells: vec![PLACEHOLDER; secret.len()],
        }
    }

    /// Reveal every position of `letter` found in `secret`
    ///
    /// No-op if the letter does not occur.
    pub fn apply(&mut self, secret: &Secret, letter: char) {
        for &position in secret.positions_of(letter) {
            self.cells[position] = letter;
        }
    }

    /// Render the board as a single spaced string, e.g. `"- O O -"`
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for (i, &cell) in self.cells.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(cell);
        }
        out
    }

    /// True once no placeholder remains
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cells.contains(&PLACEHOLDER)
    }

    /// Number of letter positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the board has no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Positions still showing a placeholder
    pub fn hidden_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == PLACEHOLDER)
            .map(|(i, _)| i)
    }
}
