//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Render the remaining wrong-guess budget as a meter, e.g. `█████░░░`
#[must_use]
pub fn lives_meter(lives_left: u32, total: u32) -> String {
    let total = total as usize;
    let filled = (lives_left as usize).min(total);

    format!("{}{}", "█".repeat(filled), "░".repeat(total - filled))
}

/// Singular/plural noun for a guess count
#[must_use]
pub const fn guess_noun(count: u32) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

/// Render the used-letter set for display, `(none)` when empty
///
/// `BTreeSet` iteration is already sorted, which gives the sorted guess
/// history for free.
#[must_use]
pub fn used_letters_line(used: &BTreeSet<char>) -> String {
    if used.is_empty() {
        "(none)".to_string()
    } else {
        let mut out = String::with_capacity(used.len() * 2);
        for (i, letter) in used.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*letter);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lives_meter_full() {
        assert_eq!(lives_meter(8, 8), "████████");
    }

    #[test]
    fn lives_meter_empty() {
        assert_eq!(lives_meter(0, 8), "░░░░░░░░");
    }

    #[test]
    fn lives_meter_partial() {
        assert_eq!(lives_meter(3, 8), "███░░░░░");
    }

    #[test]
    fn lives_meter_clamps_overflow() {
        assert_eq!(lives_meter(10, 8), "████████");
    }

    #[test]
    fn guess_noun_pluralizes() {
        assert_eq!(guess_noun(1), "guess");
        assert_eq!(guess_noun(0), "guesses");
        assert_eq!(guess_noun(8), "guesses");
    }

    #[test]
    fn used_letters_line_empty() {
        assert_eq!(used_letters_line(&BTreeSet::new()), "(none)");
    }

    #[test]
    fn used_letters_line_sorted() {
        let used: BTreeSet<char> = ['Z', 'A', 'M'].into_iter().collect();
        assert_eq!(used_letters_line(&used), "A M Z");
    }
}
