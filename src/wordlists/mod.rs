//! Word lists for the game
//!
//! Provides the embedded vocabulary compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn vocabulary_is_not_empty() {
        // The game's startup invariant: there is always a word to pick
        assert!(!WORDS.is_empty());
    }

    #[test]
    fn words_are_valid_secrets() {
        // All words should be uppercase ASCII letters only
        for &word in WORDS {
            assert!(!word.is_empty(), "Empty entry in vocabulary");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn no_duplicate_words() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
