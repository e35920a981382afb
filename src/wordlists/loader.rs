//! Word list loading utilities
//!
//! Provides functions to load a vocabulary from a file or from the embedded
//! constant.

use crate::core::Secret;
use std::fs;
use std::io;
use std::path::Path;

/// Load secret-word candidates from a file
///
/// Returns a vector of valid `Secret` instances, skipping blank lines and any
/// entries that are not purely alphabetic.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use mystery_word::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Secret>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Secret::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to a Secret vector
///
/// # Examples
/// ```
/// use mystery_word::wordlists::loader::secrets_from_slice;
/// use mystery_word::wordlists::WORDS;
///
/// let words = secrets_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn secrets_from_slice(slice: &[&str]) -> Vec<Secret> {
    slice.iter().filter_map(|&s| Secret::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_from_slice_converts_valid_words() {
        let input = &["LOOP", "code", "Debug"];
        let words = secrets_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "LOOP");
        assert_eq!(words[1].text(), "CODE");
        assert_eq!(words[2].text(), "DEBUG");
    }

    #[test]
    fn secrets_from_slice_skips_invalid() {
        let input = &["LOOP", "CS106A", "TWO WORDS", "CODE"];
        let words = secrets_from_slice(input);

        // Entries with digits or spaces are dropped
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "LOOP");
        assert_eq!(words[1].text(), "CODE");
    }

    #[test]
    fn secrets_from_slice_empty() {
        let input: &[&str] = &[];
        let words = secrets_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_vocabulary() {
        use crate::wordlists::WORDS;

        let words = secrets_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
