//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load words from a newline-separated file
///
/// Each line is trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split text into normalized words, one per line
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|&s| normalize(s))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Load root words from `path`, recovering to an empty pool on failure
///
/// An unreadable file is not an error for the game: the selector falls back
/// to its default root word when the pool is empty.
pub fn load_root_words<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    match load_from_file(path) {
        Ok(words) => {
            if words.is_empty() {
                warn!(path = %path.display(), "root word list is empty");
            }
            words
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "root word list unavailable");
            Vec::new()
        }
    }
}
