//! Word-list backed dictionary
//!
//! Holds a set of known words for a single language.

use super::{DEFAULT_LANGUAGE, DictionaryOracle};
use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Dictionary backed by an in-memory word set
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary for `language` from a list of words
    ///
    /// Words are trimmed and lowercased; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{DictionaryOracle, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::new("en", ["Silk", "worm", ""]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.is_real_word("silk", "en"));
    /// assert!(!dictionary.is_real_word("silk", "fr"));
    /// ```
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY)
    }

    /// Load a dictionary from a newline-separated file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P, language: impl Into<String>) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::new(language, content.lines()))
    }

    /// Language this dictionary recognizes words for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Iterate over every known word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.words.contains(word)
    }
}
