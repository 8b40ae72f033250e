//! Session state for one round of play
//!
//! A `GameSession` owns the root word, the accepted words (most recent
//! first) and the score. Words only enter it through an accepted outcome, so
//! the score always equals the summed length of the accepted words.

use super::letters::LetterCounts;
use super::outcome::Outcome;
use super::validator::normalize;

/// Root word used when no usable root word is available
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Root word, accepted words and score of a running session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    root_word: String,
    root_letters: LetterCounts,
    used_words: Vec<String>,
    score: usize,
}

impl GameSession {
    /// Begin a fresh session on `root_word`
    ///
    /// The root word is trimmed and lowercased; a blank root is replaced by
    /// [`FALLBACK_ROOT_WORD`]. Score and history start empty.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::GameSession;
    ///
    /// let session = GameSession::new("SilkWorm");
    /// assert_eq!(session.root_word(), "silkworm");
    /// assert_eq!(session.score(), 0);
    /// assert!(session.used_words().is_empty());
    ///
    /// assert_eq!(GameSession::new("  ").root_word(), "silkworm");
    /// ```
    #[must_use]
    pub fn new(root_word: impl Into<String>) -> Self {
        let root_word = match normalize(&root_word.into()) {
            root if root.is_empty() => FALLBACK_ROOT_WORD.to_string(),
            root => root,
        };
        let root_letters = LetterCounts::new(&root_word);

        Self {
            root_word,
            root_letters,
            used_words: Vec::new(),
            score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Letter counts of the root word
    #[inline]
    #[must_use]
    pub const fn root_letters(&self) -> &LetterCounts {
        &self.root_letters
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Whether `word` was already accepted
    #[must_use]
    pub fn has_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    /// Record `word` if the outcome accepted it; rejections change nothing
    pub(crate) fn apply(&mut self, word: &str, outcome: Outcome) {
        if let Outcome::Accepted { points } = outcome {
            self.used_words.insert(0, word.to_string());
            self.score += points;
        }
    }
}
