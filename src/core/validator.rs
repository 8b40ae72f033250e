//! Candidate word validation
//!
//! Runs the rule chain against a session. Checks run in a fixed order and
//! stop at the first failure, so each candidate gets exactly one reason:
//!
//! 1. not already used
//! 2. spellable from the root word's letters
//! 3. at least [`MIN_WORD_LENGTH`] letters
//! 4. not the root word itself
//! 5. recognized by the dictionary

use super::outcome::{Outcome, RejectionReason};
use super::session::GameSession;
use crate::dictionary::DictionaryOracle;
use tracing::debug;

/// Shortest word that can score
pub const MIN_WORD_LENGTH: usize = 3;

/// Trim surrounding whitespace and lowercase raw player input
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize(" \t "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validates candidate words against a dictionary in one language
#[derive(Debug, Clone)]
pub struct Validator<D: DictionaryOracle> {
    dictionary: D,
    language: String,
}

impl<D: DictionaryOracle> Validator<D> {
    pub fn new(dictionary: D, language: impl Into<String>) -> Self {
        Self {
            dictionary,
            language: language.into(),
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Judge a normalized candidate against the session
    ///
    /// Never mutates the session; the caller applies accepted outcomes.
    pub fn validate(&self, candidate: &str, session: &GameSession) -> Outcome {
        let outcome = match self.first_failure(candidate, session) {
            Some(reason) => Outcome::Rejected(reason),
            None => Outcome::Accepted {
                points: letter_count(candidate),
            },
        };

        if let Outcome::Rejected(reason) = outcome {
            debug!(candidate, %reason, root = session.root_word(), "candidate rejected");
        }
        outcome
    }

    fn first_failure(&self, candidate: &str, session: &GameSession) -> Option<RejectionReason> {
        if !is_original(candidate, session) {
            return Some(RejectionReason::AlreadyUsed);
        }
        if !is_possible(candidate, session) {
            return Some(RejectionReason::NotComposable);
        }
        if !is_long_enough(candidate) {
            return Some(RejectionReason::TooShort);
        }
        if !is_not_root(candidate, session) {
            return Some(RejectionReason::EqualToRoot);
        }
        if !self.dictionary.is_real_word(candidate, &self.language) {
            return Some(RejectionReason::NotARealWord);
        }
        None
    }
}

#[inline]
fn letter_count(word: &str) -> usize {
    word.chars().count()
}

fn is_original(candidate: &str, session: &GameSession) -> bool {
    !session.has_used(candidate)
}

fn is_possible(candidate: &str, session: &GameSession) -> bool {
    session.root_letters().can_spell(candidate)
}

fn is_long_enough(candidate: &str) -> bool {
    letter_count(candidate) >= MIN_WORD_LENGTH
}

fn is_not_root(candidate: &str, session: &GameSession) -> bool {
    candidate != session.root_word()
}
