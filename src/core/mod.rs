//! Core rule engine for Word Scramble
//!
//! This module contains the letter arithmetic, session state and the
//! validation chain. Nothing here touches the terminal or the filesystem.

mod letters;
mod outcome;
mod session;
mod validator;

pub use letters::LetterCounts;
pub use outcome::{Outcome, RejectionReason};
pub use session::{FALLBACK_ROOT_WORD, GameSession};
pub use validator::{MIN_WORD_LENGTH, Validator, normalize};
