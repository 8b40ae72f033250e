//! Word lists for Word Scramble
//!
//! Provides the root word pool and the English dictionary, embedded in the
//! binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
