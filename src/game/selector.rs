//! Root word selection

use crate::core::FALLBACK_ROOT_WORD;
use rand::Rng;
use rand::seq::IteratorRandom;

/// Pick a root word uniformly at random from `source`
///
/// Blank entries are not selectable. Returns [`FALLBACK_ROOT_WORD`] when no
/// entry is left to choose from.
///
/// # Examples
/// ```
/// use word_scramble::game::{FALLBACK_ROOT_WORD, select_root_word};
///
/// let source = ["alphabet", "umbrella"];
/// let root = select_root_word(&source);
/// assert!(source.contains(&root.as_str()));
///
/// let empty: [&str; 0] = [];
/// assert_eq!(select_root_word(&empty), FALLBACK_ROOT_WORD);
/// ```
#[must_use]
pub fn select_root_word<S: AsRef<str>>(source: &[S]) -> String {
    select_root_word_with(source, &mut rand::rng())
}

/// Like [`select_root_word`], drawing from the given random source
pub fn select_root_word_with<S, R>(source: &[S], rng: &mut R) -> String
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    source
        .iter()
        .map(|entry| entry.as_ref().trim())
        .filter(|entry| !entry.is_empty())
        .choose(rng)
        .map_or_else(|| FALLBACK_ROOT_WORD.to_string(), str::to_lowercase)
}
