//! Letter multiset representation
//!
//! `LetterCounts` records how many times each letter occurs in a word, so a
//! candidate can be checked against a root word in linear time while
//! respecting repeated letters.

use rustc_hash::FxHashMap;

/// Per-letter occurrence counts of a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Count the letters of a word
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let counts = LetterCounts::new("llama");
    /// assert_eq!(counts.count_of('l'), 2);
    /// assert_eq!(counts.count_of('m'), 1);
    /// assert_eq!(counts.count_of('z'), 0);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many times `letter` occurs
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Check whether `candidate` can be spelled from these letters
    ///
    /// Each letter may be used at most as many times as it was counted. The
    /// check stops at the first letter that is exhausted.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let root = LetterCounts::new("silkworm");
    /// assert!(root.can_spell("milk"));
    /// assert!(!root.can_spell("mill")); // only one 'l'
    /// assert!(!root.can_spell("silky"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut remaining = self.counts.clone();
        for letter in candidate.chars() {
            match remaining.get_mut(&letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_letters() {
        let counts = LetterCounts::new("balloon");
        assert_eq!(counts.count_of('b'), 1);
        assert_eq!(counts.count_of('l'), 2);
        assert_eq!(counts.count_of('o'), 2);
        assert_eq!(counts.total(), 7);
    }

    #[test]
    fn empty_word_has_no_letters() {
        let counts = LetterCounts::new("");
        assert_eq!(counts.total(), 0);
        assert!(counts.can_spell(""));
        assert!(!counts.can_spell("a"));
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let root = LetterCounts::new("lama");
        assert!(root.can_spell("lama"));
        assert!(root.can_spell("maal"));
        // Second 'l' is not available
        assert!(!root.can_spell("llama"));
    }

    #[test]
    fn can_spell_rejects_missing_letter() {
        let root = LetterCounts::new("silkworm");
        assert!(!root.can_spell("silkx"));
        assert!(!root.can_spell("x"));
    }

    #[test]
    fn can_spell_is_order_independent() {
        let root = LetterCounts::new("silkworm");
        assert!(root.can_spell("mrowklis"));
        assert!(root.can_spell("worms"));
    }

    #[test]
    fn can_spell_does_not_consume_root() {
        let root = LetterCounts::new("silkworm");
        assert!(root.can_spell("silk"));
        assert!(root.can_spell("silk"));
        assert_eq!(root.total(), 8);
    }

    #[test]
    fn can_spell_handles_non_ascii() {
        let root = LetterCounts::new("café");
        assert!(root.can_spell("éca"));
        // Plain 'e' is a different letter from 'é'
        assert!(!root.can_spell("face"));
    }
}
