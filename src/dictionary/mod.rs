//! Dictionary lookups
//!
//! The rule engine only asks one question of a dictionary: is this string a
//! real word in a given language? `DictionaryOracle` is that seam, so any
//! backing source (embedded list, file, spell-checker) can be plugged in and
//! tests can use a fixed fake.

mod word_list;

pub use word_list::WordListDictionary;

/// Language code used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers whether a string is a recognized word
pub trait DictionaryOracle {
    /// Check whether `word` is a real word of `language`
    ///
    /// `word` is already normalized (trimmed, lowercase).
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for &T {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        (**self).is_real_word(word, language)
    }
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for Box<T> {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        (**self).is_real_word(word, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Everything;

    impl DictionaryOracle for Everything {
        fn is_real_word(&self, _word: &str, _language: &str) -> bool {
            true
        }
    }

    #[test]
    fn references_forward_to_oracle() {
        let oracle = Everything;
        let by_ref: &dyn DictionaryOracle = &oracle;
        assert!(by_ref.is_real_word("anything", DEFAULT_LANGUAGE));
        assert!((&by_ref).is_real_word("anything", DEFAULT_LANGUAGE));
    }

    #[test]
    fn boxes_forward_to_oracle() {
        let boxed: Box<dyn DictionaryOracle> = Box::new(Everything);
        assert!(boxed.is_real_word("anything", DEFAULT_LANGUAGE));
    }
}
