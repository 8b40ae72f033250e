//! Root word analysis
//!
//! Finds every dictionary word a fresh session on a root word would accept.

use crate::core::{GameSession, Outcome, Validator};
use crate::dictionary::WordListDictionary;
use rayon::prelude::*;

/// Every acceptable word for a root word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Score reached by finding every word
    pub max_score: usize,
}

impl AnalysisResult {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Analyze which words can be played on `root` in `language`
///
/// Runs each dictionary word through the same rule chain a session uses,
/// in parallel across the dictionary.
///
/// # Examples
/// ```
/// use word_scramble::commands::analyze_root;
/// use word_scramble::dictionary::WordListDictionary;
///
/// let dictionary = WordListDictionary::new("en", ["silk", "worm", "milk", "mill", "so"]);
/// let result = analyze_root("silkworm", &dictionary, "en");
/// assert_eq!(result.words, ["milk", "silk", "worm"]);
/// assert_eq!(result.max_score, 12);
/// ```
#[must_use]
pub fn analyze_root(
    root: &str,
    dictionary: &WordListDictionary,
    language: &str,
) -> AnalysisResult {
    let session = GameSession::new(root);
    let validator = Validator::new(dictionary, language);

    let candidates: Vec<&str> = dictionary.words().collect();
    let mut scored: Vec<(&str, usize)> = candidates
        .par_iter()
        .filter_map(|&word| match validator.validate(word, &session) {
            Outcome::Accepted { points } => Some((word, points)),
            Outcome::Rejected(_) => None,
        })
        .collect();

    scored.sort_unstable_by(|(a, a_points), (b, b_points)| {
        b_points.cmp(a_points).then_with(|| a.cmp(b))
    });

    let max_score = scored.iter().map(|(_, points)| points).sum();
    let words = scored.into_iter().map(|(word, _)| word.to_string()).collect();

    AnalysisResult {
        root: session.root_word().to_string(),
        words,
        max_score,
    }
}
