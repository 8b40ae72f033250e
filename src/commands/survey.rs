//! Survey every root word
//!
//! Analyzes each root word in the pool and summarizes how rich each one is.

use super::analyze::analyze_root;
use crate::dictionary::WordListDictionary;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Summary of one surveyed root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: String,
    pub word_count: usize,
    pub max_score: usize,
}

/// Statistics across every surveyed root word
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub average_words: f64,
    pub average_max_score: f64,
    pub richest: Option<RootSummary>,
    pub poorest: Option<RootSummary>,
    /// Roots that allow no word at all
    pub barren: Vec<String>,
    pub summaries: Vec<RootSummary>,
    pub total_time: Duration,
}

/// Analyze every root word (or the first `limit` of them) in `language`
#[must_use]
pub fn run_survey(
    roots: &[String],
    dictionary: &WordListDictionary,
    language: &str,
    limit: Option<usize>,
    show_progress: bool,
) -> SurveyStatistics {
    let roots: Vec<&String> = roots.iter().take(limit.unwrap_or(roots.len())).collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(roots.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut summaries = Vec::with_capacity(roots.len());

    for root in roots {
        let result = analyze_root(root, dictionary, language);
        pb.set_message(format!("{} ({} words)", result.root, result.word_count()));
        pb.inc(1);

        summaries.push(RootSummary {
            root: result.root,
            word_count: result.words.len(),
            max_score: result.max_score,
        });
    }

    pb.finish_with_message("done");

    summarize(summaries, start.elapsed())
}

fn summarize(summaries: Vec<RootSummary>, total_time: Duration) -> SurveyStatistics {
    let total_roots = summaries.len();
    let (average_words, average_max_score) = if total_roots == 0 {
        (0.0, 0.0)
    } else {
        let words: usize = summaries.iter().map(|s| s.word_count).sum();
        let score: usize = summaries.iter().map(|s| s.max_score).sum();
        (
            words as f64 / total_roots as f64,
            score as f64 / total_roots as f64,
        )
    };

    // Ties go to the root listed first
    let richest = summaries
        .iter()
        .rev()
        .max_by_key(|s| s.max_score)
        .cloned();
    let poorest = summaries.iter().min_by_key(|s| s.max_score).cloned();
    let barren = summaries
        .iter()
        .filter(|s| s.word_count == 0)
        .map(|s| s.root.clone())
        .collect();

    SurveyStatistics {
        total_roots,
        average_words,
        average_max_score,
        richest,
        poorest,
        barren,
        summaries,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new("en", ["silk", "worm", "low", "ant", "tan", "bet"])
    }

    fn roots(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn survey_summarizes_roots() {
        let roots = roots(&["silkworm", "ant", "qqqq"]);
        let stats = run_survey(&roots, &dictionary(), "en", None, false);

        assert_eq!(stats.total_roots, 3);
        assert_eq!(stats.summaries[0].word_count, 3);
        assert_eq!(stats.summaries[0].max_score, 11);
        assert_eq!(stats.summaries[1].word_count, 1); // "tan"; "ant" is the root
        assert_eq!(stats.richest.as_ref().unwrap().root, "silkworm");
        assert_eq!(stats.poorest.as_ref().unwrap().root, "qqqq");
        assert_eq!(stats.barren, ["qqqq"]);
        assert!((stats.average_words - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn survey_respects_limit() {
        let roots = roots(&["silkworm", "ant", "qqqq"]);
        let stats = run_survey(&roots, &dictionary(), "en", Some(1), false);
        assert_eq!(stats.total_roots, 1);
        assert_eq!(stats.summaries[0].root, "silkworm");
    }

    #[test]
    fn survey_of_nothing() {
        let stats = run_survey(&[], &dictionary(), "en", None, false);
        assert_eq!(stats.total_roots, 0);
        assert!(stats.richest.is_none());
        assert!(stats.poorest.is_none());
        assert!(stats.average_words.abs() < f64::EPSILON);
    }

    #[test]
    fn richest_tie_goes_to_first() {
        // Both roots only allow "low"
        let roots = roots(&["lows", "slow"]);
        let stats = run_survey(&roots, &dictionary(), "en", None, false);
        assert_eq!(stats.summaries[0].max_score, stats.summaries[1].max_score);
        assert_eq!(stats.richest.unwrap().root, "lows");
    }
}
