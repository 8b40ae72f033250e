//! Formatting utilities for terminal output

use crate::core::RejectionReason;

/// Short headline for a rejection
#[must_use]
pub const fn rejection_title(reason: RejectionReason) -> &'static str {
    match reason {
        RejectionReason::AlreadyUsed => "Word used already",
        RejectionReason::NotComposable => "Word not possible",
        RejectionReason::TooShort => "Too short",
        RejectionReason::EqualToRoot => "Word equal to root",
        RejectionReason::NotARealWord => "Word not recognized",
    }
}

/// Explanation shown under the headline
#[must_use]
pub fn rejection_message(reason: RejectionReason, root_word: &str) -> String {
    match reason {
        RejectionReason::AlreadyUsed => "Be more original".to_string(),
        RejectionReason::NotComposable => format!("You can't spell that word from '{root_word}'"),
        RejectionReason::TooShort => "Stop being lazy and write a nice word".to_string(),
        RejectionReason::EqualToRoot => "Come on. Are you trying to cheat me?".to_string(),
        RejectionReason::NotARealWord => "You can't just make them up, you know".to_string(),
    }
}

/// Word prefixed with its length badge, e.g. `(4) silk`
#[must_use]
pub fn word_with_badge(word: &str) -> String {
    format!("({}) {word}", word.chars().count())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
