//! Validation outcomes
//!
//! Every candidate is either accepted for a number of points or rejected for
//! exactly one reason.

use std::fmt;

/// Why a candidate word was refused
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// The word was already accepted this session
    AlreadyUsed,
    /// The word cannot be spelled from the root word's letters
    NotComposable,
    /// The word is shorter than the minimum length
    TooShort,
    /// The word is the root word itself
    EqualToRoot,
    /// The dictionary does not recognize the word
    NotARealWord,
}

impl RejectionReason {
    /// All reasons, in check order
    pub const ALL: [Self; 5] = [
        Self::AlreadyUsed,
        Self::NotComposable,
        Self::TooShort,
        Self::EqualToRoot,
        Self::NotARealWord,
    ];

    /// Stable machine-readable code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "already-used",
            Self::NotComposable => "not-composable",
            Self::TooShort => "too-short",
            Self::EqualToRoot => "equal-to-root",
            Self::NotARealWord => "not-a-real-word",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of validating a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The word is valid and earns `points`
    Accepted { points: usize },
    /// The word is invalid for the given reason
    Rejected(RejectionReason),
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Points earned, zero for a rejection
    #[inline]
    #[must_use]
    pub const fn points(&self) -> usize {
        match self {
            Self::Accepted { points } => *points,
            Self::Rejected(_) => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}
