//! Game driver
//!
//! `Game` owns the validator, the root word pool and the current session.
//! It is either waiting for its first `start()` or running a session; a new
//! `start()` replaces the running session at any time.
//!
//! Submissions take `&mut self`, so only one can be in flight per game and
//! the session is only updated once the dictionary has answered.

mod selector;

pub use crate::core::FALLBACK_ROOT_WORD;
pub use selector::{select_root_word, select_root_word_with};

use crate::core::{GameSession, Outcome, Validator, normalize};
use crate::dictionary::DictionaryOracle;
use std::fmt;
use tracing::info;

/// Errors from driving a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A word was submitted before any session was started
    NotStarted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "No session started; request a root word first"),
        }
    }
}

impl std::error::Error for GameError {}

#[derive(Debug, Clone)]
enum State {
    Uninitialized,
    Active(GameSession),
}

/// Drives sessions: draws root words and applies validated submissions
pub struct Game<'a, D: DictionaryOracle> {
    validator: Validator<D>,
    root_words: &'a [String],
    state: State,
}

impl<'a, D: DictionaryOracle> Game<'a, D> {
    /// Create a game that checks words against `dictionary` in `language`
    ///
    /// No session is running until [`Game::start`] is called.
    pub fn new(dictionary: D, language: impl Into<String>, root_words: &'a [String]) -> Self {
        Self {
            validator: Validator::new(dictionary, language),
            root_words,
            state: State::Uninitialized,
        }
    }

    /// Start a new session on a randomly drawn root word
    ///
    /// Returns the chosen root word.
    pub fn start(&mut self) -> &str {
        let root = select_root_word(self.root_words);
        self.start_with(root)
    }

    /// Start a new session on a specific root word
    ///
    /// The root is normalized like player input; a blank root starts a
    /// session on [`FALLBACK_ROOT_WORD`].
    pub fn start_with(&mut self, root_word: impl Into<String>) -> &str {
        let session = GameSession::new(root_word);
        info!(
            root = session.root_word(),
            pool = self.root_words.len(),
            "session started"
        );
        self.state = State::Active(session);
        self.root_word().unwrap_or_default()
    }

    /// Normalize, validate and apply one raw submission
    ///
    /// Returns `Ok(None)` when the input is blank after normalization; such
    /// submissions are ignored without touching the session.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotStarted`] if no session is running.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Outcome;
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::game::Game;
    ///
    /// let dictionary = WordListDictionary::new("en", ["silk", "worm"]);
    /// let mut game = Game::new(dictionary, "en", &[]);
    /// game.start_with("silkworm");
    ///
    /// assert_eq!(game.submit(" Silk ").unwrap(), Some(Outcome::Accepted { points: 4 }));
    /// assert_eq!(game.submit("   ").unwrap(), None);
    /// assert_eq!(game.current_score(), 4);
    /// ```
    pub fn submit(&mut self, raw_input: &str) -> Result<Option<Outcome>, GameError> {
        let State::Active(session) = &mut self.state else {
            return Err(GameError::NotStarted);
        };

        let candidate = normalize(raw_input);
        if candidate.is_empty() {
            return Ok(None);
        }

        let outcome = self.validator.validate(&candidate, session);
        session.apply(&candidate, outcome);

        if let Outcome::Accepted { points } = outcome {
            info!(
                word = %candidate,
                points,
                score = session.score(),
                "word accepted"
            );
        }

        Ok(Some(outcome))
    }

    /// Score of the running session, zero before the first start
    #[must_use]
    pub fn current_score(&self) -> usize {
        self.session().map_or(0, GameSession::score)
    }

    /// Accepted words of the running session, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        match self.session() {
            Some(session) => session.used_words(),
            None => &[],
        }
    }

    #[must_use]
    pub fn root_word(&self) -> Option<&str> {
        self.session().map(GameSession::root_word)
    }

    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        match &self.state {
            State::Uninitialized => None,
            State::Active(session) => Some(session),
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, State::Active(_))
    }

    #[must_use]
    pub const fn validator(&self) -> &Validator<D> {
        &self.validator
    }

    /// Root words this game draws from
    #[must_use]
    pub const fn root_words(&self) -> &'a [String] {
        self.root_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RejectionReason;
    use crate::dictionary::WordListDictionary;
    use std::cell::Cell;

    fn scenario_dictionary() -> WordListDictionary {
        WordListDictionary::new("en", ["silk", "sworm", "low", "silkworm"])
    }

    fn assert_score_matches_words<D: DictionaryOracle>(game: &Game<'_, D>) {
        let total: usize = game.used_words().iter().map(|w| w.chars().count()).sum();
        assert_eq!(game.current_score(), total);
    }

    #[test]
    fn silkworm_scenario() {
        let mut game = Game::new(scenario_dictionary(), "en", &[]);
        game.start_with("silkworm");

        assert_eq!(
            game.submit("silk").unwrap(),
            Some(Outcome::Accepted { points: 4 })
        );
        assert_eq!(game.current_score(), 4);
        assert_eq!(game.used_words(), ["silk"]);

        assert_eq!(
            game.submit("silk").unwrap(),
            Some(Outcome::Rejected(RejectionReason::AlreadyUsed))
        );
        assert_eq!(game.current_score(), 4);

        assert_eq!(
            game.submit("silkx").unwrap(),
            Some(Outcome::Rejected(RejectionReason::NotComposable))
        );
        assert_eq!(
            game.submit("si").unwrap(),
            Some(Outcome::Rejected(RejectionReason::TooShort))
        );
        assert_eq!(
            game.submit("silkworm").unwrap(),
            Some(Outcome::Rejected(RejectionReason::EqualToRoot))
        );

        assert_eq!(
            game.submit("sworm").unwrap(),
            Some(Outcome::Accepted { points: 5 })
        );
        assert_eq!(game.current_score(), 9);
        assert_eq!(game.used_words(), ["sworm", "silk"]);
        assert_score_matches_words(&game);
    }

    #[test]
    fn submit_before_start_is_error() {
        let mut game = Game::new(scenario_dictionary(), "en", &[]);
        assert!(!game.is_active());
        assert_eq!(game.submit("silk"), Err(GameError::NotStarted));
        assert_eq!(game.current_score(), 0);
        assert!(game.used_words().is_empty());
        assert_eq!(game.root_word(), None);
    }

    #[test]
    fn blank_submission_is_ignored() {
        let mut game = Game::new(scenario_dictionary(), "en", &[]);
        game.start_with("silkworm");
        game.submit("silk").unwrap();

        assert_eq!(game.submit("").unwrap(), None);
        assert_eq!(game.submit(" \n\t").unwrap(), None);
        assert_eq!(game.used_words(), ["silk"]);
        assert_eq!(game.current_score(), 4);
    }

    #[test]
    fn input_is_normalized_before_validation() {
        let mut game = Game::new(scenario_dictionary(), "en", &[]);
        game.start_with("silkworm");

        assert_eq!(
            game.submit("  LOW\n").unwrap(),
            Some(Outcome::Accepted { points: 3 })
        );
        assert_eq!(game.used_words(), ["low"]);
        assert_eq!(
            game.submit("Low").unwrap(),
            Some(Outcome::Rejected(RejectionReason::AlreadyUsed))
        );
    }

    #[test]
    fn restart_resets_session() {
        let roots = vec!["umbrella".to_string()];
        let mut game = Game::new(scenario_dictionary(), "en", &roots);
        game.start_with("silkworm");
        game.submit("silk").unwrap();
        assert_eq!(game.current_score(), 4);

        assert_eq!(game.start(), "umbrella");
        assert!(game.is_active());
        assert_eq!(game.current_score(), 0);
        assert!(game.used_words().is_empty());
    }

    #[test]
    fn padded_root_is_still_equal_to_root() {
        let mut game = Game::new(scenario_dictionary(), "en", &[]);
        assert_eq!(game.start_with("  Silkworm\n"), "silkworm");

        assert_eq!(
            game.submit("silkworm").unwrap(),
            Some(Outcome::Rejected(RejectionReason::EqualToRoot))
        );
        assert_eq!(
            game.submit("silk").unwrap(),
            Some(Outcome::Accepted { points: 4 })
        );
    }

    #[test]
    fn blank_root_starts_on_fallback() {
        let mut game = Game::new(scenario_dictionary(), "en", &[]);
        for blank in ["", "  \t"] {
            assert_eq!(game.start_with(blank), FALLBACK_ROOT_WORD);
            assert_eq!(game.root_word(), Some(FALLBACK_ROOT_WORD));
        }
        assert!(game.is_active());
        assert_eq!(game.submit("").unwrap(), None);
    }

    #[test]
    fn start_with_empty_pool_uses_fallback() {
        let mut game = Game::new(scenario_dictionary(), "en", &[]);
        assert_eq!(game.start(), FALLBACK_ROOT_WORD);
        assert_eq!(game.root_word(), Some(FALLBACK_ROOT_WORD));
    }

    #[test]
    fn start_draws_from_pool() {
        let roots = vec!["alphabet".to_string(), "triangle".to_string()];
        let mut game = Game::new(scenario_dictionary(), "en", &roots);
        for _ in 0..20 {
            let root = game.start().to_string();
            assert!(roots.contains(&root));
        }
        assert_eq!(game.root_words().len(), 2);
    }

    #[test]
    fn rejected_submissions_leave_session_untouched() {
        let mut game = Game::new(scenario_dictionary(), "en", &[]);
        game.start_with("silkworm");
        game.submit("silk").unwrap();
        let before = game.session().cloned();

        for raw in ["silk", "silkx", "si", "silkworm", "milk"] {
            let outcome = game.submit(raw).unwrap().unwrap();
            assert!(!outcome.is_accepted(), "{raw}");
        }
        assert_eq!(game.session().cloned(), before);
    }

    #[test]
    fn score_tracks_used_words_across_sequence() {
        let dictionary = WordListDictionary::new(
            "en",
            ["silk", "worm", "low", "slow", "milk", "owl", "owls", "sir", "rim"],
        );
        let mut game = Game::new(dictionary, "en", &[]);
        game.start_with("silkworm");

        let inputs = [
            "silk", "worm", "ilk", "low", "LOW", "slow", "milk", "mill", "owl", "owls", "xx",
            "sir", "rim", "silkworm", "", "ro",
        ];
        for raw in inputs {
            game.submit(raw).unwrap();
            assert_score_matches_words(&game);
        }

        let used = game.used_words();
        let unique: std::collections::HashSet<_> = used.iter().collect();
        assert_eq!(unique.len(), used.len());
    }

    /// Oracle that counts lookups, to observe where the chain stops
    struct CountingOracle {
        calls: Cell<usize>,
    }

    impl DictionaryOracle for CountingOracle {
        fn is_real_word(&self, _word: &str, _language: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            true
        }
    }

    #[test]
    fn dictionary_only_consulted_after_cheap_checks() {
        let oracle = CountingOracle {
            calls: Cell::new(0),
        };
        let mut game = Game::new(&oracle, "en", &[]);
        game.start_with("silkworm");

        game.submit("silkx").unwrap();
        game.submit("si").unwrap();
        game.submit("silkworm").unwrap();
        assert_eq!(oracle.calls.get(), 0);

        game.submit("milk").unwrap();
        assert_eq!(oracle.calls.get(), 1);
        game.submit("milk").unwrap();
        assert_eq!(oracle.calls.get(), 1);
    }
}
