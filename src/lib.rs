//! Word Scramble
//!
//! A word game: spell as many words as possible from the letters of a root
//! word. Each accepted word scores one point per letter.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Outcome, RejectionReason};
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::Game;
//!
//! let dictionary = WordListDictionary::new("en", ["silk", "worm"]);
//! let mut game = Game::new(dictionary, "en", &[]);
//! game.start_with("silkworm");
//!
//! assert_eq!(game.submit("silk").unwrap(), Some(Outcome::Accepted { points: 4 }));
//! assert_eq!(
//!     game.submit("silk").unwrap(),
//!     Some(Outcome::Rejected(RejectionReason::AlreadyUsed))
//! );
//! assert_eq!(game.current_score(), 4);
//! ```

// Core rule engine
pub mod core;

// Dictionary lookups
pub mod dictionary;

// Session driver and root word selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
