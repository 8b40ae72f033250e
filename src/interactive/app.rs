//! TUI application state and logic

use crate::commands::{AnalysisResult, analyze_root};
use crate::core::{Outcome, normalize};
use crate::dictionary::WordListDictionary;
use crate::game::Game;
use crate::output::formatters::{rejection_message, rejection_title};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::error;

/// Application state
pub struct App<'a> {
    pub game: Game<'a, WordListDictionary>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub alert: Option<Alert>,
    /// Every playable word for the current root
    pub possible: Option<AnalysisResult>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
}

/// A rejection waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub roots_played: usize,
    pub best_score: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a, WordListDictionary>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Spell words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            alert: None,
            possible: None,
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        }
    }

    /// Draw a fresh root word and reset the score
    pub fn new_word(&mut self) {
        if self.game.is_active() {
            self.record_finished_round();
        }

        let root = self.game.start().to_string();
        let validator = self.game.validator();
        self.possible = Some(analyze_root(
            &root,
            validator.dictionary(),
            validator.language(),
        ));
        self.stats.roots_played += 1;
        self.input_buffer.clear();
        self.alert = None;
        self.input_mode = InputMode::Typing;

        self.add_message(
            &format!("New root word: {}", root.to_uppercase()),
            MessageStyle::Info,
        );
    }

    /// Submit the typed word
    pub fn submit_input(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);

        let outcome = match self.game.submit(&raw) {
            Ok(Some(outcome)) => outcome,
            // Blank input is ignored
            Ok(None) => return,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let word = normalize(&raw);
        match outcome {
            Outcome::Accepted { points } => {
                self.add_message(
                    &format!("{} +{points}", word.to_uppercase()),
                    MessageStyle::Success,
                );
                if self.found_everything() {
                    self.add_message(
                        "🎉 You found every word! Ctrl+N for a new root word.",
                        MessageStyle::Success,
                    );
                }
            }
            Outcome::Rejected(reason) => {
                let root = self.game.root_word().unwrap_or_default();
                self.alert = Some(Alert {
                    title: rejection_title(reason).to_string(),
                    message: rejection_message(reason, root),
                });
                self.input_mode = InputMode::Alert;
                self.add_message(
                    &format!("{word}: {}", rejection_title(reason)),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Alert => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => self.dismiss_alert(),
                _ => {
                    // Alert must be dismissed first
                }
            },
            InputMode::Typing => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_word();
                }
                KeyCode::F(2) => {
                    self.new_word();
                }
                KeyCode::Char(c) => {
                    if !c.is_control() {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    self.submit_input();
                }
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Highest score reachable on the current root
    #[must_use]
    pub fn max_score(&self) -> usize {
        self.possible.as_ref().map_or(0, |p| p.max_score)
    }

    #[must_use]
    pub fn found_everything(&self) -> bool {
        self.possible
            .as_ref()
            .is_some_and(|p| !p.words.is_empty() && self.game.used_words().len() == p.words.len())
    }

    fn record_finished_round(&mut self) {
        self.stats.best_score = self.stats.best_score.max(self.game.current_score());
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "interactive session failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_word();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(roots: &[String]) -> App<'_> {
        let dictionary = WordListDictionary::new("en", ["silk", "worm", "low", "slow"]);
        App::new(Game::new(dictionary, "en", roots))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn new_word_computes_possible_words() {
        let roots = vec!["silkworm".to_string()];
        let mut app = app(&roots);
        app.new_word();

        assert_eq!(app.game.root_word(), Some("silkworm"));
        assert_eq!(app.max_score(), 4 + 4 + 3 + 4);
        assert_eq!(app.stats.roots_played, 1);
    }

    #[test]
    fn possible_words_follow_game_language() {
        let roots = vec!["silkworm".to_string()];
        let dictionary = WordListDictionary::new("en", ["silk", "worm"]);
        let mut app = App::new(Game::new(dictionary, "fr", &roots));
        app.new_word();

        // Nothing is playable in a language the dictionary does not cover
        assert_eq!(app.max_score(), 0);
        assert!(!app.found_everything());
        type_word(&mut app, "silk");
        assert_eq!(app.game.current_score(), 0);
        assert_eq!(app.input_mode, InputMode::Alert);
    }

    #[test]
    fn typing_and_enter_submits() {
        let roots = vec!["silkworm".to_string()];
        let mut app = app(&roots);
        app.new_word();

        type_word(&mut app, "Silk");
        assert_eq!(app.game.current_score(), 4);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn rejection_raises_alert_until_dismissed() {
        let roots = vec!["silkworm".to_string()];
        let mut app = app(&roots);
        app.new_word();

        type_word(&mut app, "silkx");
        assert_eq!(app.input_mode, InputMode::Alert);
        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Word not possible");
        assert_eq!(alert.message, "You can't spell that word from 'silkworm'");

        // Typing is blocked while the alert is shown
        press(&mut app, KeyCode::Char('a'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(app.alert.is_none());
    }

    #[test]
    fn blank_enter_does_nothing() {
        let roots = vec!["silkworm".to_string()];
        let mut app = app(&roots);
        app.new_word();

        type_word(&mut app, "   ");
        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.game.current_score(), 0);
    }

    #[test]
    fn ctrl_n_starts_new_word_and_keeps_best() {
        let roots = vec!["silkworm".to_string()];
        let mut app = app(&roots);
        app.new_word();
        type_word(&mut app, "worm");

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.game.current_score(), 0);
        assert_eq!(app.stats.best_score, 4);
        assert_eq!(app.stats.roots_played, 2);
    }

    #[test]
    fn finding_every_word_is_noticed() {
        let roots = vec!["silkworm".to_string()];
        let mut app = app(&roots);
        app.new_word();

        for word in ["silk", "worm", "low", "slow"] {
            type_word(&mut app, word);
        }
        assert!(app.found_everything());
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app(&[]);
        app.new_word();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app(&[]);
        app.new_word();
        type_word(&mut app, "zzz");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(&[]);
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 8);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }
}
