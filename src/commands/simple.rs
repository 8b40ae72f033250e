//! Simple interactive CLI mode
//!
//! Text-based game loop without the full-screen interface

use crate::core::normalize;
use crate::dictionary::DictionaryOracle;
use crate::game::Game;
use crate::output::{print_outcome, print_session};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line of player input, either a command or a word to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Quit,
    NewWord,
    Show,
    Help,
    Word(String),
}

impl LineInput {
    /// Commands start with ':' so they can never clash with a word
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match normalize(line).as_str() {
            ":q" | ":quit" | ":exit" => Self::Quit,
            ":n" | ":new" => Self::NewWord,
            ":s" | ":show" | ":words" => Self::Show,
            ":h" | ":help" | ":?" => Self::Help,
            _ => Self::Word(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading player input.
pub fn run_simple<D: DictionaryOracle>(game: &mut Game<'_, D>) -> Result<(), String> {
    let stdin = io::stdin();
    play_lines(game, &mut stdin.lock())
}

/// Play from any line source until it ends or the player quits
///
/// # Errors
///
/// Returns an error if reading a line fails.
pub fn play_lines<D: DictionaryOracle, R: BufRead>(
    game: &mut Game<'_, D>,
    input: &mut R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell as many words as you can from the letters of the root word.");
    println!("Each word scores one point per letter.\n");
    print_help();

    let root = game.start().to_string();
    announce_root(&root);

    loop {
        let Some(line) = read_line("Your word", input)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match LineInput::parse(&line) {
            LineInput::Quit => {
                if let Some(session) = game.session() {
                    print_session(session);
                }
                println!("👋 Thanks for playing!\n");
                return Ok(());
            }
            LineInput::NewWord => {
                let root = game.start().to_string();
                println!("\n🔄 New word! Score reset.");
                announce_root(&root);
            }
            LineInput::Show => {
                if let Some(session) = game.session() {
                    print_session(session);
                }
            }
            LineInput::Help => print_help(),
            LineInput::Word(raw) => match game.submit(&raw) {
                Ok(Some(outcome)) => {
                    if let Some(session) = game.session() {
                        print_outcome(outcome, &normalize(&raw), session);
                        println!(
                            "   Score: {}\n",
                            session.score().to_string().bright_cyan().bold()
                        );
                    }
                }
                // Blank input is ignored
                Ok(None) => {}
                Err(err) => return Err(err.to_string()),
            },
        }
    }
}

fn announce_root(root: &str) {
    println!(
        "\n🔤 Root word: {}\n",
        root.to_uppercase().bright_yellow().bold()
    );
}

fn print_help() {
    println!("Commands: ':new' for a new root word, ':show' for your words, ':quit' to exit\n");
}

/// Prompt and read one line, `None` at end of input
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
