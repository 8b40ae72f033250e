//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes, plus analysis of root words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{analyze_root, run_simple, run_survey},
    dictionary::{DEFAULT_LANGUAGE, WordListDictionary},
    game::Game,
    output::{print_analysis_result, print_survey_result},
    wordlists::{
        START_WORDS,
        loader::{load_root_words, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Dictionary: 'embedded' (default, English) or path to a newline-separated file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Language code words are checked in
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Log file used while the full-screen interface is running
    #[arg(long, global = true, default_value = "word_scramble.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-by-line mode without TUI
    Simple,

    /// List every playable word for a root word
    Analyze {
        /// The root word to analyze
        root: String,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Analyze every root word in the word list
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load root words based on the -w flag
///
/// A missing or empty file is not fatal: the game falls back to its default
/// root word.
fn load_wordlist(wordlist_mode: &str) -> Vec<String> {
    match wordlist_mode {
        "embedded" => words_from_slice(START_WORDS),
        path => load_root_words(path),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(dictionary_mode: &str, language: &str) -> Result<WordListDictionary> {
    match dictionary_mode {
        "embedded" => Ok(WordListDictionary::embedded()),
        path => WordListDictionary::from_file(path, language)
            .with_context(|| format!("Failed to read dictionary '{path}'")),
    }
}

/// Route logs to stderr, or to a file while the terminal is taken over
fn init_logging(command: &Commands, log_file: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if matches!(command, Commands::Play) {
        let file = std::fs::File::create(log_file)
            .with_context(|| format!("Failed to create log file '{}'", log_file.display()))?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Arc::new(file))
            .with_ansi(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(&command, &cli.log_file)?;

    let root_words = load_wordlist(&cli.wordlist);
    let dictionary = load_dictionary(&cli.dictionary, &cli.language)?;
    info!(
        roots = root_words.len(),
        dictionary = dictionary.len(),
        language = %cli.language,
        "word lists loaded"
    );

    match command {
        Commands::Play => run_play_command(dictionary, &cli.language, &root_words),
        Commands::Simple => run_simple_command(dictionary, &cli.language, &root_words),
        Commands::Analyze { root, limit } => {
            run_analyze_command(&root, limit, &dictionary, &cli.language);
            Ok(())
        }
        Commands::Survey { limit } => {
            run_survey_command(limit, &root_words, &dictionary, &cli.language);
            Ok(())
        }
    }
}

fn run_play_command(
    dictionary: WordListDictionary,
    language: &str,
    root_words: &[String],
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let game = Game::new(dictionary, language, root_words);
    run_tui(App::new(game))
}

fn run_simple_command(
    dictionary: WordListDictionary,
    language: &str,
    root_words: &[String],
) -> Result<()> {
    let mut game = Game::new(dictionary, language, root_words);
    run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
}

fn run_analyze_command(
    root: &str,
    limit: Option<usize>,
    dictionary: &WordListDictionary,
    language: &str,
) {
    let result = analyze_root(root, dictionary, language);
    print_analysis_result(&result, limit);
}

fn run_survey_command(
    limit: Option<usize>,
    root_words: &[String],
    dictionary: &WordListDictionary,
    language: &str,
) {
    println!("\n{}", "═".repeat(70));
    println!(" Root Word Survey ");
    println!("{}", "═".repeat(70));
    println!(
        "\nSurveying {} root words against {} dictionary words\n",
        limit.map_or(root_words.len(), |n| n.min(root_words.len())),
        dictionary.len()
    );

    let stats = run_survey(root_words, dictionary, language, limit, true);
    print_survey_result(&stats);
}
