//! Display functions for game and command results

use super::formatters::{create_progress_bar, rejection_message, rejection_title, word_with_badge};
use crate::commands::{AnalysisResult, SurveyStatistics};
use crate::core::{GameSession, Outcome};
use colored::Colorize;

/// Print the feedback for one submission
pub fn print_outcome(outcome: Outcome, word: &str, session: &GameSession) {
    match outcome {
        Outcome::Accepted { points } => {
            println!(
                "{} {} {}",
                "✅".green(),
                word.bright_white().bold(),
                format!("+{points}").bright_green().bold()
            );
        }
        Outcome::Rejected(reason) => {
            println!(
                "{} {}",
                "❌".red(),
                rejection_title(reason).bright_red().bold()
            );
            println!(
                "   {}",
                rejection_message(reason, session.root_word()).bright_black()
            );
        }
    }
}

/// Print the root word, score and accepted words of a session
pub fn print_session(session: &GameSession) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}    Score: {}",
        session.root_word().to_uppercase().bright_yellow().bold(),
        session.score().to_string().bright_cyan().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if session.used_words().is_empty() {
        println!("  {}", "No words yet".bright_black());
    } else {
        for word in session.used_words() {
            println!("  • {}", word_with_badge(word));
        }
    }
    println!();
}

/// Print the result of analyzing a root word
pub fn print_analysis_result(result: &AnalysisResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT ANALYSIS:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} playable words, maximum score {}",
        result.word_count().to_string().bright_yellow(),
        result.max_score.to_string().bright_yellow().bold()
    );

    let shown = limit.unwrap_or(result.words.len());
    if result.words.is_empty() {
        println!("\n   {}", "Nothing can be spelled from this root.".bright_black());
        return;
    }

    println!();
    for word in result.words.iter().take(shown) {
        println!("   {}", word_with_badge(word));
    }
    if shown < result.words.len() {
        println!(
            "   {}",
            format!("… and {} more", result.words.len() - shown).bright_black()
        );
    }
}

/// Print the statistics of a survey over the root word pool
pub fn print_survey_result(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Roots surveyed:    {}", stats.total_roots);
    println!(
        "   Average words:     {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("   Average max score: {:.1}", stats.average_max_score);
    println!("   Time taken:        {:.2}s", stats.total_time.as_secs_f64());

    if let Some(richest) = &stats.richest {
        println!(
            "   Richest root:      {} ({} words, {} points)",
            richest.root.green().bold(),
            richest.word_count,
            richest.max_score
        );
    }
    if let Some(poorest) = &stats.poorest {
        println!(
            "   Poorest root:      {} ({} words, {} points)",
            poorest.root.yellow(),
            poorest.word_count,
            poorest.max_score
        );
    }
    if !stats.barren.is_empty() {
        println!(
            "   {} {}",
            "Barren roots:".red().bold(),
            stats.barren.join(", ")
        );
    }

    let best = stats.richest.as_ref().map_or(0, |s| s.max_score);
    println!("\n📈 {}", "Max score by root:".bright_cyan().bold());
    for summary in &stats.summaries {
        let bar = create_progress_bar(summary.max_score as f64, best as f64, 30);
        println!(
            "   {:<10} {} {:4}",
            summary.root,
            bar.green(),
            summary.max_score
        );
    }
}
