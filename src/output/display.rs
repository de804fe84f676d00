//! Display functions for command results

use super::formatters::budget_bar;
use crate::commands::{ModeInfo, ScoreResult};
use crate::session::SessionSummary;
use colored::Colorize;

/// Print the mode catalog
pub fn print_modes(modes: &[ModeInfo]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "MODES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let max_budget = modes.iter().map(|m| m.mistake_budget).max().unwrap_or(1);

    for mode in modes {
        let bar = budget_bar(mode.mistake_budget, max_budget, 12);
        let mut notes = Vec::new();
        if mode.is_default {
            notes.push("default".to_string());
        }
        if mode.allows_repeats {
            notes.push("repeats re-checked".to_string());
        }
        if let Some(size) = mode.pool_size {
            notes.push(format!("{size} word pool"));
        }

        println!(
            "\n  {} {:<8} [{}] {} mistakes",
            format!("{}", mode.index).bright_black(),
            mode.name.bright_white().bold(),
            bar.green(),
            format!("{}", mode.mistake_budget).bright_yellow()
        );
        if !notes.is_empty() {
            println!("    {}", notes.join(", ").bright_black());
        }
    }
    println!();
}

/// Print the breakdown of a hypothetical win
pub fn print_score_result(result: &ScoreResult) {
    let b = &result.breakdown;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring: {} in {}",
        result.word.to_uppercase().bright_yellow().bold(),
        result.mode.bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n   Unique letters:   {}", b.unique_letters);
    println!(
        "   Mistakes used:    {} (budget {}, {} left)",
        b.used_mistakes, result.mistake_budget, result.remaining
    );
    println!("   Base points:      {:.2}", b.base);
    if result.by_word {
        println!("   Word bonus:       x{}", b.multiplier);
    }
    println!(
        "\n{}",
        format!("🎯 Worth {} points", b.delta).green().bold()
    );
}

/// Print end-of-session statistics
pub fn print_session_summary(summary: &SessionSummary) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "  {} {}",
        "Final score:".bright_cyan().bold(),
        summary.score.to_string().bright_yellow().bold()
    );
    if let Some(mode) = &summary.mode {
        println!("  Mode:        {}", mode.bright_white());
    }
    println!(
        "  Rounds won:  {}/{}",
        summary.rounds_won.to_string().green(),
        summary.rounds_played
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n👋 Thanks for playing!\n");
}

/// Print notices produced while loading settings
pub fn print_config_notices(notices: &[String]) {
    for notice in notices {
        println!("{}", notice.yellow());
    }
}
