//! Display functions for command results

use super::formatters::{create_progress_bar, letter_badge};
use crate::commands::{AnalysisResult, CheckResult, SurveyStatistics};
use crate::game::Verdict;
use colored::Colorize;

/// Print the verdicts of a check run
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for entry in &result.entries {
        match &entry.outcome {
            Ok(Verdict::Accepted(word)) => {
                println!("  {} {}", "✓".green().bold(), word.bright_white());
            }
            Ok(Verdict::Ignored) => {
                println!("  {} {}", "·".bright_black(), "(empty, ignored)".bright_black());
            }
            Err(reason) => {
                let alert = reason.alert(&result.root);
                println!(
                    "  {} {:<12} {} {}",
                    "✗".red().bold(),
                    entry.candidate,
                    alert.title.red(),
                    alert.message.bright_black()
                );
            }
        }
    }

    println!(
        "\n{} {}",
        format!("Accepted {} words:", result.accepted.len()).green().bold(),
        result.accepted.join(", ")
    );
}

/// Print the result of root word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT ANALYSIS:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} words can be made", result.total());

    let most = result.by_length.values().copied().max().unwrap_or(0);
    for (&length, &count) in result.by_length.iter().rev() {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {} [{}] {count}", letter_badge(length), bar.green());
    }

    let mut current_length = None;
    for word in &result.words {
        let length = word.chars().count();
        if current_length != Some(length) {
            current_length = Some(length);
            print!("\n{} ", letter_badge(length).bright_cyan());
        }
        print!(" {word}");
    }
    println!();
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());

    println!("\n📊 {}", "Yield:".bright_cyan().bold());
    println!("   {:<18}{}", "Roots surveyed:", stats.total_roots);
    println!(
        "   {:<18}{}",
        "Average words:",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("   {:<18}{}", "Fewest words:", stats.min_words.to_string().yellow());
    println!("   {:<18}{}", "Most words:", stats.max_words.to_string().green());
    println!("   {:<18}{:.2}s", "Time taken:", stats.total_time.as_secs_f64());

    println!("\n🏆 {}", "Richest roots:".bright_cyan().bold());
    for entry in stats.richest(5) {
        let bar = create_progress_bar(entry.words as f64, stats.max_words as f64, 30);
        println!(
            "   {:<10} {} {:4}  {}",
            entry.root,
            bar.green(),
            entry.words,
            entry.longest.as_deref().unwrap_or("-").bright_black()
        );
    }

    println!("\n🪫 {}", "Poorest roots:".bright_cyan().bold());
    for entry in stats.poorest(5) {
        let bar = create_progress_bar(entry.words as f64, stats.max_words as f64, 30);
        println!(
            "   {:<10} {} {:4}  {}",
            entry.root,
            bar.yellow(),
            entry.words,
            entry.longest.as_deref().unwrap_or("-").bright_black()
        );
    }

    if !stats.unknown_roots.is_empty() {
        println!(
            "\n{} {}",
            "⚠ Roots missing from dictionary:".red().bold(),
            stats.unknown_roots.join(", ")
        );
    }
}
