//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use crate::dictionary::Dictionary;
use crate::game::{Game, Verdict};
use crate::output::formatters::letter_badge;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Reads one candidate per line from `input` until `:quit` or end of input.
/// `:restart` starts over with a new root word.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D, R, W>(game: &mut Game<'_, D>, mut input: R, out: &mut W) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Word Scramble - Simple Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make as many words as you can from the root word.")?;
    writeln!(out, "Commands: ':restart' for a new word, ':quit' to exit\n")?;

    print_root(game, out)?;

    let mut line = String::new();
    loop {
        write!(out, "Enter your word: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":restart" | ":r" => {
                game.restart();
                writeln!(out, "\n🔄 New game started!")?;
                print_root(game, out)?;
            }
            candidate => match game.submit(candidate) {
                Ok(Verdict::Accepted(word)) => {
                    writeln!(out, "{} {}", "✓".green().bold(), word.bright_white().bold())?;
                    print_accepted(game.accepted(), out)?;
                }
                Ok(Verdict::Ignored) => {}
                Err(reason) => {
                    let alert = game.alert_for(reason);
                    writeln!(
                        out,
                        "{} {}",
                        format!("✗ {}", alert.title).red().bold(),
                        alert.message
                    )?;
                }
            },
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn print_root<D: Dictionary + ?Sized, W: Write>(game: &Game<'_, D>, out: &mut W) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Root word: {}",
        game.root().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")
}

fn print_accepted<W: Write>(accepted: &[String], out: &mut W) -> io::Result<()> {
    let words: Vec<String> = accepted
        .iter()
        .map(|word| format!("{} {word}", letter_badge(word.chars().count())))
        .collect();
    writeln!(out, "  Words ({}): {}", accepted.len(), words.join("  "))
}
