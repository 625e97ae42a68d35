//! Word list loading utilities
//!
//! Provides functions to load newline-delimited word lists from files or use
//! embedded constants.

use super::WordListError;
use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Parse newline-delimited text into words
///
/// Lines are trimmed and lowercased, blank lines are skipped, and lines that are
/// not a single word are skipped with a warning. No trailing newline is required.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Piano\n\nclimbing\r\nice cream");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "piano");
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("Skipping line {}: '{trimmed}' ({e})", idx + 1);
                    None
                }
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be opened or read, and
/// `WordListError::Empty` if it yields no usable words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            origin: path.display().to_string(),
        });
    }

    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
