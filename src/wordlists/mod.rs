//! Word lists for Word Scramble
//!
//! Provides embedded word lists compiled into the binary, file loading, and the
//! root word source that picks a word for each game.

mod embedded;
pub mod loader;
mod source;

use std::path::PathBuf;
use thiserror::Error;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use source::WordSource;

/// Error loading a word list
///
/// A missing or empty list is a configuration problem, reported to the caller
/// instead of aborting.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list {origin} contains no usable words")]
    Empty { origin: String },
    #[error("no dictionary for language '{language}' (bundled dictionary is '{available}')")]
    UnsupportedLanguage { language: String, available: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn root_words_count_matches_const() {
        assert_eq!(ROOT_WORDS.len(), ROOT_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn root_words_are_valid_words() {
        for &word in ROOT_WORDS {
            let parsed = Word::new(word).unwrap_or_else(|e| panic!("'{word}': {e}"));
            assert_eq!(parsed.text(), word, "Root word '{word}' is not normalized");
        }
    }

    #[test]
    fn root_words_in_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for root in ROOT_WORDS {
            assert!(
                dictionary.contains(root),
                "Root word '{root}' not in dictionary"
            );
        }
    }

    #[test]
    fn dictionary_entries_lowercase() {
        for &word in &DICTIONARY[..50] {
            // Just check the first 50 for speed
            assert!(
                word.chars().all(char::is_lowercase),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn empty_error_names_origin() {
        let err = WordListError::Empty {
            origin: "start.txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "word list start.txt contains no usable words"
        );
    }
}
