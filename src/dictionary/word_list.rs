//! Static word list dictionary

use super::{DEFAULT_LANGUAGE, Dictionary, same_language};
use crate::core::Word;
use crate::wordlists::{DICTIONARY, WordListError, loader};
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Dictionary backed by an in-memory set of words for a single language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from words; entries are normalized on insert
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .filter_map(|w| Word::new(w).ok())
            .map(|w| w.text().to_string())
            .collect();

        Self {
            language: language.to_string(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY.iter())
    }

    /// Load a newline-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns a `WordListError` if the file is missing, unreadable, or has no words.
    pub fn from_file<P: AsRef<Path>>(path: P, language: &str) -> Result<Self, WordListError> {
        let words = loader::load_from_file(path.as_ref())?;
        info!(
            "Using dictionary {} ({} words, language '{language}')",
            path.as_ref().display(),
            words.len()
        );
        Ok(Self::new(language, words))
    }

    /// Language this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Case-insensitive exact membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Underlying word set
    #[must_use]
    pub const fn words(&self) -> &FxHashSet<String> {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        if !same_language(language, &self.language) {
            debug!(
                "Dictionary for '{}' asked about language '{language}'",
                self.language
            );
            return false;
        }
        self.contains(word)
    }
}
