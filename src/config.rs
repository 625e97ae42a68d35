//! Game configuration
//!
//! Collects where word lists come from, the dictionary language and the random
//! seed, and loads the resources a game needs.

use crate::dictionary::{DEFAULT_LANGUAGE, WordListDictionary, same_language};
use crate::wordlists::{WordListError, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Configuration for a game or report
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Root word list file; the embedded list when `None`
    pub roots: Option<PathBuf>,
    /// Dictionary file; the embedded dictionary when `None`
    pub dictionary: Option<PathBuf>,
    /// Language tag passed to the dictionary
    pub language: String,
    /// Fixed seed for reproducible root word picks
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            roots: None,
            dictionary: None,
            language: DEFAULT_LANGUAGE.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load the root word source
    ///
    /// # Errors
    ///
    /// Returns a `WordListError` if the configured file is missing, unreadable,
    /// or has no words.
    pub fn load_word_source(&self) -> Result<WordSource, WordListError> {
        match &self.roots {
            Some(path) => WordSource::from_file(path),
            None => WordSource::embedded(),
        }
    }

    /// Load the dictionary
    ///
    /// The embedded dictionary is English, so another language needs a
    /// dictionary file.
    ///
    /// # Errors
    ///
    /// Returns a `WordListError` if the configured file is missing, unreadable,
    /// or has no words, and `WordListError::UnsupportedLanguage` if no file is
    /// configured for a language other than the embedded one.
    pub fn load_dictionary(&self) -> Result<WordListDictionary, WordListError> {
        match &self.dictionary {
            Some(path) => WordListDictionary::from_file(path, &self.language),
            None if same_language(&self.language, DEFAULT_LANGUAGE) => {
                Ok(WordListDictionary::embedded())
            }
            None => Err(WordListError::UnsupportedLanguage {
                language: self.language.clone(),
                available: DEFAULT_LANGUAGE.to_string(),
            }),
        }
    }

    /// Random number generator for root word selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_use_embedded_lists() {
        let config = GameConfig::default();
        assert_eq!(config.language, "en");

        let source = config.load_word_source().unwrap();
        assert!(!source.is_empty());

        let dictionary = config.load_dictionary().unwrap();
        assert!(dictionary.contains("piano"));
    }

    #[test]
    fn missing_roots_file_is_an_error() {
        let config = GameConfig {
            roots: Some(PathBuf::from("/definitely/not/here/start.txt")),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.load_word_source(),
            Err(WordListError::Io { .. })
        ));
    }

    #[test]
    fn missing_dictionary_file_is_an_error() {
        let config = GameConfig {
            dictionary: Some(PathBuf::from("/definitely/not/here/words.txt")),
            ..GameConfig::default()
        };
        assert!(config.load_dictionary().is_err());
    }

    #[test]
    fn other_language_needs_dictionary_file() {
        let config = GameConfig {
            language: "fr".to_string(),
            ..GameConfig::default()
        };
        let err = config.load_dictionary().unwrap_err();
        assert!(matches!(
            &err,
            WordListError::UnsupportedLanguage { language, available }
                if language == "fr" && available == "en"
        ));
        assert_eq!(
            err.to_string(),
            "no dictionary for language 'fr' (bundled dictionary is 'en')"
        );
    }

    #[test]
    fn english_variant_uses_embedded_dictionary() {
        let config = GameConfig {
            language: "en-GB".to_string(),
            ..GameConfig::default()
        };
        let dictionary = config.load_dictionary().unwrap();
        assert_eq!(dictionary.language(), "en");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
