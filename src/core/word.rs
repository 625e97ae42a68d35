//! Word representation
//!
//! A Word is a non-empty, lowercase, purely alphabetic string. Root words and
//! dictionary entries are always `Word`s; raw player input is only normalized.

use super::LetterPool;
use std::fmt;
use thiserror::Error;

/// A lowercase word made only of letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// Normalize raw player input the way every candidate is compared
///
/// Trims surrounding whitespace and lowercases.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Pain\n"), "pain");
/// assert_eq!(normalize(" \t "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is normalized first, so surrounding whitespace and case are ignored.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The normalized text is empty
    /// - Contains anything other than alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Word;
    ///
    /// let word = Word::new("Piano").unwrap();
    /// assert_eq!(word.text(), "piano");
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("pi4no").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }

    /// The multiset of letters in this word
    #[must_use]
    pub fn letters(&self) -> LetterPool {
        LetterPool::from_word(&self.text)
    }

    /// Check whether `candidate` can be spelled from this word's letters
    #[inline]
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        self.letters().can_spell(candidate)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
