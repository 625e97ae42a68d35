//! Candidate validation
//!
//! A candidate is checked against the current root word and the accepted-word
//! history. Checks run in a fixed order and the first failure decides the
//! rejection reason:
//!
//! 1. empty input is ignored, with no rejection
//! 2. already accepted -> [`RejectionReason::AlreadyUsed`]
//! 3. not spellable from the root -> [`RejectionReason::NotPossible`]
//! 4. unknown to the dictionary -> [`RejectionReason::NotReal`]
//! 5. the root word itself -> [`RejectionReason::IsRootWord`]

use crate::core::{LetterPool, normalize};
use crate::dictionary::Dictionary;
use log::debug;
use thiserror::Error;

/// Outcome of a submission that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The normalized word passed every check
    Accepted(String),
    /// Nothing was typed; no history change and nothing to report
    Ignored,
}

/// Why a candidate was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RejectionReason {
    #[error("word already used")]
    AlreadyUsed,
    #[error("word cannot be made from the root word")]
    NotPossible,
    #[error("word is not in the dictionary")]
    NotReal,
    #[error("word is the root word")]
    IsRootWord,
}

/// Title and message shown to the player for a rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl RejectionReason {
    /// Alert title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word already used!",
            Self::NotPossible => "Word not possible!",
            Self::NotReal => "Word not found!",
            Self::IsRootWord => "Root word used!",
        }
    }

    /// Alert message; `root` is named when the letters did not fit
    #[must_use]
    pub fn message(self, root: &str) -> String {
        match self {
            Self::AlreadyUsed => "Where's your originality?".to_string(),
            Self::NotPossible => format!("Cannot make that word using '{root}'"),
            Self::NotReal => "You can't just make words up...".to_string(),
            Self::IsRootWord => "No copying allowed!".to_string(),
        }
    }

    /// Full alert for display
    #[must_use]
    pub fn alert(self, root: &str) -> Alert {
        Alert {
            title: self.title().to_string(),
            message: self.message(root),
        }
    }
}

/// Candidate has not been accepted before
#[must_use]
pub fn is_original(word: &str, history: &[String]) -> bool {
    !history.iter().any(|used| used == word)
}

/// Candidate's letters are a sub-multiset of the root's letters
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    LetterPool::from_word(root).can_spell(word)
}

/// Candidate is a real word according to the dictionary
#[must_use]
pub fn is_real<D: Dictionary + ?Sized>(word: &str, dictionary: &D, language: &str) -> bool {
    dictionary.is_valid_word(word, language)
}

/// Candidate differs from the root word
#[must_use]
pub fn is_not_root(word: &str, root: &str) -> bool {
    word != root
}

/// Validate a raw candidate
///
/// The candidate and root are normalized (trimmed, lowercased) before any check.
/// The function reads `history` but never changes it; on acceptance the caller
/// is responsible for recording the word.
///
/// # Errors
///
/// Returns the [`RejectionReason`] of the first check that fails.
///
/// # Examples
/// ```
/// use word_scramble::game::{RejectionReason, Verdict, validate};
///
/// let dictionary = |word: &str, _: &str| ["pain", "piano"].contains(&word);
///
/// let verdict = validate("Pain ", "piano", &[], &dictionary, "en");
/// assert_eq!(verdict, Ok(Verdict::Accepted("pain".to_string())));
///
/// let history = vec!["pain".to_string()];
/// let verdict = validate("pain", "piano", &history, &dictionary, "en");
/// assert_eq!(verdict, Err(RejectionReason::AlreadyUsed));
///
/// let verdict = validate("piano", "piano", &history, &dictionary, "en");
/// assert_eq!(verdict, Err(RejectionReason::IsRootWord));
/// ```
pub fn validate<D: Dictionary + ?Sized>(
    candidate: &str,
    root: &str,
    history: &[String],
    dictionary: &D,
    language: &str,
) -> Result<Verdict, RejectionReason> {
    let word = normalize(candidate);
    let root = normalize(root);

    if word.is_empty() {
        debug!("Ignoring empty submission");
        return Ok(Verdict::Ignored);
    }

    let rejection = if !is_original(&word, history) {
        Some(RejectionReason::AlreadyUsed)
    } else if !is_possible(&word, &root) {
        Some(RejectionReason::NotPossible)
    } else if !is_real(&word, dictionary, language) {
        Some(RejectionReason::NotReal)
    } else if !is_not_root(&word, &root) {
        Some(RejectionReason::IsRootWord)
    } else {
        None
    };

    match rejection {
        Some(reason) => {
            debug!("Rejected '{word}' for root '{root}': {reason}");
            Err(reason)
        }
        None => {
            debug!("Accepted '{word}' for root '{root}'");
            Ok(Verdict::Accepted(word))
        }
    }
}
