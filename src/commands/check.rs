//! Check command
//!
//! Plays a list of candidates against a fixed root word, non-interactively.

use crate::core::{Word, WordError};
use crate::dictionary::Dictionary;
use crate::game::{GameSession, RejectionReason, Verdict};

/// Verdict for one submitted candidate
#[derive(Debug, Clone)]
pub struct CheckEntry {
    pub candidate: String,
    pub outcome: Result<Verdict, RejectionReason>,
}

/// Result of checking a sequence of candidates
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub root: String,
    pub entries: Vec<CheckEntry>,
    /// Accepted words at the end, most recent first
    pub accepted: Vec<String>,
}

/// Submit `candidates` in order to a fresh session rooted at `root`
///
/// # Errors
///
/// Returns a `WordError` if `root` is not a single word.
pub fn check_words<D: Dictionary + ?Sized>(
    root: &str,
    candidates: &[String],
    dictionary: &D,
    language: &str,
) -> Result<CheckResult, WordError> {
    let mut session = GameSession::new(Word::new(root)?);

    let entries = candidates
        .iter()
        .map(|candidate| CheckEntry {
            candidate: candidate.clone(),
            outcome: session.submit(candidate, dictionary, language),
        })
        .collect();

    Ok(CheckResult {
        root: session.root().text().to_string(),
        entries,
        accepted: session.accepted().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn candidates(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn check_sequence() {
        let dictionary = WordListDictionary::new("en", ["pain", "piano", "nap"]);
        let result = check_words(
            "Piano",
            &candidates(&["pain", "pain", "piano", "zzz", "pnai", "", "nap"]),
            &dictionary,
            "en",
        )
        .unwrap();

        assert_eq!(result.root, "piano");
        let outcomes: Vec<_> = result.entries.iter().map(|e| e.outcome.clone()).collect();
        assert_eq!(
            outcomes,
            vec![
                Ok(Verdict::Accepted("pain".to_string())),
                Err(RejectionReason::AlreadyUsed),
                Err(RejectionReason::IsRootWord),
                Err(RejectionReason::NotPossible),
                Err(RejectionReason::NotReal),
                Ok(Verdict::Ignored),
                Ok(Verdict::Accepted("nap".to_string())),
            ]
        );
        assert_eq!(result.accepted, ["nap", "pain"]);
    }

    #[test]
    fn rejection_alerts_name_the_root() {
        let dictionary = WordListDictionary::new("en", ["pain"]);
        let result =
            check_words("PIANO", &candidates(&["pain", "zzz"]), &dictionary, "en").unwrap();

        assert!(result.entries[0].outcome.is_ok());
        let reason = result.entries[1].outcome.clone().unwrap_err();
        let alert = reason.alert(&result.root);
        assert_eq!(alert.title, "Word not possible!");
        assert!(alert.message.contains("'piano'"));
    }

    #[test]
    fn invalid_root_is_error() {
        let dictionary = WordListDictionary::new("en", ["pain"]);
        assert!(check_words("two words", &[], &dictionary, "en").is_err());
        assert!(check_words("", &[], &dictionary, "en").is_err());
    }
}
