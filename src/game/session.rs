//! Game session state
//!
//! One session owns the root word and the accepted words for a single game.

use super::validator::{RejectionReason, Verdict, validate};
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::wordlists::WordSource;
use log::info;
use rand::Rng;

/// Root word plus the words accepted so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    root: Word,
    accepted: Vec<String>,
}

impl GameSession {
    /// Start a session with a known root word
    #[must_use]
    pub fn new(root: Word) -> Self {
        info!("New game with root word '{root}'");
        Self {
            root,
            accepted: Vec::new(),
        }
    }

    /// Start a session with a root word picked from `source`
    pub fn start<R: Rng + ?Sized>(source: &WordSource, rng: &mut R) -> Self {
        Self::new(source.pick_root_word(rng).clone())
    }

    /// Clear accepted words and pick a fresh root word
    pub fn restart<R: Rng + ?Sized>(&mut self, source: &WordSource, rng: &mut R) {
        *self = Self::start(source, rng);
    }

    /// Validate a candidate and record it if accepted
    ///
    /// Accepted words are placed at the front of the history. Rejected or
    /// empty submissions leave the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] when the candidate is refused.
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        candidate: &str,
        dictionary: &D,
        language: &str,
    ) -> Result<Verdict, RejectionReason> {
        let verdict = validate(
            candidate,
            self.root.text(),
            &self.accepted,
            dictionary,
            language,
        )?;

        if let Verdict::Accepted(word) = &verdict {
            self.accepted.insert(0, word.clone());
        }

        Ok(verdict)
    }

    #[must_use]
    pub const fn root(&self) -> &Word {
        &self.root
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary(word: &str, _language: &str) -> bool {
        ["pain", "nap", "pin", "piano", "ion", "sat", "tea"].contains(&word)
    }

    fn piano() -> GameSession {
        GameSession::new(Word::new("piano").unwrap())
    }

    #[test]
    fn new_session_is_empty() {
        let session = piano();
        assert_eq!(session.root().text(), "piano");
        assert!(session.accepted().is_empty());
    }

    #[test]
    fn accepted_words_are_prepended() {
        let mut session = piano();
        session.submit("pain", &dictionary, "en").unwrap();
        session.submit("nap", &dictionary, "en").unwrap();
        session.submit("ion", &dictionary, "en").unwrap();
        assert_eq!(session.accepted(), ["ion", "nap", "pain"]);
    }

    #[test]
    fn rejection_leaves_history_unchanged() {
        let mut session = piano();
        session.submit("pain", &dictionary, "en").unwrap();

        assert_eq!(
            session.submit("pain", &dictionary, "en"),
            Err(RejectionReason::AlreadyUsed)
        );
        assert_eq!(
            session.submit("piano", &dictionary, "en"),
            Err(RejectionReason::IsRootWord)
        );
        assert_eq!(
            session.submit("zzz", &dictionary, "en"),
            Err(RejectionReason::NotPossible)
        );
        assert_eq!(session.accepted(), ["pain"]);
    }

    #[test]
    fn empty_submission_is_noop() {
        let mut session = piano();
        assert_eq!(session.submit("   ", &dictionary, "en"), Ok(Verdict::Ignored));
        assert!(session.accepted().is_empty());
    }

    #[test]
    fn restart_clears_history_and_picks_from_source() {
        let source = WordSource::new(words_from_slice(&["satellite", "teacup"]), "test").unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let mut session = piano();
        session.submit("pain", &dictionary, "en").unwrap();
        session.restart(&source, &mut rng);

        assert!(session.accepted().is_empty());
        assert!(source.words().contains(session.root()));
    }

    #[test]
    fn start_uses_source() {
        let source = WordSource::new(words_from_slice(&["piano"]), "test").unwrap();
        let session = GameSession::start(&source, &mut StdRng::seed_from_u64(0));
        assert_eq!(session.root().text(), "piano");
    }
}
