//! Main game interface
//!
//! Binds a session to its word source, dictionary and random number generator,
//! so front ends only deal with raw input and results.

use super::session::GameSession;
use super::validator::{Alert, RejectionReason, Verdict};
use crate::dictionary::Dictionary;
use crate::wordlists::WordSource;
use rand::rngs::StdRng;

/// A running game
///
/// Submissions are handled one at a time; each is validated to completion
/// before the next.
pub struct Game<'a, D: Dictionary + ?Sized> {
    source: &'a WordSource,
    dictionary: &'a D,
    language: String,
    rng: StdRng,
    session: GameSession,
}

impl<'a, D: Dictionary + ?Sized> Game<'a, D> {
    /// Start a new game
    ///
    /// # Parameters
    /// - `source`: Root words to pick from (here and on every restart)
    /// - `dictionary`: Realness lookup
    /// - `language`: Language tag passed to the dictionary
    /// - `rng`: Random source for root word selection
    pub fn new(source: &'a WordSource, dictionary: &'a D, language: &str, mut rng: StdRng) -> Self {
        let session = GameSession::start(source, &mut rng);
        Self {
            source,
            dictionary,
            language: language.to_string(),
            rng,
            session,
        }
    }

    /// Submit raw player input
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] when the candidate is refused.
    pub fn submit(&mut self, candidate: &str) -> Result<Verdict, RejectionReason> {
        self.session.submit(candidate, self.dictionary, &self.language)
    }

    /// Alert for a rejection in the current game
    #[must_use]
    pub fn alert_for(&self, reason: RejectionReason) -> Alert {
        reason.alert(self.session.root().text())
    }

    /// Start over with a new root word
    pub fn restart(&mut self) {
        self.session.restart(self.source, &mut self.rng);
    }

    #[must_use]
    pub fn root(&self) -> &str {
        self.session.root().text()
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn accepted(&self) -> &[String] {
        self.session.accepted()
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn setup() -> (WordSource, WordListDictionary) {
        let source = WordSource::new(words_from_slice(&["piano"]), "test").unwrap();
        let dictionary = WordListDictionary::new("en", ["pain", "nap", "piano"]);
        (source, dictionary)
    }

    #[test]
    fn game_round_trip() {
        let (source, dictionary) = setup();
        let mut game = Game::new(&source, &dictionary, "en", StdRng::seed_from_u64(1));

        assert_eq!(game.root(), "piano");
        assert_eq!(game.submit("pain"), Ok(Verdict::Accepted("pain".to_string())));
        assert_eq!(game.submit("Nap"), Ok(Verdict::Accepted("nap".to_string())));
        assert_eq!(game.accepted(), ["nap", "pain"]);
    }

    #[test]
    fn alert_names_root() {
        let (source, dictionary) = setup();
        let mut game = Game::new(&source, &dictionary, "en", StdRng::seed_from_u64(1));

        let reason = game.submit("zebra").unwrap_err();
        assert_eq!(reason, RejectionReason::NotPossible);
        assert_eq!(
            game.alert_for(reason).message,
            "Cannot make that word using 'piano'"
        );
    }

    #[test]
    fn restart_resets_history() {
        let (source, dictionary) = setup();
        let mut game = Game::new(&source, &dictionary, "en", StdRng::seed_from_u64(1));
        game.submit("pain").unwrap();

        game.restart();
        assert!(game.accepted().is_empty());
        assert_eq!(game.root(), "piano");
        assert_eq!(game.submit("pain"), Ok(Verdict::Accepted("pain".to_string())));
    }

    #[test]
    fn language_reaches_dictionary() {
        let (source, dictionary) = setup();
        let mut game = Game::new(&source, &dictionary, "fr", StdRng::seed_from_u64(1));
        assert_eq!(game.language(), "fr");
        assert_eq!(game.submit("pain"), Err(RejectionReason::NotReal));
    }
}
