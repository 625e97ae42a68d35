//! Root word source
//!
//! Holds the candidate root words for a game and picks one uniformly at random.

use super::{ROOT_WORDS, WordListError, loader};
use crate::core::Word;
use log::info;
use rand::Rng;
use std::path::Path;

/// A non-empty set of candidate root words
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<Word>,
}

impl WordSource {
    /// Create a source from a list of words
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if `words` is empty; a game cannot start
    /// without at least one root word.
    pub fn new(words: Vec<Word>, origin: &str) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty {
                origin: origin.to_string(),
            });
        }
        Ok(Self { words })
    }

    /// Source backed by the root words compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if the bundled list was built empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(loader::words_from_slice(ROOT_WORDS), "embedded root words")
    }

    /// Source loaded from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns a `WordListError` if the file is missing, unreadable, or has no words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path)?;
        Self::new(words, &path.display().to_string())
    }

    /// Pick a root word uniformly at random
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::core::Word;
    /// use word_scramble::wordlists::WordSource;
    ///
    /// let source = WordSource::new(vec![Word::new("piano").unwrap()], "test").unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// assert_eq!(source.pick_root_word(&mut rng).text(), "piano");
    /// ```
    pub fn pick_root_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Never empty: enforced by `new`
        let word = &self.words[rng.random_range(0..self.words.len())];
        info!("Picked root word '{word}' from {} candidates", self.words.len());
        word
    }

    /// All candidate root words
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn empty_source_is_rejected() {
        let result = WordSource::new(Vec::new(), "nothing");
        assert!(matches!(result, Err(WordListError::Empty { .. })));
    }

    #[test]
    fn embedded_source_loads() {
        let source = WordSource::embedded().unwrap();
        assert_eq!(source.len(), ROOT_WORDS.len());
        assert!(!source.is_empty());
    }

    #[test]
    fn pick_single_word() {
        let source = WordSource::new(words_from_slice(&["piano"]), "test").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(source.pick_root_word(&mut rng).text(), "piano");
        }
    }

    #[test]
    fn pick_is_member_of_list() {
        let source =
            WordSource::new(words_from_slice(&["piano", "climbing", "scramble"]), "test").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let picked = source.pick_root_word(&mut rng);
            assert!(source.words().contains(picked));
        }
    }

    #[test]
    fn pick_covers_every_word() {
        let source =
            WordSource::new(words_from_slice(&["piano", "climbing", "scramble"]), "test").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<&str> = (0..200)
            .map(|_| source.pick_root_word(&mut rng).text())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn same_seed_same_pick() {
        let source = WordSource::embedded().unwrap();
        let first = source
            .pick_root_word(&mut StdRng::seed_from_u64(99))
            .clone();
        let second = source
            .pick_root_word(&mut StdRng::seed_from_u64(99))
            .clone();
        assert_eq!(first, second);
    }
}
