//! Letter multiset for constructibility checks
//!
//! A `LetterPool` holds the letters of a root word with repetition. Spelling a
//! candidate consumes one letter per character; a character with no remaining
//! copy means the candidate cannot be built.

use rustc_hash::FxHashMap;

/// Remaining letters available for spelling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    remaining: usize,
}

impl LetterPool {
    /// Build a pool holding every letter of `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut remaining = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            remaining += 1;
        }
        Self { counts, remaining }
    }

    /// Consume one copy of `letter`
    ///
    /// Returns `false` and leaves the pool untouched if no copy is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `candidate` can be spelled from this pool
    ///
    /// Works on a copy, so the pool itself is not consumed.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::from_word("piano");
    /// assert!(pool.can_spell("pain"));
    /// assert!(!pool.can_spell("zzz"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut pool = self.clone();
        candidate.chars().all(|ch| pool.take(ch))
    }

    /// How many copies of `letter` remain
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters remaining
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}
