//! Root word analysis command
//!
//! Lists every dictionary word that can be built from a root word.

use crate::core::{Word, WordError};
use crate::dictionary::{Dictionary, WordListDictionary};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Result of analyzing a root word
pub struct AnalysisResult {
    pub root: String,
    /// Constructible words, longest first, then alphabetical
    pub words: Vec<String>,
    /// Word count per length
    pub by_length: BTreeMap<usize, usize>,
}

impl AnalysisResult {
    #[must_use]
    pub fn total(&self) -> usize {
        self.words.len()
    }
}

/// Every dictionary word constructible from `root`, excluding the root itself
///
/// Words count only if the dictionary accepts them for `language`. Order is
/// longest first, then alphabetical.
#[must_use]
pub fn find_constructible(
    root: &Word,
    dictionary: &WordListDictionary,
    language: &str,
) -> Vec<String> {
    let pool = root.letters();

    let mut words: Vec<String> = dictionary
        .words()
        .par_iter()
        .filter(|word| {
            word.as_str() != root.text()
                && pool.can_spell(word)
                && dictionary.is_valid_word(word, language)
        })
        .cloned()
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    words
}

/// Analyze a root word against a dictionary
///
/// # Errors
///
/// Returns a `WordError` if `root` is not a single word.
pub fn analyze_root(
    root: &str,
    dictionary: &WordListDictionary,
    language: &str,
) -> Result<AnalysisResult, WordError> {
    let root = Word::new(root)?;
    let words = find_constructible(&root, dictionary, language);

    let mut by_length = BTreeMap::new();
    for word in &words {
        *by_length.entry(word.chars().count()).or_insert(0) += 1;
    }

    Ok(AnalysisResult {
        root: root.text().to_string(),
        words,
        by_length,
    })
}
