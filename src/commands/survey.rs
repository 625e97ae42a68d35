//! Survey all root words
//!
//! Measures how many dictionary words every root word yields, to spot roots
//! that make for a poor game.

use super::analyze::find_constructible;
use crate::dictionary::{Dictionary, WordListDictionary};
use crate::wordlists::WordSource;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Number of constructible words for one root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootYield {
    pub root: String,
    pub words: usize,
    pub longest: Option<String>,
}

/// Statistics over every surveyed root word
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    /// Per-root yields, richest first
    pub yields: Vec<RootYield>,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Roots not found in the dictionary themselves
    pub unknown_roots: Vec<String>,
    pub total_time: Duration,
}

impl SurveyStatistics {
    /// The `n` roots with the most words
    #[must_use]
    pub fn richest(&self, n: usize) -> &[RootYield] {
        &self.yields[..n.min(self.yields.len())]
    }

    /// The `n` roots with the fewest words, poorest first
    #[must_use]
    pub fn poorest(&self, n: usize) -> Vec<&RootYield> {
        self.yields.iter().rev().take(n).collect()
    }
}

/// Survey every root word in `source` (or the first `limit` of them)
///
/// Roots are evaluated in parallel. Words and roots count as known only if
/// the dictionary accepts them for `language`.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_survey(
    source: &WordSource,
    dictionary: &WordListDictionary,
    language: &str,
    limit: Option<usize>,
    show_progress: bool,
) -> SurveyStatistics {
    let roots = &source.words()[..limit.unwrap_or(source.len()).min(source.len())];

    let pb = if show_progress {
        ProgressBar::new(roots.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let mut yields: Vec<RootYield> = roots
        .par_iter()
        .map(|root| {
            let words = find_constructible(root, dictionary, language);
            pb.inc(1);
            RootYield {
                root: root.text().to_string(),
                words: words.len(),
                longest: words.into_iter().next(),
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    yields.sort_by(|a, b| b.words.cmp(&a.words).then_with(|| a.root.cmp(&b.root)));

    let unknown_roots: Vec<String> = roots
        .iter()
        .filter(|root| !dictionary.is_valid_word(root.text(), language))
        .map(|root| root.text().to_string())
        .collect();
    for root in &unknown_roots {
        warn!("Root word '{root}' is not in the dictionary");
    }

    let total_roots = yields.len();
    let total_words: usize = yields.iter().map(|y| y.words).sum();

    SurveyStatistics {
        total_roots,
        average_words: if total_roots > 0 {
            total_words as f64 / total_roots as f64
        } else {
            0.0
        },
        min_words: yields.iter().map(|y| y.words).min().unwrap_or(0),
        max_words: yields.iter().map(|y| y.words).max().unwrap_or(0),
        yields,
        unknown_roots,
        total_time: start.elapsed(),
    }
}
