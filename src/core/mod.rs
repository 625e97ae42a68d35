//! Core domain types for Word Scramble
//!
//! This module contains the fundamental domain types with no I/O and no randomness.
//! All types here are pure and testable in isolation.

mod letters;
mod word;

pub use letters::LetterPool;
pub use word::{Word, WordError, normalize};
