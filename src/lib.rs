//! Word Scramble
//!
//! Make as many words as you can from the letters of a random root word. Each
//! candidate must be new, spellable from the root's letters, a real word, and
//! not the root word itself.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::Word;
//! use word_scramble::game::{GameSession, RejectionReason, Verdict};
//!
//! let dictionary = |word: &str, _: &str| ["pain", "nap", "piano"].contains(&word);
//! let mut session = GameSession::new(Word::new("piano").unwrap());
//!
//! assert_eq!(
//!     session.submit("pain", &dictionary, "en"),
//!     Ok(Verdict::Accepted("pain".to_string()))
//! );
//! assert_eq!(
//!     session.submit("piano", &dictionary, "en"),
//!     Err(RejectionReason::IsRootWord)
//! );
//! assert_eq!(session.accepted(), ["pain"]);
//! ```

// Core domain types
pub mod core;

// Validation rules and session state
pub mod game;

// Realness lookup
pub mod dictionary;

// Word lists
pub mod wordlists;

// Resource configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
