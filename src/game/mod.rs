//! Word Scramble game logic
//!
//! Validation rules, per-game session state, and the `Game` front ends drive.

mod engine;
mod session;
pub mod validator;

pub use engine::Game;
pub use session::GameSession;
pub use validator::{Alert, RejectionReason, Verdict, validate};
