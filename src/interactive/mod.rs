//! Interactive TUI interface
//!
//! Full-screen game with a modal alert for rejected words.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
