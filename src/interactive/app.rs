//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::game::{Alert, Game, Verdict};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, D: Dictionary + ?Sized> {
    pub game: Game<'a, D>,
    pub input_buffer: String,
    /// Rejection alert currently shown; input is blocked until dismissed
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, D: Dictionary + ?Sized> App<'a, D> {
    #[must_use]
    pub fn new(game: Game<'a, D>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            alert: None,
            messages: vec![
                Message {
                    text: "Make as many words as you can from the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter: submit | Ctrl+R: restart | Esc: quit".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Submit the input buffer as a candidate
    pub fn submit(&mut self) {
        let candidate = self.input_buffer.clone();

        match self.game.submit(&candidate) {
            Ok(Verdict::Accepted(word)) => {
                self.add_message(&format!("Nice! '{word}' accepted"), MessageStyle::Success);
                self.input_buffer.clear();
            }
            Ok(Verdict::Ignored) => {}
            Err(reason) => {
                let alert = self.game.alert_for(reason);
                self.add_message(&alert.title, MessageStyle::Error);
                self.alert = Some(alert);
            }
        }
    }

    /// Close the alert, keeping the typed word for editing
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn restart(&mut self) {
        self.game.restart();
        self.input_buffer.clear();
        self.alert = None;
        self.messages.clear();
        let root = self.game.root().to_uppercase();
        self.add_message(
            &format!("New game started! Root word: {root}"),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Alert is modal: only "Ok" (Enter/Esc) gets through
        if self.alert.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        match code {
            KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                // No auto-capitalization
                self.input_buffer.extend(c.to_lowercase());
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary + ?Sized>(app: App<'_, D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary + ?Sized>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
