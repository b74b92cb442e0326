//! "Jump to row" prompt input.

use crossterm::event::{KeyCode, KeyEvent};

/// Maximum digits accepted; longer numbers cannot address a real row.
const MAX_DIGITS: usize = 19;

/// Digits typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpPrompt {
    digits: String,
}

/// What a key press did to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still editing.
    Editing,
    /// Enter with a number: jump to this 1-based row.
    Submit(usize),
    /// Esc, or Enter with nothing typed.
    Cancel,
}

impl JumpPrompt {
    /// Empty prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text typed so far.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Feed a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.digits.len() < MAX_DIGITS {
                    self.digits.push(c);
                }
                PromptOutcome::Editing
            }
            KeyCode::Backspace => {
                self.digits.pop();
                PromptOutcome::Editing
            }
            KeyCode::Enter => match self.digits.parse() {
                Ok(row) => PromptOutcome::Submit(row),
                Err(_) => PromptOutcome::Cancel,
            },
            KeyCode::Esc => PromptOutcome::Cancel,
            _ => PromptOutcome::Editing,
        }
    }
}
