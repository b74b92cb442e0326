//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Transitions are
//! plain methods with no terminal access, so they are testable without a TUI.

use crate::config::KeyBindings;
use crate::model::{KeyAction, Record};
use crate::state::jump_prompt::{JumpPrompt, PromptOutcome};
use crate::state::scroll_handler::{
    clamp_to_container, handle_scroll_action, handle_wheel, is_at_bottom, jump_to_row,
};
use crate::view_state::scroll::{ScrollIndicator, ScrollPosition, DEFAULT_SCROLL_TOP_THRESHOLD};
use crate::view_state::window::{InvalidConfiguration, VirtualList, WindowConfig};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

// ===== InputMode =====

/// Where the list stands with respect to its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Loaded once from a file.
    Static,
    /// Still receiving lines from stdin.
    Streaming,
    /// Stdin reached end of input.
    Eof,
}

/// Result of handling one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// State may have changed; keep running.
    Continue,
    /// The user asked to quit.
    Quit,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
#[derive(Debug)]
pub struct AppState {
    /// The windowed list of records.
    list: VirtualList<Record>,

    /// Static file, live stdin, or finished stdin.
    pub input_mode: InputMode,

    /// Blink phase of the LIVE indicator, flipped on each timer tick.
    pub blink_on: bool,

    /// Whether the performance panel is shown.
    pub performance_visible: bool,

    /// Whether the help overlay is shown.
    pub help_visible: bool,

    /// Offset past which the scroll-to-top hint appears.
    pub scroll_top_threshold: usize,

    /// File name or `stdin`, shown in the list title.
    pub source_label: String,

    jump: Option<JumpPrompt>,
    status_message: Option<String>,
}

impl AppState {
    /// Empty state over the given geometry.
    pub fn new(config: WindowConfig, input_mode: InputMode, source_label: impl Into<String>) -> Self {
        Self {
            list: VirtualList::new(Vec::new(), config),
            input_mode,
            blink_on: true,
            performance_visible: false,
            help_visible: false,
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
            source_label: source_label.into(),
            jump: None,
            status_message: None,
        }
    }

    /// The windowed list.
    pub fn list(&self) -> &VirtualList<Record> {
        &self.list
    }

    /// Mutable access to the windowed list.
    pub fn list_mut(&mut self) -> &mut VirtualList<Record> {
        &mut self.list
    }

    /// Append newly read records.
    ///
    /// While streaming, a view that was showing the last row stays pinned
    /// to the bottom as rows arrive.
    pub fn append_records(&mut self, records: Vec<Record>) {
        if records.is_empty() {
            return;
        }
        let follow = self.input_mode == InputMode::Streaming
            && !self.list.is_empty()
            && is_at_bottom(&self.list);

        debug!(count = records.len(), follow, "appending records");
        self.list.extend_items(records);

        if follow {
            ScrollPosition::Bottom.apply(&mut self.list);
        } else {
            clamp_to_container(&mut self.list);
        }
    }

    /// Stdin reached end of input.
    pub fn mark_eof(&mut self) {
        if self.input_mode == InputMode::Streaming {
            info!(rows = self.list.len(), "input complete");
            self.input_mode = InputMode::Eof;
        }
    }

    /// Flip the LIVE indicator phase. Returns whether the change is visible.
    pub fn toggle_blink(&mut self) -> bool {
        self.blink_on = !self.blink_on;
        self.input_mode == InputMode::Streaming
    }

    /// Apply a new viewport height from a terminal resize.
    ///
    /// # Errors
    /// Returns [`InvalidConfiguration`] for a zero height; the previous
    /// geometry is kept.
    pub fn resize(&mut self, viewport_height: usize) -> Result<(), InvalidConfiguration> {
        if viewport_height == self.list.config().viewport_height() {
            return Ok(());
        }
        self.list.resize(viewport_height)?;
        clamp_to_container(&mut self.list);
        Ok(())
    }

    /// Scroll-position readout for the status bar.
    pub fn scroll_indicator(&self) -> ScrollIndicator {
        ScrollIndicator::from_list(&self.list, self.scroll_top_threshold)
    }

    /// Digits typed into the jump prompt, if it is open.
    pub fn jump_input(&self) -> Option<&str> {
        self.jump.as_ref().map(JumpPrompt::as_str)
    }

    /// Transient message for the status bar.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Bring the 1-based `row_number` to the top of the view.
    ///
    /// Returns whether the row exists; a missing row leaves the offset alone
    /// and posts a status message.
    pub fn jump_to_row(&mut self, row_number: usize) -> bool {
        let found = jump_to_row(&mut self.list, row_number);
        if !found {
            self.status_message = Some(format!(
                "row {} out of range (1-{})",
                row_number,
                self.list.len()
            ));
        }
        found
    }

    /// Mouse wheel scroll.
    pub fn wheel(&mut self, notches: isize) {
        handle_wheel(&mut self.list, notches);
    }

    /// Route a key press: jump prompt first, then Ctrl+C, then bindings.
    pub fn handle_key(&mut self, key: KeyEvent, bindings: &KeyBindings) -> KeyOutcome {
        if let Some(prompt) = self.jump.as_mut() {
            match prompt.handle_key(key) {
                PromptOutcome::Editing => {}
                PromptOutcome::Submit(row) => {
                    self.jump = None;
                    self.jump_to_row(row);
                }
                PromptOutcome::Cancel => self.jump = None,
            }
            return KeyOutcome::Continue;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Quit;
        }

        match bindings.get(key) {
            Some(action) => self.handle_action(action),
            None => KeyOutcome::Continue,
        }
    }

    /// Apply a bound action.
    pub fn handle_action(&mut self, action: KeyAction) -> KeyOutcome {
        self.status_message = None;
        match action {
            KeyAction::Quit => return KeyOutcome::Quit,
            KeyAction::ToggleHelp => self.help_visible = !self.help_visible,
            KeyAction::TogglePerformance => self.performance_visible = !self.performance_visible,
            KeyAction::StartJump => self.jump = Some(JumpPrompt::new()),
            _ if self.help_visible => {
                // Help overlay swallows navigation until dismissed.
            }
            _ => {
                handle_scroll_action(&mut self.list, action);
            }
        }
        KeyOutcome::Continue
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
