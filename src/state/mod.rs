//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod jump_prompt;
pub mod scroll_handler;

// Re-export for convenience
pub use app_state::{AppState, InputMode, KeyOutcome};
pub use jump_prompt::{JumpPrompt, PromptOutcome};
pub use scroll_handler::{handle_scroll_action, handle_wheel, jump_to_row};
