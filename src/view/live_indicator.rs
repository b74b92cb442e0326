//! LIVE indicator widget for status bar.
//!
//! Gray when the input is a file or stdin has ended; blinking green while
//! stdin is still streaming.

use crate::state::InputMode;
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Text content for the LIVE indicator.
const LIVE_INDICATOR_TEXT: &str = "[LIVE]";

/// LIVE indicator that renders based on InputMode and blink state.
///
/// The blink phase is passed in and owned by the event loop timer.
///
/// # Examples
///
/// ```rust
/// use vlist::view::live_indicator::LiveIndicator;
/// use vlist::state::InputMode;
///
/// let visible = LiveIndicator::new(InputMode::Streaming, true, true);
/// assert_eq!(visible.render().content, "[LIVE]");
///
/// let hidden = LiveIndicator::new(InputMode::Streaming, false, true);
/// assert_eq!(hidden.render().content, "");
/// ```
#[derive(Debug, Clone)]
pub struct LiveIndicator {
    mode: InputMode,
    blink_on: bool,
    colors: bool,
}

impl LiveIndicator {
    /// Create a new LiveIndicator.
    ///
    /// # Arguments
    ///
    /// * `mode` - The current input mode (Static, Streaming, or Eof)
    /// * `blink_on` - Blink phase (only relevant while streaming)
    /// * `colors` - Whether to color the text
    pub fn new(mode: InputMode, blink_on: bool, colors: bool) -> Self {
        Self {
            mode,
            blink_on,
            colors,
        }
    }

    /// Render the indicator as a ratatui Span.
    ///
    /// - `Static` / `Eof` → gray text
    /// - `Streaming` with `blink_on` → green text
    /// - `Streaming` without `blink_on` → empty (hidden)
    pub fn render(&self) -> Span<'static> {
        let color = match self.mode {
            InputMode::Static | InputMode::Eof => Color::Gray,
            InputMode::Streaming if self.blink_on => Color::Green,
            InputMode::Streaming => return Span::raw(""),
        };
        if self.colors {
            Span::styled(LIVE_INDICATOR_TEXT, Style::default().fg(color))
        } else {
            Span::raw(LIVE_INDICATOR_TEXT)
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "live_indicator_tests.rs"]
mod tests;
