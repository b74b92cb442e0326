//! Status bar: scroll position, rendered range, LIVE indicator, hints.

use super::live_indicator::LiveIndicator;
use super::styles::ListStyles;
use crate::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Hint shown once the list is scrolled past the threshold.
const SCROLL_TO_TOP_HINT: &str = "↑ g: top";

/// One-line status bar.
pub struct StatusBar<'a> {
    state: &'a AppState,
    styles: &'a ListStyles,
    colors: bool,
}

impl<'a> StatusBar<'a> {
    /// Create the status bar for the given state.
    pub fn new(state: &'a AppState, styles: &'a ListStyles, colors: bool) -> Self {
        Self {
            state,
            styles,
            colors,
        }
    }

    /// Spans in display order, separated by two spaces.
    pub fn spans(&self) -> Vec<Span<'static>> {
        if let Some(input) = self.state.jump_input() {
            return vec![Span::styled(
                format!(" Jump to row: {input}"),
                self.styles.hint,
            )];
        }

        let list = self.state.list();
        let indicator = self.state.scroll_indicator();
        let range = list.visible_range();

        let mut spans = vec![Span::styled(
            format!(" {:>4}", indicator.label()),
            self.styles.status,
        )];

        let rows = if range.is_empty() {
            "no rows".to_string()
        } else {
            format!(
                "rows {}-{} of {}",
                range.start_index.display(),
                range.end_index.get(),
                list.len()
            )
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(rows, self.styles.status));

        let live = LiveIndicator::new(self.state.input_mode, self.state.blink_on, self.colors).render();
        if !live.content.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(live);
        }

        if indicator.show_scroll_to_top {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(SCROLL_TO_TOP_HINT, self.styles.hint));
        }

        if let Some(message) = self.state.status_message() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(message.to_string(), self.styles.message));
        }

        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.spans())).render(area, buf);
    }
}
