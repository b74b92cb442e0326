//! Windowed record list widget.
//!
//! Only the rows in the list's visible range are turned into lines. The
//! rendered block starts at the translation offset; lines above the scroll
//! offset are skipped and the rest clipped to the viewport.

use super::constants::{GUTTER_SEPARATOR, LINE_NUMBER_WIDTH};
use super::styles::ListStyles;
use crate::model::Record;
use crate::view_state::window::VirtualList;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Columns taken by the line-number gutter and its separator.
pub const GUTTER_WIDTH: usize = LINE_NUMBER_WIDTH + 3;

const ELLIPSIS: char = '…';

/// Bordered list of records.
pub struct RecordList<'a> {
    list: &'a VirtualList<Record>,
    label: &'a str,
    styles: &'a ListStyles,
}

impl<'a> RecordList<'a> {
    /// Create the widget. `label` names the input in the title.
    pub fn new(list: &'a VirtualList<Record>, label: &'a str, styles: &'a ListStyles) -> Self {
        Self {
            list,
            label,
            styles,
        }
    }

    fn title(&self) -> String {
        let count = self.list.len();
        let noun = if count == 1 { "row" } else { "rows" };
        format!(" {} ({} {}) ", self.label, count, noun)
    }
}

impl Widget for RecordList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(self.styles.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = visible_lines(
            self.list,
            usize::from(inner.width),
            usize::from(inner.height),
            self.styles,
        );
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Screen lines for the current viewport, top to bottom.
///
/// At most `height` lines; fewer when the content ends early.
pub fn visible_lines(
    list: &VirtualList<Record>,
    width: usize,
    height: usize,
    styles: &ListStyles,
) -> Vec<Line<'static>> {
    let row_height = list.config().row_height();
    let rows = list.render_visible(|record, _| row_lines(record, row_height, width, styles));
    let skip = list
        .scroll_offset()
        .get()
        .saturating_sub(list.translate_offset().get());

    rows.into_iter().flatten().skip(skip).take(height).collect()
}

/// Exactly `row_height` lines for one record.
///
/// The first line carries the line number and raw text; structured records
/// list their fields on the following lines. Extra fields are dropped and
/// short rows are padded with an empty gutter.
pub fn row_lines(
    record: &Record,
    row_height: usize,
    width: usize,
    styles: &ListStyles,
) -> Vec<Line<'static>> {
    let text_width = width.saturating_sub(GUTTER_WIDTH);
    let mut lines = Vec::with_capacity(row_height);

    lines.push(Line::from(vec![
        Span::styled(
            format!("{:>LINE_NUMBER_WIDTH$}{GUTTER_SEPARATOR}", record.line_number()),
            styles.gutter,
        ),
        Span::raw(truncate_to_width(record.text(), text_width)),
    ]));

    for (key, value) in record.fields().iter().take(row_height.saturating_sub(1)) {
        let key_text = truncate_to_width(key, text_width);
        let value_width = text_width.saturating_sub(display_width(&key_text) + 2);
        lines.push(Line::from(vec![
            empty_gutter(styles),
            Span::styled(key_text, styles.field_key),
            Span::raw(": "),
            Span::raw(truncate_to_width(value, value_width)),
        ]));
    }

    while lines.len() < row_height {
        lines.push(Line::from(empty_gutter(styles)));
    }
    lines
}

fn empty_gutter(styles: &ListStyles) -> Span<'static> {
    Span::styled(
        format!("{:>LINE_NUMBER_WIDTH$}{GUTTER_SEPARATOR}", ""),
        styles.gutter,
    )
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Fit `text` into `max_width` terminal columns.
///
/// Control characters become spaces. Text that does not fit is cut on a
/// character boundary and ends in `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if display_width(&sanitized) <= max_width {
        return sanitized;
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in sanitized.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
