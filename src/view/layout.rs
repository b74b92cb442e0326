//! Screen layout: list pane, optional performance panel, status bar.
//!
//! Pure layout logic; the event loop only supplies the frame and state.

use super::constants::{LIST_BORDER_HEIGHT, PERF_PANEL_WIDTH, STATUS_BAR_HEIGHT};
use super::help::render_help_overlay;
use super::list::RecordList;
use super::perf_panel::PerformancePanel;
use super::status_bar::StatusBar;
use super::styles::ListStyles;
use crate::perf::PerformanceMetrics;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Bordered list pane.
    pub list: Rect,
    /// Performance panel, when visible.
    pub performance: Option<Rect>,
    /// Status bar.
    pub status: Rect,
}

/// Split the frame area.
///
/// Vertically: content area + status bar. The content area is split
/// horizontally when the performance panel is visible.
pub fn calculate_areas(area: Rect, performance_visible: bool) -> ScreenAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                    // Content
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    let (list, performance) = if performance_visible {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(PERF_PANEL_WIDTH)])
            .split(vertical[0]);
        (horizontal[0], Some(horizontal[1]))
    } else {
        (vertical[0], None)
    };

    ScreenAreas {
        list,
        performance,
        status: vertical[1],
    }
}

/// Number of list lines that fit in a terminal of `terminal_height` rows.
///
/// This is the list's viewport height; it is 0 for terminals too small to
/// show any rows.
pub fn list_viewport_height(terminal_height: u16) -> usize {
    usize::from(terminal_height.saturating_sub(STATUS_BAR_HEIGHT + LIST_BORDER_HEIGHT))
}

/// Render a full frame.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    metrics: &PerformanceMetrics,
    styles: &ListStyles,
    colors: bool,
) {
    let areas = calculate_areas(frame.area(), state.performance_visible);

    frame.render_widget(
        RecordList::new(state.list(), &state.source_label, styles),
        areas.list,
    );

    if let Some(area) = areas.performance {
        frame.render_widget(PerformancePanel::new(metrics, styles), area);
    }

    frame.render_widget(StatusBar::new(state, styles, colors), areas.status);

    if state.help_visible {
        render_help_overlay(frame);
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
