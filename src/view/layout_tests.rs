//! Tests for the screen layout.

use super::*;
use crate::model::Record;
use crate::state::InputMode;
use crate::view_state::window::WindowConfig;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn row(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn state(viewport: usize, rows: usize) -> AppState {
    let mut state = AppState::new(
        WindowConfig::new(1, viewport).unwrap(),
        InputMode::Static,
        "data.txt",
    );
    state.append_records((1..=rows).map(|n| Record::parse(n, format!("item {n}"))).collect());
    state
}

#[test]
fn areas_without_panel() {
    let areas = calculate_areas(Rect::new(0, 0, 80, 24), false);
    assert_eq!(areas.list, Rect::new(0, 0, 80, 23));
    assert_eq!(areas.status, Rect::new(0, 23, 80, 1));
    assert_eq!(areas.performance, None);
}

#[test]
fn areas_with_panel() {
    let areas = calculate_areas(Rect::new(0, 0, 80, 24), true);
    assert_eq!(areas.list, Rect::new(0, 0, 46, 23));
    assert_eq!(areas.performance, Some(Rect::new(46, 0, 34, 23)));
}

#[test]
fn viewport_height_excludes_border_and_status() {
    assert_eq!(list_viewport_height(24), 21);
    assert_eq!(list_viewport_height(3), 0);
    assert_eq!(list_viewport_height(0), 0);
}

#[test]
fn full_frame_layout() {
    let state = state(4, 50);
    let mut terminal = Terminal::new(TestBackend::new(40, 7)).unwrap();
    let styles = ListStyles::default();
    terminal
        .draw(|frame| {
            render_layout(frame, &state, &PerformanceMetrics::default(), &styles, true);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();

    assert_eq!(row(buffer, 0), "┌ data.txt (50 rows) ──────────────────┐");
    assert_eq!(row(buffer, 1), "│     1 │ item 1                       │");
    assert_eq!(row(buffer, 4), "│     4 │ item 4                       │");
    assert_eq!(row(buffer, 5), "└──────────────────────────────────────┘");
    assert_eq!(row(buffer, 6), "   0%  rows 1-9 of 50  [LIVE]");
}

#[test]
fn performance_panel_is_drawn_when_visible() {
    let mut state = state(4, 50);
    state.performance_visible = true;
    let mut terminal = Terminal::new(TestBackend::new(80, 14)).unwrap();
    let styles = ListStyles::default();
    terminal
        .draw(|frame| {
            render_layout(frame, &state, &PerformanceMetrics::default(), &styles, true);
        })
        .unwrap();
    let top = row(terminal.backend().buffer(), 0);
    assert!(top.contains("Performance"), "top row was {top:?}");
}

#[test]
fn help_overlay_is_drawn_on_top() {
    let mut state = state(4, 50);
    state.help_visible = true;
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    let styles = ListStyles::default();
    terminal
        .draw(|frame| {
            render_layout(frame, &state, &PerformanceMetrics::default(), &styles, true);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    let any_row_has_title = (0..40).any(|y| row(buffer, y).contains("Keyboard Shortcuts"));
    assert!(any_row_has_title);
}
