//! Tests for the TUI shell, driven through TestBackend.

use super::*;
use crate::source::{FileSource, StdinSource};
use crate::view_state::types::LayoutOffset;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::backend::TestBackend;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

fn write_lines(name: &str, count: usize) -> PathBuf {
    let path = std::env::temp_dir().join(format!("vlist_view_{name}.txt"));
    let text: String = (1..=count).map(|n| format!("entry {n}\n")).collect();
    std::fs::write(&path, text).unwrap();
    path
}

fn file_app(name: &str, count: usize, options: &RunOptions) -> TuiApp<TestBackend> {
    let path = write_lines(name, count);
    let source = InputSource::file(FileSource::new(&path).unwrap());
    let _ = std::fs::remove_file(&path);
    let terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    TuiApp::with_terminal(terminal, source, options).unwrap()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind) -> MouseEvent {
    MouseEvent {
        kind,
        column: 5,
        row: 5,
        modifiers: KeyModifiers::NONE,
    }
}

fn screen_row(app: &TuiApp<TestBackend>, y: u16) -> String {
    let buffer = app.terminal().backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[test]
fn tui_error_from_io_error() {
    let err: TuiError = io::Error::other("boom").into();
    assert!(matches!(err, TuiError::Io(_)));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn startup_sizes_viewport_from_terminal() {
    let app = file_app("startup", 100, &RunOptions::new(ResolvedConfig::default()));
    let state = app.app_state();
    // 10 rows minus status bar and two border lines
    assert_eq!(state.list().config().viewport_height(), 7);
    assert_eq!(state.list().len(), 100);
    assert_eq!(state.input_mode, InputMode::Static);
    assert_eq!(state.source_label, "vlist_view_startup.txt");
}

#[test]
fn startup_applies_configured_geometry_and_panel() {
    let config = ResolvedConfig {
        row_height: 2,
        overscan: 1,
        show_performance: true,
        ..ResolvedConfig::default()
    };
    let app = file_app("geometry", 10, &RunOptions::new(config));
    let state = app.app_state();
    assert_eq!(state.list().config().row_height(), 2);
    assert_eq!(state.list().config().overscan(), 1);
    assert!(state.performance_visible);
}

#[test]
fn zero_row_height_is_rejected() {
    let path = write_lines("zero_row", 3);
    let source = InputSource::file(FileSource::new(&path).unwrap());
    let _ = std::fs::remove_file(&path);
    let config = ResolvedConfig {
        row_height: 0,
        ..ResolvedConfig::default()
    };
    let terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    let result = TuiApp::with_terminal(terminal, source, &RunOptions::new(config));
    assert!(matches!(result, Err(TuiError::Configuration(_))));
}

#[test]
fn initial_line_scrolls_to_row() {
    let mut options = RunOptions::new(ResolvedConfig::default());
    options.initial_line = Some(50);
    let app = file_app("initial_line", 100, &options);
    assert_eq!(app.app_state().list().scroll_offset(), LayoutOffset::new(49));
}

#[test]
fn initial_line_out_of_range_posts_message() {
    let mut options = RunOptions::new(ResolvedConfig::default());
    options.initial_line = Some(500);
    let app = file_app("initial_line_missing", 100, &options);
    assert_eq!(app.app_state().list().scroll_offset(), LayoutOffset::ZERO);
    assert!(app.app_state().status_message().is_some());
}

#[test]
fn handle_key_q_returns_true() {
    let mut app = file_app("quit", 5, &RunOptions::new(ResolvedConfig::default()));
    assert!(app.handle_key_test(key(KeyCode::Char('q'))));
}

#[test]
fn handle_key_ctrl_c_returns_true() {
    let mut app = file_app("ctrl_c", 5, &RunOptions::new(ResolvedConfig::default()));
    assert!(app.handle_key_test(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}

#[test]
fn handle_key_j_scrolls_one_line() {
    let mut app = file_app("scroll_j", 100, &RunOptions::new(ResolvedConfig::default()));
    assert!(!app.handle_key_test(key(KeyCode::Char('j'))));
    assert_eq!(app.app_state().list().scroll_offset(), LayoutOffset::new(1));
}

#[test]
fn mouse_wheel_scrolls_three_lines() {
    let mut app = file_app("wheel", 100, &RunOptions::new(ResolvedConfig::default()));
    app.handle_mouse_test(mouse(MouseEventKind::ScrollDown));
    assert_eq!(app.app_state().list().scroll_offset(), LayoutOffset::new(3));
    app.handle_mouse_test(mouse(MouseEventKind::ScrollUp));
    assert_eq!(app.app_state().list().scroll_offset(), LayoutOffset::ZERO);
}

#[test]
fn resize_updates_viewport_height() {
    let mut app = file_app("resize", 100, &RunOptions::new(ResolvedConfig::default()));
    app.handle_resize_test(60, 20);
    assert_eq!(app.app_state().list().config().viewport_height(), 17);
}

#[test]
fn resize_too_small_keeps_previous_viewport() {
    let mut app = file_app("resize_small", 100, &RunOptions::new(ResolvedConfig::default()));
    app.handle_resize_test(60, 2);
    assert_eq!(app.app_state().list().config().viewport_height(), 7);
}

#[test]
fn draw_renders_rows_and_status() {
    let mut app = file_app("draw", 100, &RunOptions::new(ResolvedConfig::default()));
    app.render_test().unwrap();
    assert_eq!(screen_row(&app, 1), format!("│     1 │ entry 1{}│", " ".repeat(42)));
    assert!(screen_row(&app, 9).contains("rows 1-12 of 100"));
}

#[test]
fn draw_records_render_time_and_memory() {
    let mut app = file_app("draw_metrics", 10, &RunOptions::new(ResolvedConfig::default()));
    app.render_test().unwrap();
    let metrics = app.metrics_test();
    assert!(metrics.render_time > Duration::ZERO);
    if cfg!(target_os = "linux") {
        assert!(metrics.memory_usage_mb > 0);
    }
}

#[test]
fn stdin_source_streams_until_eof() {
    let source = InputSource::stdin(StdinSource::from_reader(Cursor::new("a\nb\nc\n")));
    let terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    let mut app =
        TuiApp::with_terminal(terminal, source, &RunOptions::new(ResolvedConfig::default()))
            .unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while app.app_state().input_mode == InputMode::Streaming && Instant::now() < deadline {
        app.poll_input_test().unwrap();
        std::thread::sleep(Duration::from_millis(5));
    }

    assert_eq!(app.app_state().input_mode, InputMode::Eof);
    assert_eq!(app.app_state().list().len(), 3);
    assert_eq!(app.app_state().source_label, "stdin");
}
