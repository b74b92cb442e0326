//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
pub mod list;
pub mod live_indicator;
mod perf_panel;
mod status_bar;
mod styles;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, list_viewport_height, render_layout, ScreenAreas};
pub use list::{row_lines, truncate_to_width, visible_lines, RecordList};
pub use live_indicator::LiveIndicator;
pub use perf_panel::{format_millis, grade_label, PerformancePanel};
pub use status_bar::StatusBar;
pub use styles::{ColorConfig, ListStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::InputError;
use crate::perf::PerformanceMonitor;
use crate::source::InputSource;
use crate::state::{AppState, InputMode, KeyOutcome};
use crate::view_state::window::InvalidConfiguration;
use constants::TICK_INTERVAL;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Row or viewport height rejected
    #[error("Configuration error: {0}")]
    Configuration(#[from] InvalidConfiguration),
}

/// Startup options for the TUI, resolved by `main` from config and CLI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Fully resolved configuration.
    pub config: ResolvedConfig,
    /// 1-based row to show at the top on startup.
    pub initial_line: Option<usize>,
    /// Color output switch.
    pub color: ColorConfig,
    /// When loading began; the first poll completes the load time.
    pub load_started: Instant,
}

impl RunOptions {
    /// Options with defaults for everything but the configuration.
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            config,
            initial_line: None,
            color: ColorConfig::default(),
            load_started: Instant::now(),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    input_source: InputSource,
    key_bindings: KeyBindings,
    monitor: PerformanceMonitor,
    styles: ListStyles,
    color: ColorConfig,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(input_source: InputSource, options: &RunOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Self::with_terminal(terminal, input_source, options)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only on input, resize,
    /// new stdin data, or a visible LIVE blink; idle ticks cost one poll.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                let redraw = match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        true
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height);
                        true
                    }
                    _ => false,
                };
                if redraw {
                    self.draw()?;
                }
                continue;
            }

            let has_new_data = self.poll_input()?;
            let blink_visible = self.app_state.toggle_blink();
            if has_new_data || blink_visible {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the application over an existing terminal.
    ///
    /// Performs the first poll of the input source (recorded as load time)
    /// and applies the startup options.
    ///
    /// # Errors
    /// * `TuiError::Configuration` if the configured row height is zero
    /// * `TuiError::Input` if the first poll fails
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut input_source: InputSource,
        options: &RunOptions,
    ) -> Result<Self, TuiError> {
        let height = terminal.size()?.height;
        // A terminal too small for any row still gets a one-line viewport.
        let viewport = list_viewport_height(height).max(1);
        let window = options.config.window_config(viewport)?;

        let mode = if input_source.is_stdin() {
            InputMode::Streaming
        } else {
            InputMode::Static
        };
        let mut app_state = AppState::new(window, mode, input_source.label());
        app_state.performance_visible = options.config.show_performance;
        app_state.scroll_top_threshold = options.config.scroll_top_threshold;

        let mut monitor = PerformanceMonitor::new(options.config.monitor_options(), Instant::now());
        let records = input_source.poll()?;
        monitor.record_load_time(options.load_started.elapsed());
        info!(
            rows = records.len(),
            source = %input_source.label(),
            "initial load complete"
        );
        app_state.append_records(records);
        if !input_source.is_live() {
            app_state.mark_eof();
        }

        if let Some(line) = options.initial_line {
            if !app_state.jump_to_row(line) {
                warn!(line, rows = app_state.list().len(), "initial line out of range");
            }
        }

        Ok(Self {
            terminal,
            app_state,
            input_source,
            key_bindings: KeyBindings::default(),
            monitor,
            styles: ListStyles::with_color_config(options.color),
            color: options.color,
        })
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// The terminal, for buffer inspection with `TestBackend`.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Poll the input source for new records.
    ///
    /// Returns whether anything changed on screen.
    fn poll_input(&mut self) -> Result<bool, TuiError> {
        let records = self.input_source.poll()?;
        let has_new = !records.is_empty();
        if has_new {
            debug!(count = records.len(), "new records");
            self.app_state.append_records(records);
        }

        let was_streaming = self.app_state.input_mode == InputMode::Streaming;
        if was_streaming && !self.input_source.is_live() {
            self.app_state.mark_eof();
            return Ok(true);
        }
        Ok(has_new)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        self.app_state.handle_key(key, &self.key_bindings) == KeyOutcome::Quit
    }

    /// Handle a mouse event; only the wheel scrolls.
    ///
    /// Returns whether a redraw is needed.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.app_state.wheel(1);
                true
            }
            MouseEventKind::ScrollUp => {
                self.app_state.wheel(-1);
                true
            }
            _ => false,
        }
    }

    /// Handle a terminal resize event
    ///
    /// The new list viewport replaces the old one; a terminal too short for
    /// any row keeps the previous viewport.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "resize");
        if let Err(err) = self.app_state.resize(list_viewport_height(height)) {
            warn!(%err, "keeping previous viewport");
        }
    }

    /// Render the current frame, timing it and sampling metrics.
    fn draw(&mut self) -> Result<(), TuiError> {
        self.monitor.sample_memory_if_due(Instant::now());
        let metrics = *self.monitor.metrics();

        let terminal = &mut self.terminal;
        let state = &self.app_state;
        let styles = &self.styles;
        let colors = self.color.colors_enabled();
        self.monitor.measure_render(|| {
            terminal.draw(|frame| render_layout(frame, state, &metrics, styles, colors))
        })?;

        self.monitor.record_frame(Instant::now());
        Ok(())
    }
}

// ===== Test Helpers =====
//
// Drive the event handlers directly, without a real terminal or event
// queue. Used by unit tests, integration tests, and benchmarks.

#[cfg(any(test, feature = "bench-internals"))]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a key; returns true if the app should quit.
    pub fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a mouse event.
    pub fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse);
    }

    /// Handle a resize to `width x height` (the backend is not resized).
    pub fn handle_resize_test(&mut self, width: u16, height: u16) {
        self.handle_resize(width, height);
    }

    /// Run one timer tick's input poll.
    pub fn poll_input_test(&mut self) -> Result<bool, TuiError> {
        self.poll_input()
    }

    /// Render a single frame.
    pub fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Latest performance metrics.
    pub fn metrics_test(&self) -> crate::perf::PerformanceMetrics {
        *self.monitor.metrics()
    }
}

/// Initialize and run the TUI application with input source and options
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(input_source: InputSource, options: &RunOptions) -> Result<(), TuiError> {
    let result = TuiApp::new(input_source, options).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
