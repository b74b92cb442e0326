//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Lines taken by the list border (top and bottom).
pub const LIST_BORDER_HEIGHT: u16 = 2;

/// Width of the performance panel in columns, borders included.
pub const PERF_PANEL_WIDTH: u16 = 34;

/// Width of the right-aligned line number in the gutter.
pub const LINE_NUMBER_WIDTH: usize = 6;

/// Separator between gutter and row text.
pub const GUTTER_SEPARATOR: &str = " │ ";

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Event loop timer: stdin polling and LIVE blink.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);
