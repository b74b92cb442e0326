//! Styling configuration for the list, status bar, and performance panel.

use crate::perf::{MetricStatus, ScoreGrade};
use ratatui::style::{Color, Modifier, Style};

/// Style for de-emphasized text (hints, gutters).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Style for section headers in panels and overlays.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

// ===== ListStyles =====

/// Styles used across the TUI.
///
/// With colors disabled every style is `Style::default()`, except the
/// modifiers that carry meaning without color (bold headers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyles {
    /// Line-number gutter.
    pub gutter: Style,
    /// Key of a `key: value` field line.
    pub field_key: Style,
    /// List border.
    pub border: Style,
    /// Status bar background text.
    pub status: Style,
    /// Scroll-to-top hint.
    pub hint: Style,
    /// Status messages such as an out-of-range jump.
    pub message: Style,
    /// Panel section headers.
    pub header: Style,
    /// Metric within threshold.
    pub normal: Style,
    /// Metric outside threshold, and warnings.
    pub flagged: Style,
    /// Score graded good.
    pub good: Style,
    /// Score graded fair.
    pub fair: Style,
    /// Score graded poor.
    pub poor: Style,
}

impl ListStyles {
    /// Build styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                gutter: MUTED_TEXT,
                field_key: Style::new().fg(Color::Cyan),
                border: Style::new().fg(Color::White),
                status: Style::new().fg(Color::Gray),
                hint: Style::new().fg(Color::Yellow),
                message: Style::new().fg(Color::Red),
                header: SECTION_HEADER,
                normal: Style::new().fg(Color::White),
                flagged: Style::new().fg(Color::Red),
                good: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
                fair: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                poor: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
            }
        } else {
            let bold = Style::new().add_modifier(Modifier::BOLD);
            Self {
                gutter: Style::new(),
                field_key: Style::new(),
                border: Style::new(),
                status: Style::new(),
                hint: Style::new(),
                message: Style::new(),
                header: bold,
                normal: Style::new(),
                flagged: Style::new(),
                good: bold,
                fair: bold,
                poor: bold,
            }
        }
    }

    /// Style for a score grade.
    pub fn grade(&self, grade: ScoreGrade) -> Style {
        match grade {
            ScoreGrade::Good => self.good,
            ScoreGrade::Fair => self.fair,
            ScoreGrade::Poor => self.poor,
        }
    }

    /// Style for a metric value.
    pub fn metric(&self, status: MetricStatus) -> Style {
        match status {
            MetricStatus::Normal => self.normal,
            MetricStatus::Flagged => self.flagged,
        }
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
