//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

use crate::view_state::window::WindowConfig;
use crate::view_state::DEFAULT_SCROLL_TOP_THRESHOLD;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "VLIST_CONFIG";
/// Environment variable overriding `row_height`.
pub const ENV_ROW_HEIGHT: &str = "VLIST_ROW_HEIGHT";
/// Environment variable overriding `overscan`.
pub const ENV_OVERSCAN: &str = "VLIST_OVERSCAN";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/vlist/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Height of every row in terminal lines.
    #[serde(default)]
    pub row_height: Option<usize>,

    /// Rows rendered beyond each edge of the viewport.
    #[serde(default)]
    pub overscan: Option<usize>,

    /// Show the performance panel on startup.
    #[serde(default)]
    pub show_performance: Option<bool>,

    /// Scroll offset above which the "back to top" hint is shown.
    #[serde(default)]
    pub scroll_top_threshold: Option<usize>,

    /// Minimum milliseconds between FPS samples.
    #[serde(default)]
    pub fps_interval_ms: Option<u64>,

    /// Minimum milliseconds between memory samples.
    #[serde(default)]
    pub memory_interval_ms: Option<u64>,

    /// Log every performance sample at info level.
    #[serde(default)]
    pub log_metrics: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Row height. Zero is rejected when the list is built.
    pub row_height: usize,
    /// Overscan rows.
    pub overscan: usize,
    /// Show performance panel on startup.
    pub show_performance: bool,
    /// "Back to top" hint threshold.
    pub scroll_top_threshold: usize,
    /// FPS sample interval in milliseconds.
    pub fps_interval_ms: u64,
    /// Memory sample interval in milliseconds.
    pub memory_interval_ms: u64,
    /// Log performance samples.
    pub log_metrics: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            row_height: 1,
            overscan: WindowConfig::DEFAULT_OVERSCAN,
            show_performance: false,
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
            fps_interval_ms: 1000,
            memory_interval_ms: 5000,
            log_metrics: false,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/vlist/vlist.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("vlist").join("vlist.log")
    } else {
        PathBuf::from("vlist.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/vlist/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vlist").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `VLIST_CONFIG` environment variable
/// 3. Default path `~/.config/vlist/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        row_height: config.row_height.unwrap_or(defaults.row_height),
        overscan: config.overscan.unwrap_or(defaults.overscan),
        show_performance: config.show_performance.unwrap_or(defaults.show_performance),
        scroll_top_threshold: config
            .scroll_top_threshold
            .unwrap_or(defaults.scroll_top_threshold),
        fps_interval_ms: config.fps_interval_ms.unwrap_or(defaults.fps_interval_ms),
        memory_interval_ms: config
            .memory_interval_ms
            .unwrap_or(defaults.memory_interval_ms),
        log_metrics: config.log_metrics.unwrap_or(defaults.log_metrics),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `VLIST_ROW_HEIGHT`: Override row height
/// - `VLIST_OVERSCAN`: Override overscan
///
/// Values that do not parse as non-negative integers are ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(row_height) = env_usize(ENV_ROW_HEIGHT) {
        config.row_height = row_height;
    }
    if let Some(overscan) = env_usize(ENV_OVERSCAN) {
        config.overscan = overscan;
    }
    config
}

fn env_usize(name: &str) -> Option<usize> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(variable = name, value = %raw, error = %e, "ignoring malformed environment override");
            None
        }
    }
}

/// CLI flags that override every other source when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--row-height`
    pub row_height: Option<usize>,
    /// `--overscan`
    pub overscan: Option<usize>,
    /// `--perf` (only `Some(true)` when the flag is given)
    pub show_performance: Option<bool>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(row_height) = overrides.row_height {
        config.row_height = row_height;
    }
    if let Some(overscan) = overrides.overscan {
        config.overscan = overscan;
    }
    if let Some(show) = overrides.show_performance {
        config.show_performance = show;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
