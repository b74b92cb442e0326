//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig,
};

use crate::perf::MonitorOptions;
use crate::view_state::window::{InvalidConfiguration, WindowConfig};
use std::time::Duration;

impl ResolvedConfig {
    /// Build the list geometry for a viewport of `viewport_height` rows.
    ///
    /// # Errors
    /// Returns [`InvalidConfiguration`] if `row_height` or `viewport_height` is zero.
    pub fn window_config(&self, viewport_height: usize) -> Result<WindowConfig, InvalidConfiguration> {
        Ok(WindowConfig::new(self.row_height, viewport_height)?.with_overscan(self.overscan))
    }

    /// Performance monitor options.
    pub fn monitor_options(&self) -> MonitorOptions {
        MonitorOptions {
            fps_interval: Duration::from_millis(self.fps_interval_ms),
            memory_interval: Duration::from_millis(self.memory_interval_ms),
            log_metrics: self.log_metrics,
        }
    }
}
