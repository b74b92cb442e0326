//! vlist - Entry Point

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use vlist::config::CliOverrides;
use vlist::view::{ColorConfig, RunOptions};

/// vlist - scroll through large line-oriented files, rendering only what is on screen
#[derive(Parser, Debug)]
#[command(name = "vlist")]
#[command(version)]
#[command(about = "Windowed terminal viewer for large text and JSON Lines files")]
pub struct Args {
    /// Path to input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Terminal lines per row (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub row_height: Option<u64>,

    /// Extra rows rendered above and below the viewport
    #[arg(long)]
    pub overscan: Option<usize>,

    /// Start at specific line number (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub line: Option<u64>,

    /// Show performance panel on startup
    #[arg(long)]
    pub perf: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Flags that take precedence over config file and environment.
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            row_height: self.row_height.map(to_usize),
            overscan: self.overscan,
            show_performance: self.perf.then_some(true),
        }
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config_file = vlist::config::load_config_with_precedence(args.config.clone())?;
    let merged = vlist::config::merge_config(config_file);

    // Log path comes from the file layer only; logging must be up before
    // env parsing so malformed values are reported.
    // Keep the guard alive until exit so buffered log lines are flushed
    let _log_guard = vlist::logging::init(&merged.log_file_path)?;

    let config = vlist::config::apply_cli_overrides(
        vlist::config::apply_env_overrides(merged),
        args.cli_overrides(),
    );

    info!(config = ?config, "Configuration loaded and resolved");

    let load_started = Instant::now();
    let input_source = vlist::source::detect_input_source(args.file.clone())?;

    let options = RunOptions {
        initial_line: args.line.map(to_usize),
        color: ColorConfig::from_env_and_args(args.no_color),
        load_started,
        ..RunOptions::new(config)
    };

    vlist::view::run_with_source(input_source, &options)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["vlist", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["vlist", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["vlist"]);
        assert_eq!(args.file, None);
        assert_eq!(args.row_height, None);
        assert_eq!(args.overscan, None);
        assert_eq!(args.line, None);
        assert!(!args.perf);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
        assert_eq!(args.cli_overrides(), CliOverrides::default());
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["vlist", "events.jsonl"]);
        assert_eq!(args.file, Some(PathBuf::from("events.jsonl")));
    }

    #[test]
    fn test_row_height_flag() {
        let args = Args::parse_from(["vlist", "--row-height", "3"]);
        assert_eq!(args.row_height, Some(3));
        assert_eq!(args.cli_overrides().row_height, Some(3));
    }

    #[test]
    fn test_row_height_rejects_zero() {
        let result = Args::try_parse_from(["vlist", "--row-height", "0"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_overscan_accepts_zero() {
        let args = Args::parse_from(["vlist", "--overscan", "0"]);
        assert_eq!(args.cli_overrides().overscan, Some(0));
    }

    #[test]
    fn test_line_short_flag() {
        let args = Args::parse_from(["vlist", "-l", "50"]);
        assert_eq!(args.line, Some(50));
    }

    #[test]
    fn test_line_long_flag() {
        let args = Args::parse_from(["vlist", "--line", "100"]);
        assert_eq!(args.line, Some(100));
    }

    #[test]
    fn test_line_rejects_zero() {
        let result = Args::try_parse_from(["vlist", "-l", "0"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_line_rejects_negative() {
        let result = Args::try_parse_from(["vlist", "-l", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_perf_flag_overrides_show_performance() {
        let args = Args::parse_from(["vlist", "--perf"]);
        assert!(args.perf);
        assert_eq!(args.cli_overrides().show_performance, Some(true));
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["vlist", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["vlist", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "vlist",
            "data.txt",
            "--row-height",
            "2",
            "--overscan",
            "8",
            "-l",
            "42",
            "--perf",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("data.txt")));
        assert_eq!(args.row_height, Some(2));
        assert_eq!(args.overscan, Some(8));
        assert_eq!(args.line, Some(42));
        assert!(args.perf);
    }

    #[test]
    fn test_row_height_flows_through_config_precedence_chain() {
        use vlist::config::{apply_cli_overrides, merge_config, ConfigFile};

        // Defaults → Config File → CLI Args (env skipped to stay hermetic)
        let config_file = ConfigFile {
            row_height: Some(4),
            overscan: Some(2),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.row_height, 4, "Config file should override default");
        assert_eq!(merged.overscan, 2);

        let args = Args::parse_from(["vlist", "--row-height", "6"]);
        let with_cli = apply_cli_overrides(merged, args.cli_overrides());
        assert_eq!(with_cli.row_height, 6, "CLI should override all other sources");
        assert_eq!(with_cli.overscan, 2, "Unset CLI flags keep lower layers");
    }
}
