//! Integration tests for configuration resolution
//!
//! Exercises the full precedence chain the binary uses:
//! Defaults → Config File → Env Vars → CLI Args.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use vlist::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, ConfigError, ResolvedConfig,
};

const ENV_VARS: [&str; 3] = ["VLIST_CONFIG", "VLIST_ROW_HEIGHT", "VLIST_OVERSCAN"];

fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("vlist_it_{name}.toml"));
    fs::write(&path, contents).unwrap();
    path
}

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn resolve(config_path: Option<PathBuf>, cli: CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    Ok(apply_cli_overrides(apply_env_overrides(merge_config(file)), cli))
}

#[test]
#[serial(vlist_env)]
fn test_config_file_values_reach_window_and_monitor() {
    clear_env();
    let path = write_config(
        "full",
        r#"
row_height = 2
overscan = 3
show_performance = true
scroll_top_threshold = 40
fps_interval_ms = 500
memory_interval_ms = 2000
log_metrics = true
log_file_path = "/tmp/vlist-it.log"
"#,
    );

    let config = resolve(Some(path.clone()), CliOverrides::default()).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(config.row_height, 2);
    assert!(config.show_performance);
    assert_eq!(config.scroll_top_threshold, 40);
    assert_eq!(config.log_file_path, PathBuf::from("/tmp/vlist-it.log"));

    let window = config.window_config(20).unwrap();
    assert_eq!(window.row_height(), 2);
    assert_eq!(window.overscan(), 3);
    assert_eq!(window.rows_per_viewport(), 10);

    let monitor = config.monitor_options();
    assert_eq!(monitor.fps_interval, Duration::from_millis(500));
    assert_eq!(monitor.memory_interval, Duration::from_millis(2000));
    assert!(monitor.log_metrics);
}

#[test]
#[serial(vlist_env)]
fn test_env_overrides_file_and_cli_overrides_env() {
    clear_env();
    let path = write_config("layers", "row_height = 2\noverscan = 3\n");
    env::set_var("VLIST_ROW_HEIGHT", "4");
    env::set_var("VLIST_OVERSCAN", "7");

    let from_env = resolve(Some(path.clone()), CliOverrides::default()).unwrap();
    assert_eq!(from_env.row_height, 4);
    assert_eq!(from_env.overscan, 7);

    let cli = CliOverrides {
        overscan: Some(1),
        ..CliOverrides::default()
    };
    let from_cli = resolve(Some(path.clone()), cli).unwrap();
    assert_eq!(from_cli.row_height, 4, "Unset CLI flags keep env value");
    assert_eq!(from_cli.overscan, 1);

    clear_env();
    let _ = fs::remove_file(&path);
}

#[test]
#[serial(vlist_env)]
fn test_config_env_var_selects_file() {
    clear_env();
    let path = write_config("from_env", "overscan = 9\n");
    env::set_var("VLIST_CONFIG", &path);

    let config = resolve(None, CliOverrides::default()).unwrap();
    assert_eq!(config.overscan, 9);

    clear_env();
    let _ = fs::remove_file(&path);
}

#[test]
#[serial(vlist_env)]
fn test_malformed_env_value_is_ignored() {
    clear_env();
    env::set_var("VLIST_ROW_HEIGHT", "tall");

    let config = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(config.row_height, 1);

    clear_env();
}

#[test]
#[serial(vlist_env)]
fn test_unknown_key_is_a_parse_error() {
    clear_env();
    let path = write_config("unknown_key", "row_hieght = 2\n");

    let result = resolve(Some(path.clone()), CliOverrides::default());
    let _ = fs::remove_file(&path);

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
#[serial(vlist_env)]
fn test_zero_row_height_resolves_but_window_rejects_it() {
    clear_env();
    let path = write_config("zero_row", "row_height = 0\n");

    let config = resolve(Some(path.clone()), CliOverrides::default()).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(config.row_height, 0);
    assert!(config.window_config(10).is_err());
}
