//! Tests for configuration loading from the environment.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use tempfile::TempDir;

use hearth::config::{HearthConfig, DEFAULT_REPLY_DELAY};
use hearth::error::HearthError;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 2] = ["HEARTH_DATA_DIR", "HEARTH_REPLY_DELAY_MS"];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn with_env<T>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
    let _lock = ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }
    for (key, value) in vars {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }
    f()
}

#[test]
fn env_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "reply_delay_ms = 250\n").unwrap();
    let data_dir = dir.path().to_string_lossy().to_string();

    let config = with_env(
        &[
            ("HEARTH_DATA_DIR", Some(data_dir.as_str())),
            ("HEARTH_REPLY_DELAY_MS", Some("40")),
        ],
        HearthConfig::load,
    )
    .unwrap();

    assert_eq!(config.data_dir(), dir.path());
    assert_eq!(config.reply_delay(), Duration::from_millis(40));
}

#[test]
fn config_file_in_data_dir_is_read() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "reply_delay_ms = 250\n").unwrap();
    let data_dir = dir.path().to_string_lossy().to_string();

    let config =
        with_env(&[("HEARTH_DATA_DIR", Some(data_dir.as_str()))], HearthConfig::load).unwrap();

    assert_eq!(config.reply_delay(), Duration::from_millis(250));
}

#[test]
fn invalid_delay_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().to_string_lossy().to_string();

    let err = with_env(
        &[
            ("HEARTH_DATA_DIR", Some(data_dir.as_str())),
            ("HEARTH_REPLY_DELAY_MS", Some("soon")),
        ],
        HearthConfig::load,
    )
    .unwrap_err();

    assert!(
        matches!(err, HearthError::Configuration(ref m) if m.contains("HEARTH_REPLY_DELAY_MS"))
    );
}

#[test]
fn blank_env_values_are_ignored() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().to_string_lossy().to_string();

    let config = with_env(
        &[
            ("HEARTH_DATA_DIR", Some(data_dir.as_str())),
            ("HEARTH_REPLY_DELAY_MS", Some("  ")),
        ],
        HearthConfig::load,
    )
    .unwrap();

    assert_eq!(config.reply_delay(), DEFAULT_REPLY_DELAY);
}

#[test]
fn defaults_point_at_hidden_home_directory() {
    let config = HearthConfig::new();
    assert_eq!(config.data_dir().file_name(), Some(Path::new(".hearth").as_os_str()));
    assert_eq!(config.reply_delay(), DEFAULT_REPLY_DELAY);
}
