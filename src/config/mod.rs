//! Configuration system (layered: code > env > config file > defaults).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{HearthError, Result};

/// Global default config (lazy-initialized from file and env).
static DEFAULT_CONFIG: OnceLock<HearthConfig> = OnceLock::new();

/// Delay before the assistant answers, simulating "thinking".
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

const CONFIG_FILE_NAME: &str = "config.toml";

const ENV_DATA_DIR: &str = "HEARTH_DATA_DIR";
const ENV_REPLY_DELAY_MS: &str = "HEARTH_REPLY_DELAY_MS";

/// Layered configuration for Hearth.
///
/// Resolution order for every setting:
/// 1. Explicit values set in code (`with_*`)
/// 2. Environment variables (`HEARTH_DATA_DIR`, `HEARTH_REPLY_DELAY_MS`)
/// 3. `config.toml` in the data directory
/// 4. Built-in defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HearthConfig {
    data_dir: PathBuf,
    reply_delay: Duration,
}

impl Default for HearthConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    reply_delay_ms: Option<u64>,
}

impl HearthConfig {
    /// Built-in defaults only.
    pub fn new() -> Self {
        Self {
            data_dir: default_data_dir(),
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }

    /// Load defaults, then the config file, then environment overrides.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let mut config = Self::new();
        if let Some(dir) = env_var(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }

        let file_path = config.data_dir.join(CONFIG_FILE_NAME);
        config.apply_file(&file_path)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Defaults overlaid with a specific config file (no environment).
    ///
    /// A missing file yields the defaults.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::new();
        config.apply_file(path.as_ref())?;
        Ok(config)
    }

    /// Get (or create) the global default config.
    ///
    /// Falls back to built-in defaults when the file or environment is invalid.
    pub fn global() -> &'static HearthConfig {
        DEFAULT_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "invalid configuration, using defaults");
                Self::new()
            })
        })
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// Directory holding the key/value files and `config.toml`.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        let raw = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(HearthError::Io(err)),
        };

        let file: ConfigFile = toml::from_str(&raw).map_err(|err| {
            HearthError::Configuration(format!("Invalid config file {}: {err}", path.display()))
        })?;

        if let Some(dir) = file.data_dir {
            self.data_dir = dir;
        }
        if let Some(ms) = file.reply_delay_ms {
            self.reply_delay = Duration::from_millis(ms);
        }
        Ok(())
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Some(dir) = env_var(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = env_var(ENV_REPLY_DELAY_MS) {
            let ms = raw.trim().parse::<u64>().map_err(|_| {
                HearthError::Configuration(format!(
                    "{ENV_REPLY_DELAY_MS} must be a whole number of milliseconds, got '{raw}'"
                ))
            })?;
            self.reply_delay = Duration::from_millis(ms);
        }
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn default_data_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".hearth"))
        .unwrap_or_else(|| PathBuf::from(".hearth"))
}
