use std::fs;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::config::HearthConfig;
use crate::error::{HearthError, Result};

/// File-backed store: one `<key>.json` file per key in a directory.
///
/// # Example
/// ```no_run
/// use hearth::store::{FileStore, KeyValueStore};
///
/// let store = FileStore::new("/tmp/hearth-data");
/// store.set("tasks", "[]")?;
/// assert_eq!(store.get("tasks")?.as_deref(), Some("[]"));
/// # Ok::<(), hearth::error::HearthError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Store rooted at the configured data directory.
    pub fn from_config(config: &HearthConfig) -> Self {
        Self::new(config.data_dir())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", normalize_key(key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(HearthError::Io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        let path = self.value_path(key);
        // Write-then-rename keeps a reader from ever seeing half a value.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(HearthError::Io(err)),
        }
    }
}

/// Map an arbitrary key onto a safe file stem.
fn normalize_key(key: &str) -> String {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return "_".to_string();
    }
    trimmed
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}
