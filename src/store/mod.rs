//! Persistence surface: a flat key/value store of JSON strings.
//!
//! Every collection the organizer keeps (tasks, conversations, the password
//! gate) lives under one string key. [`Repository`] wraps a store with typed
//! accessors so callers never touch key names directly.

pub mod file;
pub mod memory;
pub mod repository;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::{keys, Repository, TaskRecord};

use crate::error::Result;

/// Storage abstraction for the organizer's key/value data.
///
/// Values are opaque strings (JSON by convention). Implementations must make
/// each `set` all-or-nothing for its key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}
