//! Typed access to the collections on the persistence surface.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{KeyValueStore, MemoryStore};
use crate::error::Result;
use crate::types::{ConversationSet, Task};

/// Key names on the persistence surface.
pub mod keys {
    pub const TASKS: &str = "tasks";
    pub const CONVERSATIONS: &str = "assistantConversations";
    pub const ACTIVE_CONVERSATION: &str = "assistantActiveConversation";
    pub const PASSWORD: &str = "appPassword";
    pub const PASSWORD_CONFIGURED: &str = "passwordConfigured";
}

/// One entry of the stored task collection.
///
/// Entries that do not fit [`Task`] are kept as raw JSON so a rewrite of the
/// collection leaves them exactly as another page stored them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskRecord {
    Task(Task),
    Unrecognized(serde_json::Value),
}

impl TaskRecord {
    /// The entry's id, including ids of unrecognized entries.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Task(task) => Some(&task.id),
            Self::Unrecognized(value) => value.get("id").and_then(|id| id.as_str()),
        }
    }

    pub fn as_task(&self) -> Option<&Task> {
        match self {
            Self::Task(task) => Some(task),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn as_task_mut(&mut self) -> Option<&mut Task> {
        match self {
            Self::Task(task) => Some(task),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Typed read/write per collection over a shared [`KeyValueStore`].
///
/// Reads never fail: a missing key, an unreadable store or malformed JSON all
/// read as the empty value. Writes serialize the whole collection and issue a
/// single `set`.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository").field("store", &"..").finish()
    }
}

impl Repository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Repository over a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Every stored task that parses. Unrecognized entries are skipped.
    pub fn tasks(&self) -> Vec<Task> {
        self.read_json::<Vec<TaskRecord>>(keys::TASKS)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|record| match record {
                TaskRecord::Task(task) => Some(task),
                TaskRecord::Unrecognized(_) => None,
            })
            .collect()
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        self.write_json(keys::TASKS, &tasks)
    }

    /// The stored task collection for a read-modify-write.
    ///
    /// Unlike [`Repository::tasks`] this fails when the store cannot be read
    /// or the value is not a JSON array, so a caller never writes a new
    /// collection over data it could not see.
    pub fn task_records(&self) -> Result<Vec<TaskRecord>> {
        match self.store.get(keys::TASKS)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn save_task_records(&self, records: &[TaskRecord]) -> Result<()> {
        self.write_json(keys::TASKS, &records)
    }

    pub fn conversations(&self) -> ConversationSet {
        let mut set: ConversationSet = self.read_json(keys::CONVERSATIONS).unwrap_or_default();
        set.dedup();
        set
    }

    pub fn save_conversations(&self, conversations: &ConversationSet) -> Result<()> {
        self.write_json(keys::CONVERSATIONS, conversations)
    }

    pub fn active_conversation_id(&self) -> Option<String> {
        self.read_json::<String>(keys::ACTIVE_CONVERSATION)
            .filter(|id| !id.is_empty())
    }

    pub fn save_active_conversation_id(&self, id: &str) -> Result<()> {
        self.write_json(keys::ACTIVE_CONVERSATION, &id)
    }

    pub fn password(&self) -> Option<String> {
        self.read_json(keys::PASSWORD)
    }

    /// Stores the gate password and marks the gate configured.
    pub fn save_password(&self, password: &str) -> Result<()> {
        self.write_json(keys::PASSWORD, &password)?;
        self.write_json(keys::PASSWORD_CONFIGURED, &true)
    }

    pub fn password_configured(&self) -> bool {
        self.read_json(keys::PASSWORD_CONFIGURED).unwrap_or(false)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key, error = %err, "store read failed, treating as empty");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "stored value is malformed, treating as empty");
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }
}
