//! Shared test helpers: recording collaborators, a failing store and fixtures.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use hearth::error::{HearthError, Result};
use hearth::executor::{Notification, Notifier, Router};
use hearth::store::{KeyValueStore, MemoryStore, Repository};
use hearth::types::{Priority, Task};
use hearth::util::FixedClock;

/// Router that remembers every requested path.
#[derive(Debug, Default)]
pub struct RecordingRouter {
    paths: Mutex<Vec<String>>,
}

impl RecordingRouter {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Router for RecordingRouter {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// Notifier that remembers every notification.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|notification| notification.title)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// In-memory store whose writes to one key always fail.
pub struct FailingStore {
    inner: MemoryStore,
    failing_key: &'static str,
}

impl FailingStore {
    pub fn new(failing_key: &'static str) -> Self {
        Self {
            inner: MemoryStore::new(),
            failing_key,
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if key == self.failing_key {
            return Err(HearthError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only volume",
            )));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }
}

/// The date every fixture clock starts on.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

/// Clock fixed at midday on [`today`].
pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::on(2025, 3, 14).unwrap())
}

/// Repository over a fresh memory store, plus the store itself.
pub fn memory_repo() -> (Arc<MemoryStore>, Repository) {
    let store = Arc::new(MemoryStore::new());
    (store.clone(), Repository::new(store))
}

pub fn task(id: &str, title: &str, priority: Priority, due: NaiveDate, completed: bool) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        priority,
        due_date: due.format("%Y-%m-%d").to_string(),
        tags: vec![],
        completed,
        extra: Default::default(),
    }
}
