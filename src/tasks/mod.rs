//! Task board: the Tasks page operations over the shared task collection.
//!
//! Both the Tasks page and the assistant create tasks through [`TaskBoard`],
//! so tasks from either source are indistinguishable once stored.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{HearthError, Result};
use crate::store::{Repository, TaskRecord};
use crate::types::{NewTask, Task, DUE_DATE_FORMAT};
use crate::util::ids::time_based_id;
use crate::util::Clock;

/// Read-modify-write operations on the task collection.
///
/// Every mutation reads the current collection, applies one change and writes
/// the collection back with a single store write. Entries another page stored
/// in a shape this board does not know are written back untouched, and a
/// collection that cannot be read at all is never overwritten.
#[derive(Clone)]
pub struct TaskBoard {
    repo: Repository,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TaskBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskBoard")
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

impl TaskBoard {
    pub fn new(repo: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Snapshot of every task, newest first.
    pub fn all(&self) -> Vec<Task> {
        self.repo.tasks()
    }

    pub fn get(&self, id: &str) -> Option<Task> {
        self.all().into_iter().find(|task| task.id == id)
    }

    /// Prepend a new pending task.
    ///
    /// The title must not be blank. Due date defaults to today; tags are
    /// trimmed, blank tags dropped and duplicates removed.
    pub fn add(&self, new_task: NewTask) -> Result<Task> {
        let title = new_task.title.trim();
        if title.is_empty() {
            return Err(HearthError::InvalidArgument(
                "task title must not be empty".to_string(),
            ));
        }

        let mut records = self.repo.task_records()?;
        let id = time_based_id(self.clock.now(), |candidate| {
            records.iter().any(|record| record.id() == Some(candidate))
        });
        let due = new_task.due.unwrap_or_else(|| self.clock.today());

        let task = Task {
            id,
            title: title.to_string(),
            description: new_task
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            priority: new_task.priority,
            due_date: due.format(DUE_DATE_FORMAT).to_string(),
            tags: normalize_tags(new_task.tags),
            completed: false,
            extra: Default::default(),
        };

        records.insert(0, TaskRecord::Task(task.clone()));
        self.repo.save_task_records(&records)?;
        info!(task_id = %task.id, priority = %task.priority, "task created");
        Ok(task)
    }

    /// Flip a task between pending and completed.
    pub fn toggle(&self, id: &str) -> Result<Task> {
        let mut records = self.repo.task_records()?;
        let task = records
            .iter_mut()
            .filter_map(TaskRecord::as_task_mut)
            .find(|task| task.id == id)
            .ok_or_else(|| HearthError::NotFound(format!("task {id}")))?;
        task.completed = !task.completed;
        let updated = task.clone();
        self.repo.save_task_records(&records)?;
        Ok(updated)
    }

    /// Delete a task. Returns the removed task, or `None` if it did not exist.
    pub fn remove(&self, id: &str) -> Result<Option<Task>> {
        let mut records = self.repo.task_records()?;
        let Some(index) = records
            .iter()
            .position(|record| record.as_task().is_some_and(|task| task.id == id))
        else {
            return Ok(None);
        };
        let removed = records.remove(index);
        self.repo.save_task_records(&records)?;
        Ok(match removed {
            TaskRecord::Task(task) => Some(task),
            TaskRecord::Unrecognized(_) => None,
        })
    }

    /// Pending tasks due today.
    pub fn due_today(&self) -> Vec<Task> {
        let today = self.clock.today();
        self.filtered(|task| task.is_pending() && task.is_due_on(today))
    }

    /// Pending tasks not due today (including overdue and undated ones).
    pub fn upcoming(&self) -> Vec<Task> {
        let today = self.clock.today();
        self.filtered(|task| task.is_pending() && !task.is_due_on(today))
    }

    pub fn completed(&self) -> Vec<Task> {
        self.filtered(|task| task.completed)
    }

    /// Pending tasks due before today.
    pub fn overdue(&self) -> Vec<Task> {
        let today = self.clock.today();
        self.filtered(|task| task.is_overdue(today))
    }

    /// Every task due on `date`, completed or not.
    pub fn on_date(&self, date: NaiveDate) -> Vec<Task> {
        self.filtered(|task| task.is_due_on(date))
    }

    fn filtered(&self, keep: impl Fn(&Task) -> bool) -> Vec<Task> {
        self.all().into_iter().filter(|task| keep(task)).collect()
    }
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty() && seen.insert(tag.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_trimmed_and_deduplicated() {
        let tags = vec![
            " work ".to_string(),
            "work".to_string(),
            "".to_string(),
            "health".to_string(),
        ];
        assert_eq!(normalize_tags(tags), vec!["work", "health"]);
    }
}
