//! Task records shared with the Tasks page.

use bon::Builder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

/// Storage format of `Task::due_date`.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Task priority.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A task as persisted under the `tasks` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    /// ISO date (`YYYY-MM-DD`); full ISO timestamps are accepted on read.
    pub due_date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub completed: bool,
    /// Fields written by other pages, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Parsed calendar due date, if the stored value is a valid ISO date.
    pub fn due(&self) -> Option<NaiveDate> {
        let date_part = self.due_date.get(..10).unwrap_or(&self.due_date);
        NaiveDate::parse_from_str(date_part, DUE_DATE_FORMAT).ok()
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due() == Some(date)
    }

    /// Pending and due strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_pending() && self.due().is_some_and(|due| due < today)
    }

    /// Due date as `M/D/YYYY`, or the raw stored value when it does not parse.
    pub fn display_due_date(&self) -> String {
        match self.due() {
            Some(date) => date.format("%-m/%-d/%Y").to_string(),
            None => self.due_date.clone(),
        }
    }
}

/// Input for creating a task.
///
/// ```
/// use hearth::types::{NewTask, Priority};
///
/// let task = NewTask::builder()
///     .title("Buy milk")
///     .priority(Priority::High)
///     .tags(vec!["errands".to_string()])
///     .build();
/// assert_eq!(task.priority, Priority::High);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct NewTask {
    #[builder(into)]
    pub title: String,
    #[builder(into)]
    pub description: Option<String>,
    #[builder(default)]
    pub priority: Priority,
    /// Defaults to today when absent.
    pub due: Option<NaiveDate>,
    #[builder(default)]
    pub tags: Vec<String>,
}
