//! Command execution: the side effects behind mutating intents.

pub mod shell;

pub use shell::{LoggingNotifier, LoggingRouter};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{info, warn};

use crate::error::Result;
use crate::intent::{Destination, Intent};
use crate::tasks::TaskBoard;
use crate::types::{NewTask, Priority, Task};

/// Page router of the surrounding application.
///
/// Navigation is fire-and-forget: implementations must not block.
pub trait Router: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Transient toast channel, independent of the chat transcript.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Toast severity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity: Severity::Error,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// What executing an intent changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do for this intent.
    None,
    TaskCreated(Task),
    /// The task could not be written; nothing was stored.
    TaskNotSaved { title: String },
    Navigated(Destination),
}

/// Performs the side effects of mutating intents.
#[derive(Clone)]
pub struct CommandExecutor {
    board: TaskBoard,
    router: Arc<dyn Router>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for CommandExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandExecutor")
            .field("board", &self.board)
            .finish_non_exhaustive()
    }
}

impl CommandExecutor {
    pub fn new(board: TaskBoard, router: Arc<dyn Router>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            board,
            router,
            notifier,
        }
    }

    pub fn with_router(mut self, router: Arc<dyn Router>) -> Self {
        self.router = router;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    /// Run the side effect, if any, for an intent.
    ///
    /// Never fails: a failed task write is reported as
    /// [`Effect::TaskNotSaved`] and logged.
    pub fn execute(&self, intent: &Intent) -> Effect {
        match intent {
            Intent::CreateTask {
                title: Some(title),
                priority,
            } => match self.create_task(title, *priority) {
                Ok(task) => Effect::TaskCreated(task),
                Err(err) => {
                    warn!(error = %err, "assistant task was not saved");
                    Effect::TaskNotSaved {
                        title: title.clone(),
                    }
                }
            },
            Intent::Navigate { destination } => {
                self.navigate(*destination);
                Effect::Navigated(*destination)
            }
            _ => Effect::None,
        }
    }

    /// Prepend a pending task due today with no tags.
    pub fn create_task(&self, title: &str, priority: Priority) -> Result<Task> {
        self.board.add(
            NewTask::builder()
                .title(title)
                .priority(priority)
                .build(),
        )
    }

    /// Ask the router to show a page and toast about it.
    pub fn navigate(&self, destination: Destination) {
        info!(path = destination.path(), "navigating");
        self.router.navigate(destination.path());
        self.notifier.notify(Notification::info(format!(
            "Navigating to {}",
            destination.label()
        )));
    }
}
