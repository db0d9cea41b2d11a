//! Intent classification for assistant input.
//!
//! Classification is a deterministic, ordered rule table over the lowercased
//! text: the first rule that matches decides the intent. Several rules share
//! keywords ("show completed tasks" mentions both "show" and "tasks"), so the
//! order in [`rules::RULES`] is part of the behavior.

pub mod extract;
pub mod rules;

pub use extract::{extract_task_title, infer_priority};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::Priority;

/// Symbolic classification of a user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "kebab-case")]
pub enum Intent {
    ListPendingTasks,
    ListCompletedTasks,
    CreateTask {
        /// `None` when no title could be extracted.
        title: Option<String>,
        priority: Priority,
    },
    DueToday,
    TaskAnalytics,
    Navigate {
        destination: Destination,
    },
    Trivia {
        topic: TriviaTopic,
    },
    Greeting,
    Help,
    Gratitude,
    FeatureQuery,
    JournalQuery,
    PasswordQuery,
    Fallback,
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        match self {
            Self::ListPendingTasks => IntentKind::ListPendingTasks,
            Self::ListCompletedTasks => IntentKind::ListCompletedTasks,
            Self::CreateTask { .. } => IntentKind::CreateTask,
            Self::DueToday => IntentKind::DueToday,
            Self::TaskAnalytics => IntentKind::TaskAnalytics,
            Self::Navigate { .. } => IntentKind::Navigate,
            Self::Trivia { .. } => IntentKind::Trivia,
            Self::Greeting => IntentKind::Greeting,
            Self::Help => IntentKind::Help,
            Self::Gratitude => IntentKind::Gratitude,
            Self::FeatureQuery => IntentKind::FeatureQuery,
            Self::JournalQuery => IntentKind::JournalQuery,
            Self::PasswordQuery => IntentKind::PasswordQuery,
            Self::Fallback => IntentKind::Fallback,
        }
    }
}

/// Parameter-free intent discriminant, used for logging and rule ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum IntentKind {
    ListPendingTasks,
    ListCompletedTasks,
    CreateTask,
    DueToday,
    TaskAnalytics,
    Navigate,
    Trivia,
    Greeting,
    Help,
    Gratitude,
    FeatureQuery,
    JournalQuery,
    PasswordQuery,
    Fallback,
}

/// Pages the router can show.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Destination {
    Dashboard,
    Tasks,
    Notes,
    Journal,
    Writing,
    BucketList,
    Quotes,
    Timeline,
    Vault,
    TimeCapsule,
}

impl Destination {
    pub const ALL: [Destination; 10] = [
        Self::Dashboard,
        Self::Tasks,
        Self::Notes,
        Self::Journal,
        Self::Writing,
        Self::BucketList,
        Self::Quotes,
        Self::Timeline,
        Self::Vault,
        Self::TimeCapsule,
    ];

    /// Router path of the page.
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Tasks => "/",
            Self::Notes => "/notes",
            Self::Journal => "/journal",
            Self::Writing => "/writing",
            Self::BucketList => "/bucket-list",
            Self::Quotes => "/quotes",
            Self::Timeline => "/timeline",
            Self::Vault => "/vault",
            Self::TimeCapsule => "/time-capsule",
        }
    }

    /// Human-readable page name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Tasks => "Tasks",
            Self::Notes => "Notes",
            Self::Journal => "Journal",
            Self::Writing => "Writing",
            Self::BucketList => "Bucket List",
            Self::Quotes => "Quotes",
            Self::Timeline => "Timeline",
            Self::Vault => "Vault",
            Self::TimeCapsule => "Time Capsule",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.path() == path)
    }
}

/// Canned small-talk topics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TriviaTopic {
    MeaningOfLife,
    Weather,
    Cooking,
    Joke,
}

/// Classify free text into an intent.
///
/// Pure and total: every input, including empty or control-character-only
/// strings, yields an intent.
pub fn classify(text: &str) -> Intent {
    let utterance = rules::Utterance::new(text);
    let intent = rules::RULES
        .iter()
        .find_map(|rule| (rule.apply)(&utterance))
        .unwrap_or(Intent::Fallback);
    tracing::debug!(intent = %intent.kind(), "classified input");
    intent
}
