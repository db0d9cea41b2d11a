//! Conversations and the ordered conversation set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::{Message, Role};

/// Title given to every fresh conversation.
pub const DEFAULT_TITLE: &str = "New conversation";

/// Seed message of every fresh conversation.
pub const WELCOME_MESSAGE: &str =
    "Hi there! I'm your personal AI assistant. How can I help you today?";

/// Characters of the first user message kept by the automatic title.
pub const TITLE_PREVIEW_CHARS: usize = 30;

/// A named, ordered sequence of chat messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    /// Creation time.
    pub date: DateTime<Utc>,
    /// Set once the user picks a title; disables the automatic title.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub renamed: bool,
}

impl Conversation {
    /// Fresh conversation with the default title and the welcome message.
    pub fn new(id: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: DEFAULT_TITLE.to_string(),
            messages: vec![Message::assistant(WELCOME_MESSAGE)],
            date,
            renamed: false,
        }
    }

    pub fn user_message_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|message| message.role == Role::User)
            .count()
    }

    pub fn has_default_title(&self) -> bool {
        self.title == DEFAULT_TITLE
    }

    /// Retitle from the first user message when nothing else named it yet.
    ///
    /// Returns `true` when the title changed.
    pub(crate) fn apply_auto_title(&mut self) -> bool {
        if self.renamed || !self.has_default_title() || self.user_message_count() != 1 {
            return false;
        }
        let Some(first) = self.messages.iter().find(|m| m.role == Role::User) else {
            return false;
        };
        let preview = title_preview(&first.content);
        if preview.is_empty() {
            return false;
        }
        self.title = preview;
        true
    }
}

/// Title derived from a message: first 30 characters plus `...` when longer.
pub fn title_preview(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.chars().count() > TITLE_PREVIEW_CHARS {
        let head: String = trimmed.chars().take(TITLE_PREVIEW_CHARS).collect();
        format!("{}...", head.trim_end())
    } else {
        trimmed.to_string()
    }
}

/// Conversations ordered newest first, unique by id.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ConversationSet {
    conversations: Vec<Conversation>,
}

impl ConversationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }

    /// Newest conversation, i.e. the first in display order.
    pub fn newest(&self) -> Option<&Conversation> {
        self.conversations.first()
    }

    /// Insert at the front. Replaces an existing conversation with the same id.
    pub fn prepend(&mut self, conversation: Conversation) {
        self.conversations.retain(|c| c.id != conversation.id);
        self.conversations.insert(0, conversation);
    }

    pub fn remove(&mut self, id: &str) -> Option<Conversation> {
        let index = self.conversations.iter().position(|c| c.id == id)?;
        Some(self.conversations.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.conversations.iter().map(|c| c.id.as_str()).collect()
    }

    /// Drop later duplicates of an id, keeping display order.
    pub(crate) fn dedup(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.conversations.retain(|c| seen.insert(c.id.clone()));
    }
}

impl FromIterator<Conversation> for ConversationSet {
    fn from_iter<I: IntoIterator<Item = Conversation>>(iter: I) -> Self {
        let mut set = Self {
            conversations: iter.into_iter().collect(),
        };
        set.dedup();
        set
    }
}
