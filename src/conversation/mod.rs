//! Conversation lifecycle: create, load, delete, rename and append.
//!
//! The manager owns the in-memory conversation set and the active pointer.
//! Every mutation applies in memory first and then writes the affected key
//! through the [`Repository`]; a failed write is logged and the in-memory
//! state stays authoritative.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::store::Repository;
use crate::types::{Conversation, ConversationSet, Message, Role, DEFAULT_TITLE};
use crate::util::ids::IdSequence;
use crate::util::Clock;

/// Owns the conversation set and which conversation is active.
///
/// After [`ConversationManager::start`] the active id always resolves to a
/// conversation in the set.
pub struct ConversationManager {
    repo: Repository,
    clock: Arc<dyn Clock>,
    conversations: ConversationSet,
    active_id: String,
    ids: IdSequence,
    show_list: bool,
}

impl std::fmt::Debug for ConversationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationManager")
            .field("conversations", &self.conversations.len())
            .field("active_id", &self.active_id)
            .field("show_list", &self.show_list)
            .finish_non_exhaustive()
    }
}

impl ConversationManager {
    /// Restore the stored conversations and active pointer.
    ///
    /// Falls back to a fresh conversation when the pointer is missing,
    /// dangling or unreadable.
    pub fn start(repo: Repository, clock: Arc<dyn Clock>) -> Self {
        let conversations = repo.conversations();
        let stored_active = repo.active_conversation_id();
        let ids = IdSequence::after(conversations.iter().map(|c| c.id.as_str()));

        let mut manager = Self {
            repo,
            clock,
            conversations,
            active_id: String::new(),
            ids,
            show_list: false,
        };

        match stored_active.filter(|id| manager.conversations.contains(id)) {
            Some(id) => {
                debug!(conversation_id = %id, "restored active conversation");
                manager.active_id = id;
            }
            None => {
                manager.create_conversation();
            }
        }
        manager
    }

    /// Start a new conversation and make it active. Returns its id.
    ///
    /// Ids are never reused within a manager, so a reply still pending for a
    /// deleted conversation cannot land in its replacement.
    pub fn create_conversation(&mut self) -> String {
        let conversations = &self.conversations;
        let id = self
            .ids
            .next(self.clock.now(), |candidate| conversations.contains(candidate));
        self.conversations
            .prepend(Conversation::new(id.clone(), self.clock.now()));
        self.persist_conversations();

        self.active_id = id.clone();
        self.persist_active_id();
        self.show_list = false;

        info!(conversation_id = %id, "conversation created");
        id
    }

    /// Make an existing conversation active.
    ///
    /// Unknown ids change nothing and return `false`.
    pub fn load_conversation(&mut self, id: &str) -> bool {
        if !self.conversations.contains(id) {
            debug!(conversation_id = %id, "ignoring load of unknown conversation");
            return false;
        }
        self.active_id = id.to_string();
        self.persist_active_id();
        true
    }

    /// Remove a conversation.
    ///
    /// Deleting the active conversation activates the newest remaining one,
    /// or a fresh conversation when none remain. Returns `false` for unknown
    /// ids.
    pub fn delete_conversation(&mut self, id: &str) -> bool {
        if self.conversations.remove(id).is_none() {
            return false;
        }
        self.persist_conversations();
        info!(conversation_id = %id, "conversation deleted");

        if self.active_id == id {
            match self.conversations.newest().map(|c| c.id.clone()) {
                Some(next) => {
                    self.load_conversation(&next);
                }
                None => {
                    self.create_conversation();
                }
            }
        }
        true
    }

    /// Rename the active conversation.
    ///
    /// A blank title restores the default and re-enables the automatic title.
    pub fn rename_conversation(&mut self, title: &str) {
        let title = title.trim();
        let Some(conversation) = self.conversations.get_mut(&self.active_id) else {
            return;
        };
        if title.is_empty() {
            conversation.title = DEFAULT_TITLE.to_string();
            conversation.renamed = false;
        } else {
            conversation.title = title.to_string();
            conversation.renamed = true;
        }
        self.persist_conversations();
    }

    /// Append a message to the active conversation.
    pub fn append_message(&mut self, role: Role, content: impl Into<String>) {
        let message = Message {
            role,
            content: content.into(),
        };
        let active = self.active_id.clone();
        self.append_to(&active, message);
    }

    /// Append a message to a specific conversation, active or not.
    ///
    /// Returns `false` when the conversation no longer exists.
    pub fn append_to(&mut self, conversation_id: &str, message: Message) -> bool {
        let Some(conversation) = self.conversations.get_mut(conversation_id) else {
            debug!(conversation_id, "dropping message for missing conversation");
            return false;
        };
        let is_user = message.role == Role::User;
        conversation.messages.push(message);
        if is_user && conversation.apply_auto_title() {
            debug!(conversation_id, title = %conversation.title, "conversation auto-titled");
        }
        self.persist_conversations();
        true
    }

    pub fn active(&self) -> Option<&Conversation> {
        self.conversations.get(&self.active_id)
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// Messages of the active conversation.
    pub fn messages(&self) -> &[Message] {
        self.active().map(|c| c.messages.as_slice()).unwrap_or_default()
    }

    /// Title of the active conversation.
    pub fn title(&self) -> &str {
        self.active().map(|c| c.title.as_str()).unwrap_or(DEFAULT_TITLE)
    }

    /// All conversations, newest first.
    pub fn conversations(&self) -> &ConversationSet {
        &self.conversations
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.get(id)
    }

    /// Whether the conversation list panel is open.
    pub fn show_list(&self) -> bool {
        self.show_list
    }

    pub fn set_show_list(&mut self, show: bool) {
        self.show_list = show;
    }

    fn persist_conversations(&self) {
        if let Err(err) = self.repo.save_conversations(&self.conversations) {
            error!(error = %err, "failed to persist conversations");
        }
    }

    fn persist_active_id(&self) {
        if let Err(err) = self.repo.save_active_conversation_id(&self.active_id) {
            error!(error = %err, "failed to persist active conversation");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::FixedClock;

    fn manager() -> ConversationManager {
        let clock = FixedClock::on(2025, 3, 14).expect("valid date");
        ConversationManager::start(Repository::in_memory(), Arc::new(clock))
    }

    #[test]
    fn start_on_empty_store_creates_one_conversation() {
        let manager = manager();
        assert_eq!(manager.conversations().len(), 1);
        assert_eq!(manager.title(), DEFAULT_TITLE);
        assert_eq!(manager.messages().len(), 1);
    }

    #[test]
    fn create_closes_the_conversation_list() {
        let mut manager = manager();
        manager.set_show_list(true);
        manager.create_conversation();
        assert!(!manager.show_list());
    }

    #[test]
    fn blank_rename_restores_automatic_title() {
        let mut manager = manager();
        manager.rename_conversation("Groceries");
        assert!(manager.active().is_some_and(|c| c.renamed));

        manager.rename_conversation("   ");
        assert_eq!(manager.title(), DEFAULT_TITLE);
        assert!(manager.active().is_some_and(|c| !c.renamed));
    }

    #[test]
    fn replacement_conversation_gets_a_fresh_id() {
        let mut manager = manager();
        let first = manager.active_id().to_string();
        assert!(manager.delete_conversation(&first));
        assert_ne!(manager.active_id(), first);
    }

    #[test]
    fn append_to_missing_conversation_is_ignored() {
        let mut manager = manager();
        assert!(!manager.append_to("missing", Message::user("hello")));
    }
}
