//! The assistant: one chat turn from user text to stored reply.
//!
//! A turn has two halves. [`Assistant::begin_turn`] records the user message
//! right away; [`Assistant::complete_turn`] classifies, executes and appends
//! the reply to the conversation the message came from. The gap between the
//! two is where the "thinking" delay lives (see [`ReplyScheduler`]).

pub mod scheduler;

pub use scheduler::ReplyScheduler;

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::conversation::ConversationManager;
use crate::executor::{CommandExecutor, Effect, LoggingNotifier, LoggingRouter, Notifier, Router};
use crate::intent::{classify, Intent};
use crate::response::{respond, task_not_saved};
use crate::store::Repository;
use crate::tasks::TaskBoard;
use crate::types::{Message, Role};
use crate::util::Clock;

/// A user message that has been recorded and awaits its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    conversation_id: String,
    text: String,
}

impl PendingTurn {
    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An assistant reply and where it landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub conversation_id: String,
    pub intent: Intent,
    pub text: String,
}

/// Rule-based assistant over the shared repository.
pub struct Assistant {
    conversations: ConversationManager,
    executor: CommandExecutor,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("conversations", &self.conversations)
            .field("executor", &self.executor)
            .finish_non_exhaustive()
    }
}

impl Assistant {
    /// Restore conversations from `repo`. Navigation and notifications go to
    /// the log until replaced with [`Assistant::with_router`] and
    /// [`Assistant::with_notifier`].
    pub fn new(repo: Repository, clock: Arc<dyn Clock>) -> Self {
        let board = TaskBoard::new(repo.clone(), clock.clone());
        Self {
            conversations: ConversationManager::start(repo, clock.clone()),
            executor: CommandExecutor::new(
                board,
                Arc::new(LoggingRouter),
                Arc::new(LoggingNotifier),
            ),
            clock,
        }
    }

    /// Set the page router.
    pub fn with_router(mut self, router: Arc<dyn Router>) -> Self {
        self.executor = self.executor.with_router(router);
        self
    }

    /// Set the notification channel.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.executor = self.executor.with_notifier(notifier);
        self
    }

    pub fn conversations(&self) -> &ConversationManager {
        &self.conversations
    }

    pub fn conversations_mut(&mut self) -> &mut ConversationManager {
        &mut self.conversations
    }

    /// Task board shared with the executor.
    pub fn tasks(&self) -> &TaskBoard {
        self.executor.board()
    }

    /// Record a user message in the active conversation.
    ///
    /// Blank input is ignored and yields `None`.
    pub fn begin_turn(&mut self, text: &str) -> Option<PendingTurn> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.conversations.append_message(Role::User, text);
        let turn = PendingTurn {
            conversation_id: self.conversations.active_id().to_string(),
            text: text.to_string(),
        };
        debug!(conversation_id = %turn.conversation_id, "turn started");
        Some(turn)
    }

    /// Classify, execute and reply to a recorded message.
    ///
    /// Returns `None` without side effects when the conversation was deleted
    /// in the meantime.
    pub fn complete_turn(&mut self, turn: PendingTurn) -> Option<Reply> {
        if self.conversations.get(&turn.conversation_id).is_none() {
            debug!(conversation_id = %turn.conversation_id, "turn dropped");
            return None;
        }

        let intent = classify(&turn.text);
        let text = match self.executor.execute(&intent) {
            Effect::TaskNotSaved { title } => task_not_saved(&title),
            _ => respond(&intent, &self.tasks().all(), self.clock.today()),
        };

        self.conversations
            .append_to(&turn.conversation_id, Message::assistant(text.clone()));
        debug!(
            conversation_id = %turn.conversation_id,
            intent = %intent.kind(),
            "turn completed"
        );
        Some(Reply {
            conversation_id: turn.conversation_id,
            intent,
            text,
        })
    }

    /// Run a whole turn without delay.
    pub fn send(&mut self, text: &str) -> Option<Reply> {
        let turn = self.begin_turn(text)?;
        self.complete_turn(turn)
    }
}
