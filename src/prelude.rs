//! Convenience re-exports for common use.

pub use crate::assistant::{Assistant, PendingTurn, Reply, ReplyScheduler};
pub use crate::config::HearthConfig;
pub use crate::conversation::ConversationManager;
pub use crate::error::{HearthError, Result};
pub use crate::executor::{CommandExecutor, Effect, Notification, Notifier, Router, Severity};
pub use crate::gate::PasswordGate;
pub use crate::intent::{classify, Destination, Intent, IntentKind, TriviaTopic};
pub use crate::response::{respond, TaskStats};
pub use crate::store::{FileStore, KeyValueStore, MemoryStore, Repository};
pub use crate::tasks::TaskBoard;
pub use crate::types::{Conversation, ConversationSet, Message, NewTask, Priority, Role, Task};
pub use crate::util::{Clock, FixedClock, SystemClock};
