//! Delayed replies, serialized per conversation.
//!
//! Each submission records the user message immediately and spawns a task
//! that waits out the thinking delay, then for the previous reply of the same
//! conversation, and finally completes the turn. Deleting a conversation
//! cancels every reply still pending for it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{Assistant, Reply};
use crate::config::HearthConfig;

#[derive(Debug)]
struct ReplyQueue {
    /// Distinguishes this queue from any later queue under the same id.
    generation: u64,
    cancel: CancellationToken,
    /// Resolves when the most recently submitted reply finishes.
    tail: Option<oneshot::Receiver<()>>,
    in_flight: usize,
}

impl ReplyQueue {
    fn new(generation: u64) -> Self {
        Self {
            generation,
            cancel: CancellationToken::new(),
            tail: None,
            in_flight: 0,
        }
    }
}

type Queues = Arc<Mutex<HashMap<String, ReplyQueue>>>;

/// Runs assistant turns on tokio tasks after the thinking delay.
///
/// Replies land in the conversation the message was sent from, in
/// submission order, even if the user switched conversations meanwhile.
#[derive(Clone)]
pub struct ReplyScheduler {
    assistant: Arc<Mutex<Assistant>>,
    delay: Duration,
    queues: Queues,
    generations: Arc<AtomicU64>,
}

impl std::fmt::Debug for ReplyScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyScheduler")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl ReplyScheduler {
    pub fn new(assistant: Assistant, delay: Duration) -> Self {
        Self {
            assistant: Arc::new(Mutex::new(assistant)),
            delay,
            queues: Arc::new(Mutex::new(HashMap::new())),
            generations: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Scheduler using the configured reply delay.
    pub fn from_config(assistant: Assistant, config: &HearthConfig) -> Self {
        Self::new(assistant, config.reply_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record `text` in the active conversation and schedule the reply.
    ///
    /// Blank input is ignored and yields `None`. The handle resolves to
    /// `None` when the reply was cancelled. Must be called within a tokio
    /// runtime.
    pub fn submit(&self, text: &str) -> Option<JoinHandle<Option<Reply>>> {
        let turn = self.lock_assistant().begin_turn(text)?;
        let conversation_id = turn.conversation_id().to_string();

        let (done_tx, done_rx) = oneshot::channel::<()>();
        let (generation, cancel, previous) = {
            let mut queues = lock(&self.queues);
            let queue = queues
                .entry(conversation_id.clone())
                .or_insert_with(|| {
                    ReplyQueue::new(self.generations.fetch_add(1, Ordering::Relaxed))
                });
            queue.in_flight += 1;
            (
                queue.generation,
                queue.cancel.clone(),
                queue.tail.replace(done_rx),
            )
        };

        let assistant = Arc::clone(&self.assistant);
        let queues = Arc::clone(&self.queues);
        let delay = self.delay;

        Some(tokio::spawn(async move {
            let reply = async {
                tokio::select! {
                    _ = cancel.cancelled() => return None,
                    _ = time::sleep(delay) => {}
                }
                if let Some(previous) = previous {
                    tokio::select! {
                        _ = cancel.cancelled() => return None,
                        // Err means the previous task ended without a reply.
                        _ = previous => {}
                    }
                }
                if cancel.is_cancelled() {
                    return None;
                }
                assistant
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .complete_turn(turn)
            }
            .await;

            if reply.is_none() {
                debug!(conversation_id = %conversation_id, "reply cancelled");
            }
            finish(&queues, &conversation_id, generation);
            drop(done_tx);
            reply
        }))
    }

    /// Delete a conversation and cancel its pending replies.
    pub fn delete_conversation(&self, id: &str) -> bool {
        if let Some(queue) = lock(&self.queues).remove(id) {
            queue.cancel.cancel();
        }
        self.lock_assistant().conversations_mut().delete_conversation(id)
    }

    /// Whether a reply is still pending for the conversation.
    pub fn is_thinking(&self, conversation_id: &str) -> bool {
        lock(&self.queues)
            .get(conversation_id)
            .is_some_and(|queue| queue.in_flight > 0)
    }

    /// Run `f` with exclusive access to the assistant.
    pub fn with_assistant<R>(&self, f: impl FnOnce(&mut Assistant) -> R) -> R {
        f(&mut self.lock_assistant())
    }

    fn lock_assistant(&self) -> std::sync::MutexGuard<'_, Assistant> {
        self.assistant
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn lock(queues: &Queues) -> std::sync::MutexGuard<'_, HashMap<String, ReplyQueue>> {
    queues.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn finish(queues: &Queues, conversation_id: &str, generation: u64) {
    let mut queues = lock(queues);
    if let Some(queue) = queues
        .get_mut(conversation_id)
        .filter(|queue| queue.generation == generation)
    {
        queue.in_flight = queue.in_flight.saturating_sub(1);
        if queue.in_flight == 0 {
            queues.remove(conversation_id);
        }
    }
}
