//! End-to-end tests for assistant turns.

mod common;

use std::sync::Arc;

use pretty_assertions::assert_eq;

use common::{clock, memory_repo, task, today, FailingStore, RecordingNotifier, RecordingRouter};
use hearth::assistant::Assistant;
use hearth::executor::Severity;
use hearth::intent::{Destination, Intent};
use hearth::store::{keys, KeyValueStore, Repository};
use hearth::types::{Priority, Role};

fn assistant() -> (Assistant, Arc<RecordingRouter>, Arc<RecordingNotifier>) {
    let (_, repo) = memory_repo();
    let router = Arc::new(RecordingRouter::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let assistant = Assistant::new(repo, clock())
        .with_router(router.clone())
        .with_notifier(notifier.clone());
    (assistant, router, notifier)
}

#[test]
fn create_task_turn_stores_task_and_confirms() {
    let (mut assistant, _, _) = assistant();

    let reply = assistant.send("please create a task Buy milk for me").unwrap();

    assert_eq!(
        reply.intent,
        Intent::CreateTask {
            title: Some("Buy milk".to_string()),
            priority: Priority::Medium,
        }
    );
    assert!(reply.text.contains("Buy milk"));

    let tasks = assistant.tasks().all();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Buy milk");
    assert_eq!(tasks[0].due(), Some(today()));
    assert!(tasks[0].tags.is_empty());
    assert!(!tasks[0].completed);
}

#[test]
fn created_task_is_prepended() {
    let (_, repo) = memory_repo();
    repo.save_tasks(&[task("1", "Existing", Priority::Low, today(), false)])
        .unwrap();
    let mut assistant = Assistant::new(repo.clone(), clock());

    assistant.send("add task Water plants with high priority").unwrap();

    let tasks = repo.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "Water plants with high priority");
    assert_eq!(tasks[0].priority, Priority::High);
    assert_eq!(tasks[1].title, "Existing");
}

#[test]
fn create_task_without_title_asks_and_creates_nothing() {
    let (mut assistant, _, _) = assistant();

    let reply = assistant.send("add task").unwrap();

    assert!(reply.text.contains("What should I call the task?"));
    assert!(assistant.tasks().all().is_empty());
}

#[test]
fn navigation_routes_and_notifies() {
    let (mut assistant, router, notifier) = assistant();

    let reply = assistant.send("Open my journal").unwrap();

    assert_eq!(
        reply.intent,
        Intent::Navigate {
            destination: Destination::Journal
        }
    );
    assert_eq!(router.paths(), vec!["/journal"]);
    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Navigating to Journal");
    assert_eq!(notifications[0].severity, Severity::Info);
}

#[test]
fn tasks_destination_routes_to_root() {
    let (mut assistant, router, _) = assistant();
    assistant.send("go to my task list").unwrap();
    assert_eq!(router.paths(), vec!["/"]);
}

#[test]
fn turn_appends_user_and_assistant_messages() {
    let (mut assistant, _, _) = assistant();

    let reply = assistant.send("hello").unwrap();

    let messages = assistant.conversations().messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "hello");
    assert_eq!(messages[2].role, Role::Assistant);
    assert_eq!(messages[2].content, reply.text);
    assert_eq!(assistant.conversations().title(), "hello");
}

#[test]
fn blank_input_is_ignored() {
    let (mut assistant, _, _) = assistant();
    for input in ["", "   ", "\n\t"] {
        assert!(assistant.send(input).is_none());
    }
    assert_eq!(assistant.conversations().messages().len(), 1);
}

#[test]
fn reply_lands_in_originating_conversation() {
    let (mut assistant, _, _) = assistant();
    let turn = assistant.begin_turn("show my tasks").unwrap();
    let origin = turn.conversation_id().to_string();

    let other = assistant.conversations_mut().create_conversation();
    let reply = assistant.complete_turn(turn).unwrap();

    assert_eq!(reply.conversation_id, origin);
    assert_eq!(assistant.conversations().active_id(), other);
    assert_eq!(assistant.conversations().messages().len(), 1);
    let origin_messages = &assistant.conversations().get(&origin).unwrap().messages;
    assert_eq!(origin_messages.last().unwrap().content, reply.text);
}

#[test]
fn turn_for_deleted_conversation_has_no_effect() {
    let (mut assistant, router, _) = assistant();
    let turn = assistant.begin_turn("open the vault").unwrap();
    let origin = turn.conversation_id().to_string();

    assistant.conversations_mut().delete_conversation(&origin);

    assert!(assistant.complete_turn(turn).is_none());
    assert!(router.paths().is_empty());
}

#[test]
fn failed_task_write_is_reported_in_chat() {
    let repo = Repository::new(Arc::new(FailingStore::new(keys::TASKS)));
    let mut assistant = Assistant::new(repo.clone(), clock());

    let reply = assistant.send("create a task Buy milk").unwrap();

    assert!(reply.text.contains("couldn't save"));
    assert!(repo.tasks().is_empty());
}

#[test]
fn failed_conversation_write_keeps_chat_working() {
    let repo = Repository::new(Arc::new(FailingStore::new(keys::CONVERSATIONS)));
    let mut assistant = Assistant::new(repo, clock());

    let reply = assistant.send("hello").unwrap();

    assert_eq!(reply.intent, Intent::Greeting);
    assert_eq!(assistant.conversations().messages().len(), 3);
}

#[test]
fn corrupt_task_snapshot_reads_as_empty() {
    let (store, repo) = memory_repo();
    KeyValueStore::set(store.as_ref(), keys::TASKS, "{{{").unwrap();
    let mut assistant = Assistant::new(repo, clock());

    let reply = assistant.send("show my tasks").unwrap();
    assert!(reply.text.contains("don't have any tasks"));
    let stats = assistant.send("stats").unwrap();
    assert!(stats.text.contains("Total tasks: 0"));
}

#[test]
fn created_task_keeps_unrecognized_entries() {
    let (store, repo) = memory_repo();
    let stored = serde_json::json!([
        {
            "id": "1",
            "title": "Pay rent",
            "priority": "high",
            "dueDate": "2025-03-14",
            "createdAt": "2025-03-01"
        },
        {"id": "2", "title": "Call mom", "priority": "urgent", "dueDate": "2025-03-14"},
        {"id": "3", "title": "No due date"}
    ]);
    KeyValueStore::set(store.as_ref(), keys::TASKS, &stored.to_string()).unwrap();
    let mut assistant = Assistant::new(repo, clock());

    let reply = assistant.send("create a task Buy milk").unwrap();
    assert!(reply.text.contains("Buy milk"));

    let raw = KeyValueStore::get(store.as_ref(), keys::TASKS).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["title"], "Buy milk");
    assert_eq!(entries[1]["title"], "Pay rent");
    assert_eq!(entries[1]["createdAt"], "2025-03-01");
    assert_eq!(entries[2], stored[1]);
    assert_eq!(entries[3], stored[2]);
}

#[test]
fn unreadable_task_collection_is_not_overwritten() {
    let (store, repo) = memory_repo();
    KeyValueStore::set(store.as_ref(), keys::TASKS, "{{{").unwrap();
    let mut assistant = Assistant::new(repo, clock());

    let reply = assistant.send("create a task Buy milk").unwrap();

    assert!(reply.text.contains("couldn't save"));
    assert_eq!(
        KeyValueStore::get(store.as_ref(), keys::TASKS).unwrap().as_deref(),
        Some("{{{")
    );
}

#[test]
fn hostile_input_never_panics() {
    let (mut assistant, _, _) = assistant();
    let long = "create a task ".to_string() + &"z".repeat(50_000);
    for input in [
        long.as_str(),
        "\u{0}\u{1}\u{2}",
        "\u{202e}show tasks",
        "add task \u{7f}",
        "🙂🙂🙂",
    ] {
        let reply = assistant.send(input).unwrap();
        assert!(!reply.text.is_empty());
    }
}
