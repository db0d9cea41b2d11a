//! Tests for intent classification and parameter extraction.

use pretty_assertions::assert_eq;

use hearth::intent::{
    classify, extract_task_title, infer_priority, Destination, Intent, IntentKind, TriviaTopic,
};
use hearth::types::Priority;

#[test]
fn show_and_tasks_without_completed_lists_pending() {
    for text in [
        "show tasks",
        "Show my tasks",
        "can you SHOW me all the TASKS I have?",
        "tasks, show them",
        "show what tasks are left",
    ] {
        assert_eq!(classify(text), Intent::ListPendingTasks, "input {text:?}");
    }
}

#[test]
fn completed_tasks_wins_over_pending_listing() {
    for text in [
        "completed tasks",
        "Show completed tasks",
        "SHOW ME MY COMPLETED TASKS",
        "which completed tasks do I have",
        "show tasks I have completed",
    ] {
        assert_eq!(classify(text), Intent::ListCompletedTasks, "input {text:?}");
    }
}

#[test]
fn create_task_extracts_title_and_priority() {
    assert_eq!(
        classify("Create a task Finish report with high priority"),
        Intent::CreateTask {
            title: Some("Finish report with high priority".to_string()),
            priority: Priority::High,
        }
    );
    assert_eq!(
        classify("add a todo: add task water the plants please"),
        Intent::CreateTask {
            title: Some("water the plants".to_string()),
            priority: Priority::Medium,
        }
    );
}

#[test]
fn create_task_without_title_keeps_intent() {
    assert_eq!(
        classify("add task"),
        Intent::CreateTask {
            title: None,
            priority: Priority::Medium,
        }
    );
}

#[test]
fn extract_task_title_examples() {
    assert_eq!(
        extract_task_title("please create a task Buy milk for me").as_deref(),
        Some("Buy milk")
    );
    assert_eq!(
        extract_task_title("New task call mom!").as_deref(),
        Some("call mom")
    );
    assert_eq!(
        extract_task_title("create task   Renew passport.   ").as_deref(),
        Some("Renew passport")
    );
    assert_eq!(extract_task_title("add task"), None);
    assert_eq!(extract_task_title("add task thanks"), None);
    assert_eq!(extract_task_title("nothing to see here"), None);
}

#[test]
fn priority_inference_prefers_high() {
    assert_eq!(infer_priority("high and low"), Priority::High);
    assert_eq!(infer_priority("LOW priority"), Priority::Low);
    assert_eq!(infer_priority("whenever"), Priority::Medium);
}

#[test]
fn due_today_and_analytics() {
    assert_eq!(classify("What's due today?"), Intent::DueToday);
    assert_eq!(classify("any deadlines coming up"), Intent::DueToday);
    assert_eq!(classify("give me my stats"), Intent::TaskAnalytics);
    assert_eq!(classify("task statistics"), Intent::TaskAnalytics);
}

#[test]
fn navigation_picks_first_matching_destination() {
    let cases = [
        ("go to dashboard", Destination::Dashboard),
        ("take me home, navigate there", Destination::Dashboard),
        ("open notes", Destination::Notes),
        ("Open my Journal", Destination::Journal),
        ("go to writing", Destination::Writing),
        ("open bucket list", Destination::BucketList),
        ("go to quotes", Destination::Quotes),
        ("navigate to timeline", Destination::Timeline),
        ("open the vault", Destination::Vault),
        ("open time capsule", Destination::TimeCapsule),
    ];
    for (text, destination) in cases {
        assert_eq!(classify(text), Intent::Navigate { destination }, "input {text:?}");
    }
}

#[test]
fn trivia_requires_question_phrase() {
    assert_eq!(
        classify("what is the meaning of life"),
        Intent::Trivia {
            topic: TriviaTopic::MeaningOfLife
        }
    );
    assert_eq!(
        classify("how to cook rice"),
        Intent::Trivia {
            topic: TriviaTopic::Cooking
        }
    );
    assert_eq!(
        classify("what is a good joke"),
        Intent::Trivia {
            topic: TriviaTopic::Joke
        }
    );
    assert_ne!(classify("weather").kind(), IntentKind::Trivia);
}

#[test]
fn conversational_intents() {
    assert_eq!(classify("Hello there"), Intent::Greeting);
    assert_eq!(classify("I need help"), Intent::Help);
    assert_eq!(classify("Thank you!"), Intent::Gratitude);
    assert_eq!(classify("what features are there"), Intent::FeatureQuery);
    assert_eq!(classify("I want to write more"), Intent::JournalQuery);
    assert_eq!(classify("how do I change my password"), Intent::PasswordQuery);
}

#[test]
fn substring_matching_is_literal() {
    // "this" contains "hi".
    assert_eq!(classify("is this working"), Intent::Greeting);
}

#[test]
fn unmatched_input_falls_back() {
    assert_eq!(classify("purple elephants"), Intent::Fallback);
    assert_eq!(classify(""), Intent::Fallback);
}

#[test]
fn any_input_classifies_without_panicking() {
    let long = "x".repeat(100_000);
    let inputs = [
        "",
        "   ",
        "\t\n\r",
        "\u{0}\u{1}\u{7f}",
        long.as_str(),
        "create a task \u{0}",
        "ÇRÉATE A TASK Ünïcödé",
        "🎉 add task 🎉",
    ];
    for input in inputs {
        let intent = classify(input);
        if let Intent::CreateTask { title: Some(title), .. } = &intent {
            assert!(!title.trim().is_empty());
        }
    }
}

#[test]
fn intent_serializes_with_kebab_case_tag() {
    let json = serde_json::to_value(Intent::Navigate {
        destination: Destination::BucketList,
    })
    .unwrap();
    assert_eq!(
        json,
        serde_json::json!({"intent": "navigate", "destination": "bucket-list"})
    );
}
