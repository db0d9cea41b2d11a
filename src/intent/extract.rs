//! Parameter extraction for task creation.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::types::Priority;

/// Phrases that introduce a task title, tried in order.
pub const TASK_TRIGGERS: [&str; 5] = [
    "create a task",
    "create task",
    "add a task",
    "add task",
    "new task",
];

static TRAILING_CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(for me|please|thanks|thank you).*$")
        .expect("trailing clause regex must compile")
});

/// Pull a task title out of a create-task request.
///
/// The text after the first trigger phrase is trimmed, loses any trailing
/// politeness clause ("for me", "please", "thanks", "thank you" and
/// everything after it) and one trailing `.`, `!` or `?`. Returns `None` when
/// no trigger phrase is present or nothing is left.
///
/// ```
/// use hearth::intent::extract_task_title;
///
/// assert_eq!(
///     extract_task_title("please create a task Buy milk for me").as_deref(),
///     Some("Buy milk"),
/// );
/// assert_eq!(extract_task_title("add task"), None);
/// ```
pub fn extract_task_title(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let trigger = TASK_TRIGGERS.iter().find(|phrase| lower.contains(*phrase))?;

    let splitter = RegexBuilder::new(&regex::escape(trigger))
        .case_insensitive(true)
        .build()
        .ok()?;
    let rest = splitter.splitn(text, 2).nth(1)?;

    let title = TRAILING_CLAUSE_RE.replace(rest.trim(), "");
    let title = title.trim();
    let title = title
        .strip_suffix(['.', '!', '?'])
        .unwrap_or(title)
        .trim();

    (!title.is_empty()).then(|| title.to_string())
}

/// Priority named in the message: "high" wins over "low", otherwise medium.
pub fn infer_priority(text: &str) -> Priority {
    let lower = text.to_lowercase();
    if lower.contains("high") {
        Priority::High
    } else if lower.contains("low") {
        Priority::Low
    } else {
        Priority::Medium
    }
}
