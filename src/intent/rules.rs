//! The ordered rule table behind [`classify`](super::classify).

use super::extract::{extract_task_title, infer_priority};
use super::{Destination, Intent, IntentKind, TriviaTopic};

/// Input as seen by a rule: the original text and its lowercase form.
#[derive(Debug)]
pub struct Utterance<'a> {
    pub raw: &'a str,
    pub lower: String,
}

impl<'a> Utterance<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }

    pub fn has(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    pub fn has_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.has(needle))
    }
}

/// One row of the table: the intent it produces and its matcher.
pub struct Rule {
    pub kind: IntentKind,
    pub apply: fn(&Utterance<'_>) -> Option<Intent>,
}

/// First match wins. Completed tasks sits above pending tasks so that
/// "show completed tasks" is not swallowed by the generic listing.
pub const RULES: &[Rule] = &[
    Rule {
        kind: IntentKind::ListCompletedTasks,
        apply: completed_tasks,
    },
    Rule {
        kind: IntentKind::ListPendingTasks,
        apply: pending_tasks,
    },
    Rule {
        kind: IntentKind::CreateTask,
        apply: create_task,
    },
    Rule {
        kind: IntentKind::DueToday,
        apply: due_today,
    },
    Rule {
        kind: IntentKind::TaskAnalytics,
        apply: analytics,
    },
    Rule {
        kind: IntentKind::Navigate,
        apply: navigate,
    },
    Rule {
        kind: IntentKind::Trivia,
        apply: trivia,
    },
    Rule {
        kind: IntentKind::Greeting,
        apply: greeting,
    },
    Rule {
        kind: IntentKind::Help,
        apply: help,
    },
    Rule {
        kind: IntentKind::Gratitude,
        apply: gratitude,
    },
    Rule {
        kind: IntentKind::FeatureQuery,
        apply: feature_query,
    },
    Rule {
        kind: IntentKind::JournalQuery,
        apply: journal_query,
    },
    Rule {
        kind: IntentKind::PasswordQuery,
        apply: password_query,
    },
];

/// Destination keywords, checked in order.
const DESTINATION_KEYWORDS: &[(&[&str], Destination)] = &[
    (&["dashboard", "home"], Destination::Dashboard),
    (&["task"], Destination::Tasks),
    (&["note"], Destination::Notes),
    (&["journal"], Destination::Journal),
    (&["writing"], Destination::Writing),
    (&["bucket", "list"], Destination::BucketList),
    (&["quote"], Destination::Quotes),
    (&["timeline"], Destination::Timeline),
    (&["vault"], Destination::Vault),
    (&["time capsule", "capsule"], Destination::TimeCapsule),
];

const TRIVIA_KEYWORDS: &[(&[&str], TriviaTopic)] = &[
    (&["meaning of life"], TriviaTopic::MeaningOfLife),
    (&["weather"], TriviaTopic::Weather),
    (&["recipe", "cook"], TriviaTopic::Cooking),
    (&["joke", "funny"], TriviaTopic::Joke),
];

fn completed_tasks(u: &Utterance<'_>) -> Option<Intent> {
    (u.has("completed tasks") || (u.has("show") && u.has("completed")))
        .then_some(Intent::ListCompletedTasks)
}

fn pending_tasks(u: &Utterance<'_>) -> Option<Intent> {
    (u.has("show") && u.has("tasks")).then_some(Intent::ListPendingTasks)
}

fn create_task(u: &Utterance<'_>) -> Option<Intent> {
    if !(u.has_any(&["create", "add"]) && u.has_any(&["task", "todo"])) {
        return None;
    }
    Some(Intent::CreateTask {
        title: extract_task_title(u.raw),
        priority: infer_priority(u.raw),
    })
}

fn due_today(u: &Utterance<'_>) -> Option<Intent> {
    u.has_any(&["due", "deadline"]).then_some(Intent::DueToday)
}

fn analytics(u: &Utterance<'_>) -> Option<Intent> {
    u.has_any(&["analytics", "statistics", "stats"])
        .then_some(Intent::TaskAnalytics)
}

fn navigate(u: &Utterance<'_>) -> Option<Intent> {
    if !u.has_any(&["go to", "open", "navigate"]) {
        return None;
    }
    DESTINATION_KEYWORDS
        .iter()
        .find(|(keywords, _)| u.has_any(keywords))
        .map(|&(_, destination)| Intent::Navigate { destination })
}

fn trivia(u: &Utterance<'_>) -> Option<Intent> {
    if !u.has_any(&["what is", "who is", "how to"]) {
        return None;
    }
    TRIVIA_KEYWORDS
        .iter()
        .find(|(keywords, _)| u.has_any(keywords))
        .map(|&(_, topic)| Intent::Trivia { topic })
}

fn greeting(u: &Utterance<'_>) -> Option<Intent> {
    u.has_any(&["hello", "hi"]).then_some(Intent::Greeting)
}

fn help(u: &Utterance<'_>) -> Option<Intent> {
    u.has("help").then_some(Intent::Help)
}

fn gratitude(u: &Utterance<'_>) -> Option<Intent> {
    u.has("thank").then_some(Intent::Gratitude)
}

fn feature_query(u: &Utterance<'_>) -> Option<Intent> {
    u.has_any(&["feature", "can you do"])
        .then_some(Intent::FeatureQuery)
}

fn journal_query(u: &Utterance<'_>) -> Option<Intent> {
    u.has_any(&["journal", "write"]).then_some(Intent::JournalQuery)
}

fn password_query(u: &Utterance<'_>) -> Option<Intent> {
    u.has_any(&["password", "protected"])
        .then_some(Intent::PasswordQuery)
}
