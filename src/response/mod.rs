//! Reply text for each intent.
//!
//! Replies are a pure function of the intent, the task snapshot and today's
//! date. Multi-line replies use `\n` between lines.

mod canned;

pub use canned::{canned_reply, navigation_reply};

use chrono::NaiveDate;
use serde::Serialize;

use crate::intent::Intent;
use crate::types::{Priority, Task};

/// Most tasks listed in one reply.
pub const LIST_LIMIT: usize = 5;

/// Counts behind the analytics reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub high_priority_pending: usize,
    /// Whole percent, rounded; 0 when there are no tasks.
    pub completion_rate: u32,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let high_priority_pending = tasks
            .iter()
            .filter(|t| t.is_pending() && t.priority == Priority::High)
            .count();
        let completion_rate = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            total,
            completed,
            pending: total - completed,
            high_priority_pending,
            completion_rate,
        }
    }
}

/// Produce the assistant's reply.
///
/// Deterministic for a given intent, task snapshot and date.
pub fn respond(intent: &Intent, tasks: &[Task], today: NaiveDate) -> String {
    match intent {
        Intent::ListPendingTasks => pending_tasks(tasks),
        Intent::ListCompletedTasks => completed_tasks(tasks),
        Intent::CreateTask { title, .. } => match title {
            Some(title) => format!(
                "I've created a new task: \"{title}\". You can find it on your Tasks page."
            ),
            None => "What should I call the task? Try something like \"Create a task Buy groceries\"."
                .to_string(),
        },
        Intent::DueToday => due_today(tasks, today),
        Intent::TaskAnalytics => analytics(&TaskStats::from_tasks(tasks)),
        Intent::Navigate { destination } => navigation_reply(*destination).to_string(),
        other => canned_reply(other).to_string(),
    }
}

/// Reply when a requested task could not be stored.
pub fn task_not_saved(title: &str) -> String {
    format!("Sorry, I couldn't save the task \"{title}\" right now. Please try again in a moment.")
}

fn pending_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "You don't have any tasks yet. Would you like me to create one for you?"
            .to_string();
    }
    let pending: Vec<&Task> = tasks.iter().filter(|t| t.is_pending()).collect();
    if pending.is_empty() {
        return "Great job! You've completed all of your tasks.".to_string();
    }

    let mut lines = vec!["Here are your pending tasks:".to_string()];
    lines.extend(pending.iter().take(LIST_LIMIT).enumerate().map(|(i, task)| {
        format!(
            "{}. {} ({} priority, due {})",
            i + 1,
            task.title,
            task.priority,
            task.display_due_date()
        )
    }));
    if pending.len() > LIST_LIMIT {
        lines.push(format!("...and {} more", pending.len() - LIST_LIMIT));
    }
    lines.join("\n")
}

fn completed_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "You don't have any tasks yet, so nothing is completed either.".to_string();
    }
    let completed: Vec<&Task> = tasks.iter().filter(|t| t.completed).collect();
    if completed.is_empty() {
        return "You haven't completed any tasks yet. You've got this!".to_string();
    }

    let mut lines = vec!["Here are your completed tasks:".to_string()];
    lines.extend(
        completed
            .iter()
            .take(LIST_LIMIT)
            .enumerate()
            .map(|(i, task)| format!("{}. {}", i + 1, task.title)),
    );
    if completed.len() > LIST_LIMIT {
        lines.push(format!(
            "...and {} more completed tasks",
            completed.len() - LIST_LIMIT
        ));
    }
    lines.join("\n")
}

fn due_today(tasks: &[Task], today: NaiveDate) -> String {
    let due: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.is_pending() && t.is_due_on(today))
        .collect();
    if due.is_empty() {
        return "You don't have any tasks due today. Would you like to see your upcoming tasks instead?"
            .to_string();
    }

    let noun = if due.len() == 1 { "task" } else { "tasks" };
    let mut lines = vec![format!("You have {} {noun} due today:", due.len())];
    lines.extend(
        due.iter()
            .enumerate()
            .map(|(i, task)| format!("{}. {} ({} priority)", i + 1, task.title, task.priority)),
    );
    lines.join("\n")
}

fn analytics(stats: &TaskStats) -> String {
    [
        "Here's a summary of your tasks:".to_string(),
        format!("Total tasks: {}", stats.total),
        format!("Completed: {}", stats.completed),
        format!("Pending: {}", stats.pending),
        format!("High priority pending: {}", stats.high_priority_pending),
        format!("Completion rate: {}%", stats.completion_rate),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_empty_snapshot_are_zero() {
        assert_eq!(TaskStats::from_tasks(&[]), TaskStats::default());
    }

    #[test]
    fn completion_rate_rounds_half_up() {
        let task = |completed| Task {
            id: "x".to_string(),
            title: "x".to_string(),
            description: None,
            priority: Priority::Medium,
            due_date: "2025-01-01".to_string(),
            tags: vec![],
            completed,
            extra: Default::default(),
        };
        // 1 of 8 = 12.5%
        let mut tasks = vec![task(true)];
        tasks.extend((0..7).map(|_| task(false)));
        assert_eq!(TaskStats::from_tasks(&tasks).completion_rate, 13);
        // 2 of 3 = 66.67%
        let tasks = vec![task(true), task(true), task(false)];
        assert_eq!(TaskStats::from_tasks(&tasks).completion_rate, 67);
    }
}
