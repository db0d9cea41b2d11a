//! `hearth tasks` command handlers.

use std::sync::Arc;

use super::TaskCommands;
use crate::config::HearthConfig;
use crate::store::{FileStore, Repository};
use crate::tasks::TaskBoard;
use crate::types::{NewTask, Task};
use crate::util::SystemClock;

/// Handle `hearth tasks <command>`.
pub fn handle_tasks(
    command: TaskCommands,
    config: &HearthConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = Repository::new(Arc::new(FileStore::from_config(config)));
    let board = TaskBoard::new(repo, Arc::new(SystemClock));

    match command {
        TaskCommands::List => {
            print_section("Due today", &board.due_today());
            print_section("Upcoming", &board.upcoming());
            print_section("Completed", &board.completed());
        }
        TaskCommands::Add(args) => {
            let task = board.add(
                NewTask::builder()
                    .title(args.title)
                    .maybe_description(args.description)
                    .priority(args.priority)
                    .maybe_due(args.due)
                    .tags(args.tags)
                    .build(),
            )?;
            println!("Added {}  {}", task.id, task.title);
        }
        TaskCommands::Toggle(args) => {
            let task = board.toggle(&args.id)?;
            let state = if task.completed { "completed" } else { "pending" };
            println!("{} is now {state}", task.title);
        }
        TaskCommands::Remove(args) => match board.remove(&args.id)? {
            Some(task) => println!("Removed {}", task.title),
            None => return Err(format!("No task with id {}", args.id).into()),
        },
    }
    Ok(())
}

fn print_section(heading: &str, tasks: &[Task]) {
    println!("{heading} ({})", tasks.len());
    for task in tasks {
        let check = if task.completed { "x" } else { " " };
        let tags = if task.tags.is_empty() {
            String::new()
        } else {
            format!("  #{}", task.tags.join(" #"))
        };
        println!(
            "  [{check}] {}  {} ({} priority, due {}){tags}",
            task.id,
            task.title,
            task.priority,
            task.display_due_date()
        );
    }
}
