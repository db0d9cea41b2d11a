//! CLI entry point for Hearth.

pub mod chat;
pub mod conversations;
pub mod tasks;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::types::Priority;

/// Hearth assistant CLI
#[derive(Parser, Debug)]
#[command(name = "hearth", version, about = "Hearth personal organizer assistant")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat with the assistant
    Chat(ChatArgs),
    /// Manage assistant conversations
    Conversations(ConversationsArgs),
    /// Manage tasks
    Tasks(TasksArgs),
}

/// Arguments for the `chat` subcommand.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Reply delay in milliseconds (overrides configuration)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Single message to send; starts an interactive session when omitted
    pub prompt: Option<String>,
}

/// Arguments for the `conversations` subcommand group.
#[derive(Parser, Debug)]
pub struct ConversationsArgs {
    #[command(subcommand)]
    pub command: ConversationCommands,
}

/// Conversation subcommands.
#[derive(Subcommand, Debug)]
pub enum ConversationCommands {
    /// List conversations, newest first
    List,
    /// Start a new conversation and make it active
    New,
    /// Make a conversation active
    Open(ConversationIdArgs),
    /// Delete a conversation
    Delete(ConversationIdArgs),
    /// Rename the active conversation (empty title restores the default)
    Rename(RenameArgs),
    /// Print the active conversation
    Show,
}

/// Arguments naming a conversation.
#[derive(Parser, Debug)]
pub struct ConversationIdArgs {
    pub id: String,
}

/// Arguments for `hearth conversations rename`.
#[derive(Parser, Debug)]
pub struct RenameArgs {
    #[arg(default_value = "")]
    pub title: String,
}

/// Arguments for the `tasks` subcommand group.
#[derive(Parser, Debug)]
pub struct TasksArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

/// Task subcommands.
#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List tasks grouped by due today, upcoming and completed
    List,
    /// Add a task
    Add(AddTaskArgs),
    /// Flip a task between pending and completed
    Toggle(TaskIdArgs),
    /// Delete a task
    Remove(TaskIdArgs),
}

/// Arguments for `hearth tasks add`.
#[derive(Parser, Debug)]
pub struct AddTaskArgs {
    pub title: String,

    /// Longer description
    #[arg(short, long)]
    pub description: Option<String>,

    /// low, medium or high
    #[arg(short, long, default_value = "medium")]
    pub priority: Priority,

    /// Due date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub due: Option<NaiveDate>,

    /// Tag, repeatable
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

/// Arguments naming a task.
#[derive(Parser, Debug)]
pub struct TaskIdArgs {
    pub id: String,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
