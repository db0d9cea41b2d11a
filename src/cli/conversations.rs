//! `hearth conversations` command handlers.

use std::sync::Arc;

use super::ConversationCommands;
use crate::config::HearthConfig;
use crate::conversation::ConversationManager;
use crate::store::{FileStore, Repository};
use crate::types::Role;
use crate::util::SystemClock;

/// Handle `hearth conversations <command>`.
pub fn handle_conversations(
    command: ConversationCommands,
    config: &HearthConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = Repository::new(Arc::new(FileStore::from_config(config)));
    let mut manager = ConversationManager::start(repo, Arc::new(SystemClock));

    match command {
        ConversationCommands::List => list(&manager),
        ConversationCommands::New => {
            let id = manager.create_conversation();
            println!("Started conversation {id}");
        }
        ConversationCommands::Open(args) => {
            if !manager.load_conversation(&args.id) {
                return Err(format!("No conversation with id {}", args.id).into());
            }
            println!("Opened \"{}\"", manager.title());
        }
        ConversationCommands::Delete(args) => {
            if !manager.delete_conversation(&args.id) {
                return Err(format!("No conversation with id {}", args.id).into());
            }
            println!("Deleted conversation {}", args.id);
        }
        ConversationCommands::Rename(args) => {
            manager.rename_conversation(&args.title);
            println!("Renamed to \"{}\"", manager.title());
        }
        ConversationCommands::Show => show(&manager),
    }
    Ok(())
}

fn list(manager: &ConversationManager) {
    for conversation in manager.conversations().iter() {
        let marker = if conversation.id == manager.active_id() {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {}  {}  ({}, {} messages)",
            conversation.id,
            conversation.title,
            conversation.date.format("%-m/%-d/%Y"),
            conversation.messages.len()
        );
    }
}

fn show(manager: &ConversationManager) {
    println!("# {}", manager.title());
    for message in manager.messages() {
        let who = match message.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };
        let mut lines = message.lines();
        if let Some(first) = lines.next() {
            println!("{who}: {first}");
        }
        for line in lines {
            println!("    {line}");
        }
    }
}
