//! `hearth chat`: one-shot or interactive conversation with the assistant.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use super::ChatArgs;
use crate::assistant::{Assistant, ReplyScheduler};
use crate::config::HearthConfig;
use crate::store::{FileStore, Repository};
use crate::types::Message;
use crate::util::SystemClock;

/// Handle `hearth chat [PROMPT]`.
pub async fn handle_chat(
    args: ChatArgs,
    config: &HearthConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = Repository::new(Arc::new(FileStore::from_config(config)));
    let assistant = Assistant::new(repo, Arc::new(SystemClock));
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.reply_delay());
    let scheduler = ReplyScheduler::new(assistant, delay);

    if let Some(prompt) = args.prompt {
        ask(&scheduler, &prompt).await?;
        return Ok(());
    }

    let title = scheduler.with_assistant(|a| a.conversations().title().to_string());
    eprintln!("Conversation: {title}  (/new, /list, /quit)");
    scheduler.with_assistant(|a| {
        if let Some(last) = a.conversations().messages().last() {
            print_message(last);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "/quit" | "/exit" => break,
            "/new" => {
                scheduler.with_assistant(|a| {
                    a.conversations_mut().create_conversation();
                    if let Some(last) = a.conversations().messages().last() {
                        print_message(last);
                    }
                });
            }
            "/list" => {
                scheduler.with_assistant(|a| {
                    let active = a.conversations().active_id().to_string();
                    for conversation in a.conversations().conversations().iter() {
                        let marker = if conversation.id == active { "*" } else { " " };
                        println!("{marker} {}  {}", conversation.id, conversation.title);
                    }
                });
            }
            text => ask(&scheduler, text).await?,
        }
    }
    Ok(())
}

async fn ask(scheduler: &ReplyScheduler, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let Some(handle) = scheduler.submit(text) else {
        return Ok(());
    };
    eprintln!("...");
    if let Some(reply) = handle.await? {
        print_message(&Message::assistant(reply.text));
    }
    Ok(())
}

fn print_message(message: &Message) {
    for line in message.lines() {
        println!("{line}");
    }
}
