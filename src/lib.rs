//! Hearth: rule-based assistant core for a personal organizer.
//!
//! Classifies free-text chat input into intents with an ordered keyword rule
//! table, performs the side effects some intents imply (creating tasks,
//! navigating pages), generates a reply from the current task snapshot and
//! keeps multiple persistent conversations.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use hearth::prelude::*;
//!
//! let mut assistant = Assistant::new(Repository::in_memory(), Arc::new(SystemClock));
//! let reply = assistant.send("Create a task Buy milk").expect("non-blank input");
//! assert!(reply.text.contains("Buy milk"));
//! assert_eq!(assistant.tasks().all().len(), 1);
//! ```

pub mod assistant;
pub mod config;
pub mod conversation;
pub mod error;
pub mod executor;
pub mod gate;
pub mod intent;
pub mod prelude;
pub mod response;
pub mod store;
pub mod tasks;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
