//! Core types for Hearth.

pub mod conversation;
pub mod message;
pub mod task;

pub use conversation::*;
pub use message::*;
pub use task::*;
