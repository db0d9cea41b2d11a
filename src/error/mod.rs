//! Error types for Hearth.

use thiserror::Error;

/// Primary error type for all Hearth operations.
#[derive(Error, Debug)]
pub enum HearthError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Configuration,
    Input,
}

impl HearthError {
    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io(_) | Self::Serialization(_) => ErrorCategory::Storage,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::InvalidArgument(_) | Self::NotFound(_) => ErrorCategory::Input,
        }
    }

    /// Whether the caller can carry on with in-memory state after this error.
    ///
    /// Storage failures leave the in-memory snapshot intact, so the chat keeps
    /// working and the next successful write catches the store up.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Storage | ErrorCategory::Input
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, HearthError>;
