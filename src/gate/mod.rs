//! Password gate in front of the protected pages.
//!
//! This is a cosmetic gate: the password lives in the same plain store as
//! everything else. It keeps casual eyes off the vault and journal, nothing
//! more.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{HearthError, Result};
use crate::executor::{Notification, Notifier};
use crate::store::Repository;

/// Password accepted before one is configured.
pub const DEFAULT_PASSWORD: &str = "1234";

/// Shortest password `configure` accepts, in characters.
pub const MIN_PASSWORD_CHARS: usize = 4;

pub struct PasswordGate {
    repo: Repository,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for PasswordGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordGate")
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}

impl PasswordGate {
    pub fn new(repo: Repository, notifier: Arc<dyn Notifier>) -> Self {
        Self { repo, notifier }
    }

    /// Whether the user has set a password.
    pub fn is_configured(&self) -> bool {
        self.repo.password_configured()
    }

    /// Set the password after checking length and confirmation.
    pub fn configure(&self, password: &str, confirmation: &str) -> Result<()> {
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(HearthError::InvalidArgument(format!(
                "Password must be at least {MIN_PASSWORD_CHARS} characters long"
            )));
        }
        if password != confirmation {
            return Err(HearthError::InvalidArgument(
                "Passwords do not match".to_string(),
            ));
        }

        self.repo.save_password(password)?;
        info!("gate password configured");
        self.notifier.notify(
            Notification::info("Password Set Successfully")
                .with_description("Your password has been set for protected sections"),
        );
        Ok(())
    }

    /// Check an attempt against the stored password.
    pub fn unlock(&self, attempt: &str) -> bool {
        let stored = self
            .repo
            .password()
            .unwrap_or_else(|| DEFAULT_PASSWORD.to_string());

        if attempt == stored {
            self.notifier.notify(
                Notification::info("Access Granted")
                    .with_description("You now have access to this protected section"),
            );
            true
        } else {
            warn!("gate unlock rejected");
            self.notifier.notify(
                Notification::error("Access Denied")
                    .with_description("The password you entered is incorrect"),
            );
            false
        }
    }
}
