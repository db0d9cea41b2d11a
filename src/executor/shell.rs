//! Router and notifier for hosts without a UI: both just log.

use tracing::{error, info};

use super::{Notification, Notifier, Router, Severity};

/// Router that records navigation requests in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingRouter;

impl Router for LoggingRouter {
    fn navigate(&self, path: &str) {
        info!(path, "route change requested");
    }
}

/// Notifier that writes toasts to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn notify(&self, notification: Notification) {
        let description = notification.description.as_deref().unwrap_or("");
        match notification.severity {
            Severity::Info => info!(title = %notification.title, description, "notification"),
            Severity::Error => error!(title = %notification.title, description, "notification"),
        }
    }
}
