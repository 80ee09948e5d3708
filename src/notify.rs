//! Notifications
//!
//! The game reports its outcomes through a generic notification surface:
//! a title, a description and a severity. Frontends decide how to show
//! them (toasts in the browser, lines in the terminal, log records).

use serde::{Deserialize, Serialize};

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Normal,
    Destructive,
}

/// A user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Normal,
        }
    }

    /// Mark the notification as destructive
    pub fn destructive(mut self) -> Self {
        self.severity = Severity::Destructive;
        self
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }

    /// Shown by the shell when training starts
    pub fn welcome() -> Self {
        Self::new(
            "Welcome to NeuroGrow!",
            "Let's start your cognitive training journey.",
        )
    }

    /// A level begins revealing its sequence
    pub fn run_started(level: u32, sequence_len: usize) -> Self {
        Self::new(
            "Watch closely!",
            format!("Level {}: memorize a pattern of {} tiles.", level, sequence_len),
        )
    }

    /// A level was replayed correctly
    pub fn level_complete(level: u32, is_final: bool) -> Self {
        let description = if is_final {
            format!("Level {} completed!", level)
        } else {
            format!("Level {} completed! Moving to level {}", level, level + 1)
        };
        Self::new("Excellent!", description)
    }

    pub fn wrong_tile() -> Self {
        Self::new("Oops!", "Incorrect pattern. Try again!").destructive()
    }

    pub fn timed_out() -> Self {
        Self::new("Time's up!", "You ran out of time. Try again!").destructive()
    }

    pub fn all_levels_complete() -> Self {
        Self::new(
            "Congratulations!",
            "You've completed all levels! Amazing cognitive performance!",
        )
    }
}

/// Receiver of game notifications
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Records notifications in order
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Normal => tracing::info!(
                title = %notification.title,
                "{}",
                notification.description
            ),
            Severity::Destructive => tracing::warn!(
                title = %notification.title,
                "{}",
                notification.description
            ),
        }
    }
}
