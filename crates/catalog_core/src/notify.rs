use std::time::Duration;

use shared::domain::Severity;
use tokio::time::Instant;

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}

pub trait Notifier: Send {
    fn notify(&mut self, notification: Notification);
}

/// Single-slot notification holder. A newer notification replaces the
/// current one; each expires `ttl` after it was shown.
#[derive(Debug)]
pub struct NotificationCenter {
    ttl: Duration,
    current: Option<(Notification, Instant)>,
    generation: u64,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            current: None,
            generation: 0,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|(_, shown_at)| shown_at.elapsed() < self.ttl)
            .map(|(notification, _)| notification)
    }

    /// Incremented on every notification, including repeats.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, notification: Notification) {
        self.current = Some((notification, Instant::now()));
        self.generation += 1;
    }
}

#[cfg(test)]
#[path = "tests/notify_tests.rs"]
mod tests;
