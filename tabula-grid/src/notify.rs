//! Transient user notifications.
//!
//! Only one notification is visible at a time: a new one replaces the
//! current one, and it disappears once the configured timeout has passed.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Success or error styling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Success,
    Error,
}

/// A titled message shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub level: Level,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: Level::Success,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: Level::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

/// Receiver of notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Number of past notifications a [`NotificationCenter`] remembers.
pub const HISTORY_LIMIT: usize = 32;

/// Keeps the latest notification and expires it after a timeout.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    timeout: Duration,
    current: Option<(Notification, Instant)>,
    history: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            current: None,
            history: Vec::new(),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Visible notification as of `now`.
    pub fn current_at(&self, now: Instant) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|(_, shown)| now.saturating_duration_since(*shown) < self.timeout)
            .map(|(n, _)| n)
    }

    /// Visible notification right now.
    pub fn current(&self) -> Option<&Notification> {
        self.current_at(Instant::now())
    }

    /// When the current notification was shown.
    pub fn shown_at(&self) -> Option<Instant> {
        self.current.as_ref().map(|(_, shown)| *shown)
    }

    /// Most recent notification, expired or not.
    pub fn last(&self) -> Option<&Notification> {
        self.history.last()
    }

    /// The last [`HISTORY_LIMIT`] notifications, oldest first.
    pub fn history(&self) -> &[Notification] {
        &self.history
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_NOTIFICATION_TIMEOUT_MS))
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, notification: Notification) {
        debug!(
            title = %notification.title,
            error = notification.is_error(),
            "notification shown"
        );
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(notification.clone());
        self.current = Some((notification, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notification_replaces_current() {
        let mut center = NotificationCenter::default();
        center.notify(Notification::success("Success!", "first"));
        center.notify(Notification::error("Invalid age!", "second"));
        let current = center.current().unwrap();
        assert_eq!(current.message, "second");
        assert!(current.is_error());
        assert_eq!(center.history().len(), 2);
    }

    #[test]
    fn history_keeps_only_the_most_recent() {
        let mut center = NotificationCenter::default();
        for i in 0..HISTORY_LIMIT + 5 {
            center.notify(Notification::success("Success!", format!("#{i}")));
        }
        let history = center.history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].message, "#5");
        assert_eq!(
            center.last().unwrap().message,
            format!("#{}", HISTORY_LIMIT + 4)
        );
    }

    #[test]
    fn notification_expires_after_timeout() {
        let mut center = NotificationCenter::new(Duration::from_secs(3));
        center.notify(Notification::success("Success!", "added"));
        let shown = center.shown_at().unwrap();
        assert!(center.current_at(shown + Duration::from_millis(2999)).is_some());
        assert!(center.current_at(shown + Duration::from_secs(3)).is_none());
        assert_eq!(center.last().unwrap().message, "added");
    }

    #[test]
    fn dismiss_hides_current() {
        let mut center = NotificationCenter::default();
        center.notify(Notification::success("Success!", "x"));
        center.dismiss();
        assert!(center.current().is_none());
        assert!(center.last().is_some());
    }

    #[test]
    fn default_timeout_is_three_seconds() {
        assert_eq!(NotificationCenter::default().timeout(), Duration::from_secs(3));
    }
}
