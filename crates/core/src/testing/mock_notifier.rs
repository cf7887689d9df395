//! Mock notification surface for testing.

use std::sync::Mutex;

use crate::controller::{Notifier, Severity};

/// A recorded notification for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Mock implementation of the `Notifier` trait; records every call.
#[derive(Debug, Default)]
pub struct MockNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded notifications.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Messages recorded at the given severity.
    pub fn messages_at(&self, severity: Severity) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.severity == severity)
            .map(|n| n.message.clone())
            .collect()
    }

    /// Clear recorded notifications.
    pub fn clear(&self) {
        self.notifications.lock().unwrap().clear();
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.notifications.lock().unwrap().push(Notification {
            message: message.to_string(),
            severity,
        });
    }
}
