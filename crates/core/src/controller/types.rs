//! Types and collaborator traits for the controller.

use async_trait::async_trait;

use crate::mapping::Mapping;

/// Which region of the table view is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// A refresh is in flight; initial state.
    Loading,
    /// Both snapshots loaded.
    Content,
    /// A refresh failed with this message.
    Error(String),
}

/// Severity level of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Returns the string representation used by notification surfaces.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Trait for the transient notification surface.
pub trait Notifier: Send + Sync {
    /// Display a transient message at the given severity.
    fn notify(&self, message: &str, severity: Severity);
}

/// Trait for the destructive-action confirmation surface.
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    /// Ask the user to confirm; `false` aborts the action.
    async fn confirm(&self, prompt: &str) -> bool;
}

/// The single active edit session.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// The mapping being edited, as resolved from the current snapshot.
    pub mapping: Mapping,
    /// Initial content of the dialog's label field.
    pub label: String,
}

impl EditSession {
    pub fn new(mapping: Mapping) -> Self {
        let label = mapping.arr_name.clone();
        Self { mapping, label }
    }

    /// Dialog title: the torrent name, falling back to the infohash.
    pub fn title(&self) -> &str {
        self.mapping
            .torrent_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.mapping.infohash)
    }
}
