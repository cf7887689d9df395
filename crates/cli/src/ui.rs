//! Terminal implementations of the controller's collaborator traits.

use std::io::{self, Write};

use async_trait::async_trait;
use tracing::warn;

use arrmap_core::{ConfirmPrompt, Notifier, Severity};

/// Notifier printing severity-tagged lines to stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        eprintln!("[{}] {}", severity.as_str(), message);
    }
}

/// y/N confirmation prompt on the terminal.
pub struct TerminalPrompt;

#[async_trait]
impl ConfirmPrompt for TerminalPrompt {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = format!("{} [y/N]: ", prompt);
        let answer = tokio::task::spawn_blocking(move || {
            let mut stderr = io::stderr();
            let _ = write!(stderr, "{}", prompt);
            let _ = stderr.flush();

            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                return false;
            }
            matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
        })
        .await;

        match answer {
            Ok(confirmed) => confirmed,
            Err(e) => {
                warn!(error = %e, "Confirmation prompt failed");
                false
            }
        }
    }
}
