//! Mock confirmation prompt for testing.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::controller::ConfirmPrompt;

/// Mock implementation of the `ConfirmPrompt` trait.
///
/// Answers with a preset boolean (default: confirm) and records every
/// prompt text it was asked.
#[derive(Debug)]
pub struct MockConfirm {
    answer: Mutex<bool>,
    prompts: Mutex<Vec<String>>,
}

impl Default for MockConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConfirm {
    pub fn new() -> Self {
        Self {
            answer: Mutex::new(true),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that declines every prompt.
    pub fn declining() -> Self {
        let confirm = Self::new();
        confirm.set_answer(false);
        confirm
    }

    /// Set the answer returned by subsequent prompts.
    pub fn set_answer(&self, answer: bool) {
        *self.answer.lock().unwrap() = answer;
    }

    /// Get all recorded prompt texts.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmPrompt for MockConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        *self.answer.lock().unwrap()
    }
}
