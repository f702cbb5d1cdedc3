//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::state::ContactDraft;
use crate::core::store::Store;
use crate::mail::{EmailError, EmailProvider, EmailRequest, TemplateParams};

/// Provider that records every call and answers from a scripted queue.
/// Once the queue runs dry it answers `200`.
pub struct RecordingProvider {
    answers: Mutex<VecDeque<Result<u16, EmailError>>>,
    calls: Mutex<Vec<(String, TemplateParams)>>,
}

impl RecordingProvider {
    pub fn answering(answers: Vec<Result<u16, EmailError>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, TemplateParams)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailProvider for RecordingProvider {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, request: EmailRequest<'_>) -> Result<u16, EmailError> {
        self.calls
            .lock()
            .unwrap()
            .push((request.template_id.to_string(), request.params.clone()));
        self.answers.lock().unwrap().pop_front().unwrap_or(Ok(200))
    }
}

/// A draft that passes validation.
pub fn valid_draft() -> ContactDraft {
    ContactDraft {
        name: "Sam Carter".to_string(),
        email: "sam@example.com".to_string(),
        phone_number: "555-123-4567".to_string(),
        message: "Do you have anything open Saturday?".to_string(),
    }
}

/// Creates a store with default state.
pub fn test_store() -> Store {
    Store::new()
}
