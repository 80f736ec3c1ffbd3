//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::types::{ChatResponse, MessageKind};
use crate::api::{BackendError, ChatBackend};

/// A canned backend for tests that don't need real HTTP.
pub struct StaticBackend {
    pub response_text: String,
}

impl StaticBackend {
    pub fn new(response_text: &str) -> Self {
        Self {
            response_text: response_text.to_string(),
        }
    }
}

#[async_trait]
impl ChatBackend for StaticBackend {
    fn name(&self) -> &str {
        "static"
    }

    async fn send_message(&self, _message: &str) -> Result<ChatResponse, BackendError> {
        Ok(ChatResponse {
            text: self.response_text.clone(),
            kind: MessageKind::Plain,
            books: vec![],
            suggestions: vec![],
        })
    }

    async fn fetch_suggestions(&self) -> Result<Vec<String>, BackendError> {
        Ok(vec![])
    }
}

/// Creates a test App with a StaticBackend.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StaticBackend::new("ok")))
}
