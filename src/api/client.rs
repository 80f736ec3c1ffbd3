//! HTTP backend for the chatbot service.
//!
//! `ChatBackend` is the seam between the conversation controller and the
//! network: the TUI talks to `Arc<dyn ChatBackend>`, tests substitute a
//! canned implementation. `HttpChatBackend` is the real one, built on
//! reqwest against a Flask-style base URL.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info};

use super::types::{ChatRequest, ChatResponse, SuggestionsResponse};

/// Errors that can occur while talking to the chatbot service.
/// The controller collapses all of these into one user-visible fallback,
/// but the variants keep diagnostics precise in the log.
#[derive(Debug)]
pub enum BackendError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The body arrived but didn't decode into the expected shape.
    Parse(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Network(msg) => write!(f, "network error: {msg}"),
            BackendError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            BackendError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Returns the name of the backend (shown in the title bar).
    fn name(&self) -> &str;

    /// Sends one user message and returns the bot's reply.
    async fn send_message(&self, message: &str) -> Result<ChatResponse, BackendError>;

    /// Fetches the initial suggestion chips. Consumed once at startup.
    async fn fetch_suggestions(&self) -> Result<Vec<String>, BackendError>;
}

/// Backend implementation over HTTP.
pub struct HttpChatBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpChatBackend {
    /// Creates a backend rooted at `base_url` (no trailing slash expected).
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Checks the status and surfaces non-2xx as `BackendError::Api`.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(BackendError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn send_message(&self, message: &str) -> Result<ChatResponse, BackendError> {
        let url = format!("{}/api/chatbot/message", self.base_url);
        let request = ChatRequest {
            message: message.to_string(),
        };
        info!("POST {} ({} bytes)", url, message.len());

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;
        debug!(
            "Chatbot reply: kind={:?}, {} books, {} suggestions",
            chat_response.kind,
            chat_response.books.len(),
            chat_response.suggestions.len()
        );
        Ok(chat_response)
    }

    async fn fetch_suggestions(&self) -> Result<Vec<String>, BackendError> {
        let url = format!("{}/api/chatbot/suggestions", self.base_url);
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let body: SuggestionsResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;
        Ok(body.suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let backend = HttpChatBackend::new("http://localhost:5000/".to_string());
        assert_eq!(backend.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_error_display() {
        let err = BackendError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 500): boom");
        assert_eq!(
            BackendError::Network("refused".to_string()).to_string(),
            "network error: refused"
        );
    }
}
