//! Chatbot service API: wire types and the HTTP backend.

pub mod client;
pub mod types;

pub use client::{BackendError, ChatBackend, HttpChatBackend};
pub use types::{BookSummary, ChatRequest, ChatResponse, MessageKind, SuggestionsResponse};
