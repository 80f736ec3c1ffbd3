//! # Application State
//!
//! Core business state for bookchat. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn ChatBackend>    // chatbot service
//! ├── transcript: Transcript           // rendered conversation items
//! ├── history: Vec<Exchange>           // completed exchanges only
//! ├── conversation: ConversationState  // Idle | AwaitingResponse
//! ├── typing: TypingIndicator          // transient "typing" cue
//! └── status_message: String           // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in
//! action.rs. This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::ChatBackend;
use crate::core::transcript::{Exchange, Transcript};

/// Exactly one of these at any time. The reducer refuses a second
/// submission while a request is outstanding, so at most one request is
/// ever in flight from the send path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingResponse,
}

/// The transient "typing" cue shown while a response is pending.
/// Both transitions are idempotent; there is never more than one
/// indicator because visibility is a single flag, not an element list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypingIndicator {
    visible: bool,
}

impl TypingIndicator {
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// No-op when already hidden.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }
}

pub struct App {
    pub backend: Arc<dyn ChatBackend>,
    pub transcript: Transcript,
    pub history: Vec<Exchange>,
    pub conversation: ConversationState,
    pub typing: TypingIndicator,
    pub status_message: String,
}

impl App {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            transcript: Transcript::new(),
            history: Vec::new(),
            conversation: ConversationState::default(),
            typing: TypingIndicator::default(),
            status_message: String::from("Ask me about books!"),
        }
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.conversation == ConversationState::AwaitingResponse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.conversation, ConversationState::Idle);
        assert!(!app.typing.is_visible());
        assert!(app.transcript.is_empty());
        assert!(app.history.is_empty());
        assert_eq!(app.status_message, "Ask me about books!");
    }

    #[test]
    fn test_typing_indicator_idempotent() {
        let mut typing = TypingIndicator::default();
        typing.show();
        typing.show();
        assert!(typing.is_visible());

        typing.hide();
        typing.hide();
        assert!(!typing.is_visible());
    }
}
