//! # Actions
//!
//! Everything that can happen in a conversation becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The service replies? That's `Action::ResponseReceived`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No I/O here — network work is described by the
//! returned `Effect` and performed in the TUI event loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes the whole controller testable without a terminal or a
//! server: feed actions, assert on the transcript.

use log::{info, warn};

use crate::api::ChatResponse;
use crate::core::state::{App, ConversationState};
use crate::core::transcript::{sanitize_text, Exchange, TranscriptEntry};

/// Maximum number of chips the startup loader will display.
pub const SUGGESTION_DISPLAY_LIMIT: usize = 4;

/// Fixed apology shown for any transport or decoding failure.
/// Matches the wording the service itself uses for its own errors.
pub const FALLBACK_ERROR_TEXT: &str = "Sorry, I encountered an error. Please try again!";

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User submitted input (Enter or suggestion chip — same path).
    Submit(String),
    /// The service replied to `request`.
    ResponseReceived {
        request: String,
        response: ChatResponse,
    },
    /// Transport or decoding failure for the in-flight request.
    RequestFailed(String),
    /// The startup loader fetched the initial chip labels.
    SuggestionsLoaded(Vec<String>),
    Quit,
}

/// Side effects the event loop must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue a chatbot request with this message.
    SpawnRequest(String),
    Quit,
}

/// The reducer: applies `action` to `app`, returns the effect to run.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(raw) => submit(app, &raw),
        Action::ResponseReceived { request, response } => {
            app.typing.hide();
            let entry = TranscriptEntry::bot(&response);
            let bot_text = entry.display_text.clone();
            let timestamp = entry.timestamp;
            app.transcript.push_entry(entry);
            if !response.suggestions.is_empty() {
                app.transcript.push_suggestions(response.suggestions);
            }
            app.history.push(Exchange {
                user: request,
                bot: bot_text,
                timestamp,
            });
            app.conversation = ConversationState::Idle;
            app.status_message = String::from("Ask me about books!");
            Effect::None
        }
        Action::RequestFailed(reason) => {
            warn!("Chatbot request failed: {}", reason);
            app.typing.hide();
            // The failed exchange is not recorded in history.
            app.transcript
                .push_entry(TranscriptEntry::bot_plain(FALLBACK_ERROR_TEXT));
            app.conversation = ConversationState::Idle;
            app.status_message = String::from("Request failed");
            Effect::None
        }
        Action::SuggestionsLoaded(mut labels) => {
            labels.truncate(SUGGESTION_DISPLAY_LIMIT);
            if !labels.is_empty() {
                info!("Rendering {} startup suggestions", labels.len());
                app.transcript.push_suggestions(labels);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn submit(app: &mut App, raw: &str) -> Effect {
    let message = sanitize_text(raw);
    if message.is_empty() {
        // Silent no-op: nothing rendered, nothing sent.
        return Effect::None;
    }
    if app.is_awaiting_response() {
        // One request at a time. Dropped, not queued.
        info!("Submit ignored: a request is already in flight");
        app.status_message = String::from("Still thinking about the last one...");
        return Effect::None;
    }

    // The user entry lands in the transcript before the request is
    // issued; the TUI has already cleared the input field.
    app.transcript.push_entry(TranscriptEntry::user(&message));
    app.typing.show();
    app.conversation = ConversationState::AwaitingResponse;
    app.status_message = String::from("Waiting for a reply...");
    Effect::SpawnRequest(message)
}
