//! Wire types for the book-library chatbot API.
//!
//! The service speaks plain JSON: `POST /api/chatbot/message` with
//! `{"message": ...}`, responses carry `text` plus optional `type`,
//! `books`, and `suggestions` fields. Everything optional defaults here
//! so a minimal `{"text": "hi"}` body decodes cleanly.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chatbot/message`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

/// How a bot message should be rendered.
///
/// The wire value is `"text"` or `"book_list"`; an omitted field means
/// plain text. Any other value fails decoding, which the controller
/// treats the same as a transport failure.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    #[serde(rename = "text")]
    Plain,
    #[serde(rename = "book_list")]
    BookList,
}

/// One recommended book, supplied entirely by the service.
/// Only ever read for rendering; never constructed client-side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookSummary {
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Numeric rating on a 0–5 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

/// Response body for `POST /api/chatbot/message`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChatResponse {
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
    #[serde(default)]
    pub books: Vec<BookSummary>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Response body for `GET /api/chatbot/suggestions`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SuggestionsResponse {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Formats a 0–5 rating for display: `5/5`, `4.5/5`.
/// Whole numbers drop the fractional digit.
pub fn format_rating(rating: f32) -> String {
    if rating.fract() == 0.0 {
        format!("{:.0}/5", rating)
    } else {
        format!("{:.1}/5", rating)
    }
}
