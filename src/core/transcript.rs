//! # Transcript
//!
//! The conversation log. A `Transcript` is an append-only sequence of
//! polymorphic items: rendered entries (user or bot) and suggestion
//! panels. Entries are never mutated or removed within a session.
//!
//! Separately from the visual transcript, `Exchange` records completed
//! request/response pairs. A failed request produces a fallback entry in
//! the transcript but no `Exchange` — the history only holds exchanges
//! that actually happened.
//!
//! Every string that enters the transcript — typed or served — goes
//! through [`sanitize_text`] first, so terminal control sequences in
//! untrusted text can never reach the render path.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::types::{BookSummary, ChatResponse, MessageKind};

/// Who produced a transcript entry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "bot")]
    Bot,
}

/// One rendered conversation entry. Immutable after creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub role: Role,
    pub display_text: String,
    pub kind: MessageKind,
    /// Only meaningful when `kind == BookList`; empty otherwise.
    pub books: Vec<BookSummary>,
    /// Unix timestamp (UTC seconds).
    pub timestamp: i64,
}

impl TranscriptEntry {
    /// Entry for a message the user typed. Always plain text.
    pub fn user(text: &str) -> Self {
        Self {
            role: Role::User,
            display_text: sanitize_text(text),
            kind: MessageKind::Plain,
            books: Vec::new(),
            timestamp: Utc::now().timestamp(),
        }
    }

    /// Entry for a bot response, carrying its kind and book cards.
    pub fn bot(response: &ChatResponse) -> Self {
        Self {
            role: Role::Bot,
            display_text: sanitize_text(&response.text),
            kind: response.kind,
            books: response.books.iter().map(sanitize_book).collect(),
            timestamp: Utc::now().timestamp(),
        }
    }

    /// Plain-text bot entry, used for the fixed failure apology.
    pub fn bot_plain(text: &str) -> Self {
        Self {
            role: Role::Bot,
            display_text: sanitize_text(text),
            kind: MessageKind::Plain,
            books: Vec::new(),
            timestamp: Utc::now().timestamp(),
        }
    }
}

/// A single item in the transcript — a message entry or a chip panel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum TranscriptItem {
    Entry(TranscriptEntry),
    SuggestionPanel(Vec<String>),
}

/// A completed request/response pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Exchange {
    pub user: String,
    pub bot: String,
    pub timestamp: i64,
}

/// Append-only conversation log. Items go in through the push methods
/// and are only ever read back out.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Transcript {
    items: Vec<TranscriptItem>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TranscriptItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push_entry(&mut self, entry: TranscriptEntry) {
        self.items.push(TranscriptItem::Entry(entry));
    }

    /// Appends a new chip panel. Panels are never deduplicated; each call
    /// adds one below the existing transcript content.
    pub fn push_suggestions(&mut self, labels: Vec<String>) {
        let labels: Vec<String> = labels.iter().map(|l| sanitize_text(l)).collect();
        self.items.push(TranscriptItem::SuggestionPanel(labels));
    }

    /// Number of message entries (panels excluded).
    pub fn entry_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, TranscriptItem::Entry(_)))
            .count()
    }
}

/// Strips control characters from untrusted text, keeping `\n` and `\t`.
/// This is what stands between server/user text and the terminal: escape
/// sequences (ESC, CSI bytes) never survive to the render path.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

fn sanitize_book(book: &BookSummary) -> BookSummary {
    BookSummary {
        title: sanitize_text(&book.title),
        author: sanitize_text(&book.author),
        genre: book.genre.as_deref().map(sanitize_text),
        rating: book.rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_escape_sequences() {
        assert_eq!(sanitize_text("\x1b[31mred\x1b[0m"), "[31mred[0m");
        assert_eq!(sanitize_text("plain"), "plain");
    }

    #[test]
    fn test_sanitize_keeps_newlines_and_tabs() {
        assert_eq!(sanitize_text("line one\nline two"), "line one\nline two");
        assert_eq!(sanitize_text("a\tb"), "a\tb");
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_text("  hello  "), "hello");
    }

    #[test]
    fn test_user_entry_is_plain() {
        let entry = TranscriptEntry::user("recommend a book");
        assert_eq!(entry.role, Role::User);
        assert_eq!(entry.kind, MessageKind::Plain);
        assert!(entry.books.is_empty());
    }

    #[test]
    fn test_bot_entry_carries_books() {
        let response = ChatResponse {
            text: "Here you go:".to_string(),
            kind: MessageKind::BookList,
            books: vec![BookSummary {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                genre: Some("Sci-Fi".to_string()),
                rating: Some(5.0),
            }],
            suggestions: vec![],
        };
        let entry = TranscriptEntry::bot(&response);
        assert_eq!(entry.role, Role::Bot);
        assert_eq!(entry.kind, MessageKind::BookList);
        assert_eq!(entry.books.len(), 1);
    }

    #[test]
    fn test_bot_entry_sanitizes_book_fields() {
        let response = ChatResponse {
            text: "ok".to_string(),
            kind: MessageKind::BookList,
            books: vec![BookSummary {
                title: "Du\x1bne".to_string(),
                author: "Frank\x07 Herbert".to_string(),
                genre: None,
                rating: None,
            }],
            suggestions: vec![],
        };
        let entry = TranscriptEntry::bot(&response);
        assert_eq!(entry.books[0].title, "Dune");
        assert_eq!(entry.books[0].author, "Frank Herbert");
    }

    #[test]
    fn test_transcript_appends_in_order() {
        let mut transcript = Transcript::new();
        transcript.push_entry(TranscriptEntry::user("hi"));
        transcript.push_suggestions(vec!["Fantasy".to_string()]);
        transcript.push_entry(TranscriptEntry::bot_plain("hello"));

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.entry_count(), 2);
        assert!(matches!(transcript.items()[0], TranscriptItem::Entry(_)));
        assert!(matches!(
            transcript.items()[1],
            TranscriptItem::SuggestionPanel(_)
        ));
    }

    #[test]
    fn test_panels_are_not_deduplicated() {
        let mut transcript = Transcript::new();
        transcript.push_suggestions(vec!["Fantasy".to_string()]);
        transcript.push_suggestions(vec!["Fantasy".to_string()]);
        assert_eq!(transcript.len(), 2);
    }
}
