//! # TitleBar Component
//!
//! Top status bar: backend name plus the current status message.
//! Purely presentational — all fields are props, no internal state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Backend name (e.g. "http")
    pub backend_name: String,
    /// Status message (e.g. "Waiting for a reply...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(backend_name: String, status_message: String) -> Self {
        Self {
            backend_name,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("bookchat ({})", self.backend_name)
        } else {
            format!("bookchat ({}) | {}", self.backend_name, self.status_message)
        };
        frame.render_widget(Span::raw(title_text), area);
    }
}
