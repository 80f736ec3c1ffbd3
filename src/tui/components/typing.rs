//! # TypingRow Component
//!
//! The visual half of the typing indicator: an animated "bot is typing"
//! row pinned below the last transcript item while a response is
//! pending. Visibility itself lives in core state
//! ([`TypingIndicator`](crate::core::state::TypingIndicator)); this
//! widget only draws the cue when asked.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Cycling animation frames.
const FRAMES: &[&str] = &["·  ", "·· ", "···", " ··", "  ·"];

/// Height of the indicator row.
pub const TYPING_ROW_HEIGHT: u16 = 1;

pub struct TypingRow {
    pub theme: Theme,
    pub spinner_frame: usize,
}

impl TypingRow {
    pub fn new(theme: Theme, spinner_frame: usize) -> Self {
        Self {
            theme,
            spinner_frame,
        }
    }
}

impl Widget for TypingRow {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let frame_glyph = FRAMES[self.spinner_frame % FRAMES.len()];
        let line = Line::from(Span::styled(
            format!(" bot is typing {frame_glyph}"),
            self.theme.muted(),
        ));
        Paragraph::new(line).render(area, buf);
    }
}

impl Component for TypingRow {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            TypingRow {
                theme: self.theme,
                spinner_frame: self.spinner_frame,
            },
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_row_renders_cue() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut row = TypingRow::new(Theme::Dark, 0);
                Component::render(&mut row, f, f.area());
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("bot is typing"));
    }

    #[test]
    fn test_spinner_frame_wraps() {
        // Any frame index is valid; rendering must not panic.
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut row = TypingRow::new(Theme::Dark, usize::MAX);
                Component::render(&mut row, f, f.area());
            })
            .unwrap();
    }
}
