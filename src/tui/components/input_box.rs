//! # InputBox Component
//!
//! Single-field text input. Enter submits; a suggestion chip activation
//! fills the buffer and then goes through exactly the same submit event,
//! so chip-selected and typed input are indistinguishable downstream.
//!
//! The buffer is internal state; everything else arrives as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Border (1 left + 1 right) consumed horizontally by the bordered block.
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders consumed vertically.
pub const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines before the box stops growing.
const MAX_VISIBLE_LINES: u16 = 4;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Palette (prop)
    pub theme: Theme,
}

impl InputBox {
    pub fn new(theme: Theme) -> Self {
        Self {
            buffer: String::new(),
            theme,
        }
    }

    /// Replaces the buffer content. Used by suggestion chip activation
    /// ("set the input to the label, then submit").
    pub fn set_content(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    /// Required height for the current buffer, clamped to the viewport limit.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if inner == 0 || self.buffer.is_empty() {
            return 1 + VERTICAL_OVERHEAD;
        }
        let options = textwrap::Options::new(inner as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        let lines = textwrap::wrap(&self.buffer, options).len().max(1) as u16;
        lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Drops the last char, respecting UTF-8 boundaries.
    fn backspace(&mut self) -> bool {
        match self.buffer.pop() {
            Some(_) => true,
            None => false,
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title("message");

        let (text, style) = if self.buffer.is_empty() {
            (
                "Ask about books... (Enter to send)".to_string(),
                self.theme.muted(),
            )
        } else {
            (self.buffer.clone(), Style::default())
        };

        let input = Paragraph::new(text)
            .block(block)
            .style(style)
            .wrap(ratatui::widgets::Wrap { trim: false });
        frame.render_widget(input, area);
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.push_str(text);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => self.backspace().then_some(InputEvent::ContentChanged),
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    // Empty submissions are silently dropped; the buffer
                    // keeps whatever whitespace the user typed.
                    None
                } else {
                    let text = std::mem::take(&mut self.buffer);
                    Some(InputEvent::Submit(text))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new(Theme::Dark);
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new(Theme::Dark);

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut input = InputBox::new(Theme::Dark);
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut input = InputBox::new(Theme::Dark);
        input.buffer = "café".to_string();
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "caf");
    }

    #[test]
    fn test_submit_clears_buffer() {
        let mut input = InputBox::new(Theme::Dark);
        input.buffer = "hello".to_string();

        let res = input.handle_event(&TuiEvent::Submit);
        match res {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "hello"),
            other => panic!("Expected Submit event, got {:?}", other),
        }
        assert!(input.buffer.is_empty(), "Buffer should be cleared after submit");
    }

    #[test]
    fn test_submit_whitespace_only_emits_nothing() {
        let mut input = InputBox::new(Theme::Dark);
        input.buffer = "   ".to_string();
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_set_content_then_submit_matches_typed() {
        let mut input = InputBox::new(Theme::Dark);
        input.set_content("Search for Stephen King");
        match input.handle_event(&TuiEvent::Submit) {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "Search for Stephen King"),
            other => panic!("Expected Submit event, got {:?}", other),
        }
    }

    #[test]
    fn test_calculate_height_grows_with_content() {
        let mut input = InputBox::new(Theme::Dark);
        assert_eq!(input.calculate_height(20), 1 + VERTICAL_OVERHEAD);
        input.buffer = "a".repeat(40);
        assert!(input.calculate_height(20) > 1 + VERTICAL_OVERHEAD);
    }
}
