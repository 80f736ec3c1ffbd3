//! # SuggestionPanel Component
//!
//! Renders one quick-reply chip per label, in order, inside a bordered
//! panel. Panels live in the transcript like any other item; a new
//! response with suggestions appends a new panel below the previous
//! content, and old panels stay put.
//!
//! Chips are laid out one per row so that the parent's prefix-height hit
//! test can resolve a mouse click straight to a chip index (see
//! [`SuggestionPanel::chip_at_row`]). Activating a chip fills the input box with the label
//! and drives the same submit path as Enter.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Horizontal padding (per side) between the border and the chips.
const CONTENT_PAD_H: u16 = 1;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// Marker prefixing each chip label.
const CHIP_MARKER: &str = "❯ ";

pub struct SuggestionPanel<'a> {
    pub labels: &'a [String],
    pub theme: Theme,
    /// Chip under the mouse cursor, highlighted.
    pub hovered_chip: Option<usize>,
}

impl<'a> SuggestionPanel<'a> {
    pub fn new(labels: &'a [String], theme: Theme, hovered_chip: Option<usize>) -> Self {
        Self {
            labels,
            theme,
            hovered_chip,
        }
    }

    /// One row per chip. Labels are short canned questions; they render
    /// truncated rather than wrapped so the row↔chip mapping stays exact.
    pub fn calculate_height(labels: &[String]) -> u16 {
        (labels.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    /// Maps a row inside the panel (0 = top border) to a chip index.
    pub fn chip_at_row(labels: &[String], row_in_panel: u16) -> Option<usize> {
        let chip = row_in_panel.checked_sub(1)? as usize; // skip top border
        (chip < labels.len()).then_some(chip)
    }
}

impl<'a> Widget for SuggestionPanel<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = self.theme.chip();
        let border_style = style.add_modifier(Modifier::DIM);

        let lines: Vec<Line> = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let chip_style = if self.hovered_chip == Some(i) {
                    style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    style
                };
                Line::from(Span::styled(format!("{CHIP_MARKER}{label}"), chip_style))
            })
            .collect();

        let block = Block::bordered()
            .title("suggestions")
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        // No wrap: one row per chip keeps hit testing exact.
        Paragraph::new(lines).render(inner_area, buf);
    }
}

impl<'a> Component for SuggestionPanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            SuggestionPanel {
                labels: self.labels,
                theme: self.theme,
                hovered_chip: self.hovered_chip,
            },
            area,
        );
    }
}
