//! # Message Component
//!
//! Renders a single transcript entry with role-based styling. This is
//! the polymorphic half of the transcript view: a plain entry is its
//! text with literal line breaks preserved; a book-list entry is a
//! heading followed by one card per book, in service order.
//!
//! `Message` is a transient component: created fresh each frame with
//! the data it needs, holding no mutable state.
//!
//! # Height Calculation
//!
//! [`calculate_height`](Message::calculate_height) predicts rendered
//! height with `textwrap` options matching Ratatui's `Paragraph`
//! wrapping, so the parent `MessageList` can lay out scroll positions
//! without rendering anything.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::api::types::format_rating;
use crate::core::transcript::{Role, TranscriptEntry};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// Marker prefixing each book card's title line.
const CARD_MARKER: &str = "▸ ";

/// One logical display line, before terminal-width wrapping.
enum DisplayLine {
    Text(String),
    Blank,
    CardTitle(String),
    CardDetail(String),
}

impl DisplayLine {
    fn text(&self) -> &str {
        match self {
            DisplayLine::Text(s) | DisplayLine::CardTitle(s) | DisplayLine::CardDetail(s) => s,
            DisplayLine::Blank => "",
        }
    }
}

/// Builds the logical lines for an entry: just the text for plain
/// entries, heading + cards for book lists.
fn display_lines(entry: &TranscriptEntry) -> Vec<DisplayLine> {
    let mut lines: Vec<DisplayLine> = entry
        .display_text
        .lines()
        .map(|l| DisplayLine::Text(l.to_string()))
        .collect();
    if lines.is_empty() {
        lines.push(DisplayLine::Blank);
    }

    for book in &entry.books {
        lines.push(DisplayLine::Blank);
        lines.push(DisplayLine::CardTitle(format!(
            "{}{}",
            CARD_MARKER, book.title
        )));
        lines.push(DisplayLine::CardDetail(format!("by {}", book.author)));
        if let Some(genre) = &book.genre {
            lines.push(DisplayLine::CardDetail(genre.clone()));
        }
        if let Some(rating) = book.rating {
            lines.push(DisplayLine::CardDetail(format!("★ {}", format_rating(rating))));
        }
    }

    lines
}

/// A stateless component that renders one transcript entry.
pub struct Message<'a> {
    pub entry: &'a TranscriptEntry,
    pub theme: Theme,
}

impl<'a> Message<'a> {
    pub fn new(entry: &'a TranscriptEntry, theme: Theme) -> Self {
        Self { entry, theme }
    }

    /// Calculate the height required for this entry at the given width.
    ///
    /// Wrapping options must match the Ratatui `Paragraph` defaults so
    /// calculated and actual heights map 1:1.
    pub fn calculate_height(entry: &TranscriptEntry, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for borders + padding; still occupy a row.
            return 1;
        }

        let content_height: u16 = display_lines(entry)
            .iter()
            .map(|line| {
                let text = line.text();
                if text.is_empty() {
                    return 1;
                }
                let options = textwrap::Options::new(content_width as usize)
                    .break_words(true)
                    .word_separator(textwrap::WordSeparator::AsciiSpace);
                textwrap::wrap(text, options).len().max(1) as u16
            })
            .sum::<u16>()
            .max(1);

        content_height + VERTICAL_OVERHEAD
    }
}

impl<'a> Widget for Message<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let (role, style) = match self.entry.role {
            Role::User => ("you", self.theme.user()),
            Role::Bot => ("bot", self.theme.bot()),
        };

        let border_style = style.add_modifier(Modifier::DIM);

        let lines: Vec<Line> = display_lines(self.entry)
            .into_iter()
            .map(|line| match line {
                DisplayLine::Text(s) => Line::from(Span::styled(s, style)),
                DisplayLine::Blank => Line::default(),
                DisplayLine::CardTitle(s) => {
                    Line::from(Span::styled(s, style.add_modifier(Modifier::BOLD)))
                }
                DisplayLine::CardDetail(s) => {
                    Line::from(Span::styled(s, style.add_modifier(Modifier::DIM)))
                }
            })
            .collect();

        let block = Block::bordered()
            .title(role)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

/// `Message` is stateless; `Component` delegates to the [`Widget`] impl.
impl<'a> Component for Message<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Message {
                entry: self.entry,
                theme: self.theme,
            },
            area,
        );
    }
}
