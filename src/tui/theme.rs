//! Color palette. External code raises a payloadless `ThemeChanged`
//! signal (Ctrl+T) to request a visual refresh; the event loop swaps the
//! palette and redraws.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Style for messages the user typed.
    pub fn user(self) -> Style {
        match self {
            Theme::Dark => Style::default().fg(Color::Green),
            Theme::Light => Style::default().fg(Color::LightGreen),
        }
    }

    /// Style for bot messages and book cards.
    pub fn bot(self) -> Style {
        match self {
            Theme::Dark => Style::default().fg(Color::Blue),
            Theme::Light => Style::default().fg(Color::Cyan),
        }
    }

    /// Style for suggestion chips.
    pub fn chip(self) -> Style {
        match self {
            Theme::Dark => Style::default().fg(Color::Magenta),
            Theme::Light => Style::default().fg(Color::LightMagenta),
        }
    }

    /// Style for the typing indicator and other transient cues.
    pub fn muted(self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
