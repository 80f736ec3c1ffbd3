//! # MessageList Component
//!
//! Scrollable view of the transcript.
//!
//! ## Responsibilities
//!
//! - Display transcript items (entries and suggestion panels)
//! - Append the typing indicator row while a response is pending
//! - Manage scrolling, with stick-to-bottom so the newest entry is
//!   always revealed after insertion
//! - Cache item heights so scroll math never re-wraps old messages
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) wrapping
//! `&'a mut MessageListState` (persistent state) and the transcript
//! (props). Since `Component::render` takes `&mut self`, state
//! (layout cache, scroll position) mutates safely during the render
//! pass, aligning with Ratatui's `StatefulWidget` pattern.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::transcript::{Transcript, TranscriptItem};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::Message;
use crate::tui::components::suggestions::SuggestionPanel;
use crate::tui::components::typing::{TYPING_ROW_HEIGHT, TypingRow};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Layout and scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Chip under the mouse: (transcript item index, chip index)
    pub hovered_chip: Option<(usize, usize)>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true, // Start attached to bottom
            hovered_chip: None,
            viewport_height: 0,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last item.
    pub fn clamp_scroll(&mut self) {
        let total_content_height: u16 = self.layout.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the
    /// bottom. Called on scroll-down events so that scrolling past the
    /// end re-pins to bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let total_content_height: u16 = self.layout.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Scrollable transcript view component.
/// Created fresh each frame with references to state and data.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub transcript: &'a Transcript,
    pub typing_visible: bool,
    pub theme: Theme,
    pub spinner_frame: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        transcript: &'a Transcript,
        typing_visible: bool,
        theme: Theme,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            transcript,
            typing_visible,
            theme,
            spinner_frame,
        }
    }

    fn item_height(item: &TranscriptItem, width: u16) -> u16 {
        match item {
            TranscriptItem::Entry(entry) => Message::calculate_height(entry, width),
            TranscriptItem::SuggestionPanel(labels) => SuggestionPanel::calculate_height(labels),
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let items = self.transcript.items();

        // 1. Update layout cache. Entries are immutable once appended, so
        // cached heights stay valid until the width changes.
        let layout = &mut self.state.layout;
        let reusable = layout.reusable_count(items.len(), content_width);
        layout.heights.truncate(reusable);
        for item in items.iter().skip(layout.heights.len()) {
            layout.heights.push(Self::item_height(item, content_width));
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(items.len(), content_width);

        let total_height: u16 = self.state.layout.heights.iter().sum();
        let typing_height = if self.typing_visible {
            TYPING_ROW_HEIGHT
        } else {
            0
        };
        let canvas_height = (total_height + typing_height).max(1);

        // 2. Clamp scroll offset unless auto-scrolling to the bottom.
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible items into a ScrollView.
        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = if visible_range.start > 0 {
            self.state.layout.prefix_heights[visible_range.start - 1]
        } else {
            0
        };

        for i in visible_range {
            let item = &items[i];
            let height = self.state.layout.heights[i];
            let item_rect = Rect::new(0, y_offset, content_width, height);

            match item {
                TranscriptItem::Entry(entry) => {
                    scroll_view.render_widget(Message::new(entry, self.theme), item_rect);
                }
                TranscriptItem::SuggestionPanel(labels) => {
                    let hovered = self
                        .state
                        .hovered_chip
                        .and_then(|(item_idx, chip)| (item_idx == i).then_some(chip));
                    scroll_view
                        .render_widget(SuggestionPanel::new(labels, self.theme, hovered), item_rect);
                }
            }

            y_offset += height;
        }

        // Typing indicator sits below the last item; at most one row.
        if self.typing_visible {
            let typing_rect = Rect::new(0, total_height, content_width, TYPING_ROW_HEIGHT);
            scroll_view.render_widget(TypingRow::new(self.theme, self.spinner_frame), typing_rect);
        }

        // Auto-scroll: reveal the newest entry after insertion.
        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// EventHandler is implemented on `MessageListState` rather than
/// `MessageList` because event handling requires persistent state and
/// `MessageList` is recreated each frame with fresh props.
impl EventHandler for MessageListState {
    type Event = (); // Scrolling is handled internally.

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollToBottom => {
                self.stick_to_bottom = true;
                None
            }
            // Mouse events are handled by the parent via hit testing.
            _ => None,
        }
    }
}

/// Cached layout measurements
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    item_count: usize,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            item_count: 0,
            content_width: 0,
        }
    }

    /// How many cached heights are still valid. The transcript is
    /// append-only, so everything is reusable unless the width changed
    /// (or the item count shrank, which means a fresh session).
    pub fn reusable_count(&self, item_count: usize, content_width: u16) -> usize {
        if self.content_width != content_width || item_count < self.item_count {
            return 0;
        }
        self.heights.len().min(item_count)
    }

    pub fn update_metadata(&mut self, item_count: usize, content_width: u16) {
        self.item_count = item_count;
        self.content_width = content_width;
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc += h;
                Some(*acc)
            })
            .collect();
    }

    pub fn visible_range(
        &self,
        scroll_offset: u16,
        viewport_height: u16,
    ) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with_heights(heights: &[u16], width: u16) -> LayoutCache {
        let mut cache = LayoutCache::new();
        cache.heights = heights.to_vec();
        cache.rebuild_prefix_heights();
        cache.update_metadata(heights.len(), width);
        cache
    }

    #[test]
    fn test_prefix_heights_are_cumulative() {
        let cache = cache_with_heights(&[3, 4, 5], 80);
        assert_eq!(cache.prefix_heights, vec![3, 7, 12]);
    }

    #[test]
    fn test_reusable_count_appends_keep_cache() {
        let cache = cache_with_heights(&[3, 4], 80);
        assert_eq!(cache.reusable_count(3, 80), 2);
    }

    #[test]
    fn test_reusable_count_invalidated_by_width_change() {
        let cache = cache_with_heights(&[3, 4], 80);
        assert_eq!(cache.reusable_count(2, 60), 0);
    }

    #[test]
    fn test_reusable_count_invalidated_by_shrink() {
        let cache = cache_with_heights(&[3, 4, 5], 80);
        assert_eq!(cache.reusable_count(1, 80), 0);
    }

    #[test]
    fn test_visible_range_covers_viewport() {
        // Three items of height 10 in a 10-row viewport; the buffered
        // range around offset 0 must include at least the first item.
        let cache = cache_with_heights(&[10, 10, 10], 80);
        let range = cache.visible_range(0, 10);
        assert!(range.contains(&0));
        assert!(!range.contains(&2) || range.end <= 3);
    }

    #[test]
    fn test_scroll_up_releases_stick_to_bottom() {
        let mut state = MessageListState::new();
        assert!(state.stick_to_bottom);
        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);
    }

    #[test]
    fn test_scroll_to_bottom_re_pins() {
        let mut state = MessageListState::new();
        state.handle_event(&TuiEvent::ScrollUp);
        state.handle_event(&TuiEvent::ScrollToBottom);
        assert!(state.stick_to_bottom);
    }
}
