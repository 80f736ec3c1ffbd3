//! Frame layout and mouse hit testing.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MessageList, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let input_height = tui.input_box.calculate_height(frame.area().width);
    let layout = Layout::vertical([Length(1), Min(0), Length(input_height)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    TitleBar::new(
        app.backend.name().to_string(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    MessageList::new(
        &mut tui.message_list,
        &app.transcript,
        app.typing.is_visible(),
        tui.theme,
        spinner_frame,
    )
    .render(frame, main_area);

    tui.input_box.render(frame, input_area);
}

/// Resolves a screen row to a transcript item and the row within it.
///
/// Walks the cached prefix heights the same way the renderer laid items
/// out, so clicks land on exactly what the user sees. Returns
/// `(item_index, row_within_item)`.
pub fn hit_test_item(
    screen_y: u16,
    frame_area: Rect,
    scroll_offset_y: u16,
    item_heights: &[u16],
    input_height: u16,
) -> Option<(usize, u16)> {
    use Constraint::{Length, Min};

    let layout = Layout::vertical([Length(1), Min(0), Length(input_height)]);
    let [_title_area, main_area, _input_area] = layout.areas(frame_area);

    if screen_y < main_area.y || screen_y >= main_area.y + main_area.height {
        return None;
    }

    // Convert screen Y to content Y (accounting for scroll)
    let content_y = (screen_y - main_area.y) + scroll_offset_y;

    let mut accumulated_height: u16 = 0;
    for (index, &height) in item_heights.iter().enumerate() {
        if content_y < accumulated_height + height {
            return Some((index, content_y - accumulated_height));
        }
        accumulated_height += height;
    }

    None // Below all content
}
