//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm; the
//! core controller never sees a rendering surface.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (typing indicator visible): draws every ~120ms so the
//!   indicator frames cycle smoothly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::cursor::Hide;
use crossterm::execute;
use log::{debug, info, warn};

use crate::api::{ChatBackend, HttpChatBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::transcript::TranscriptItem;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState, SuggestionPanel};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
    pub theme: Theme,
}

impl TuiState {
    pub fn new() -> Self {
        let theme = Theme::Dark;
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(theme),
            theme,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn ChatBackend> = Arc::new(HttpChatBackend::new(config.base_url.clone()));
    let mut app = App::new(backend);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // One-shot startup fetch of the initial suggestion chips.
    spawn_suggestion_fetch(&app, config.suggestion_delay_ms, tx.clone());

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Keep the input box palette in sync with the active theme.
        tui.input_box.theme = tui.theme;

        let animating = app.typing.is_visible();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(120)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }

                // Payloadless visual-refresh signal: swap palette, redraw.
                TuiEvent::ThemeChanged => {
                    tui.theme = tui.theme.toggled();
                    debug!("Theme changed to {:?}", tui.theme);
                }

                TuiEvent::MouseMove(_col, row) => {
                    let frame_area = terminal.get_frame().area();
                    tui.message_list.hovered_chip = chip_hit_test(&app, &tui, frame_area, row);
                }

                TuiEvent::MouseClick(_col, row) => {
                    let frame_area = terminal.get_frame().area();
                    if let Some((item_idx, chip_idx)) = chip_hit_test(&app, &tui, frame_area, row)
                        && let Some(TranscriptItem::SuggestionPanel(labels)) =
                            app.transcript.items().get(item_idx)
                    {
                        // Chip activation: fill the input with the label,
                        // then go through the exact same submit path as
                        // Enter on typed text.
                        let label = labels[chip_idx].clone();
                        tui.input_box.set_content(&label);
                        if let Some(InputEvent::Submit(text)) =
                            tui.input_box.handle_event(&TuiEvent::Submit)
                        {
                            dispatch(&mut app, Action::Submit(text), &tx);
                        }
                    }
                }

                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown
                | TuiEvent::ScrollToBottom => {
                    tui.message_list.handle_event(&event);
                }

                // Everything else is text input.
                _ => {
                    if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&event) {
                        dispatch(&mut app, Action::Submit(text), &tx);
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (responses, suggestion loads)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(&mut app, action, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs an action through the reducer and performs the resulting effect.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) {
    match update(app, action) {
        Effect::SpawnRequest(message) => spawn_request(app, message, tx.clone()),
        Effect::Quit | Effect::None => {}
    }
}

/// Resolves a mouse row to a suggestion chip, if one is under it.
fn chip_hit_test(
    app: &App,
    tui: &TuiState,
    frame_area: ratatui::layout::Rect,
    row: u16,
) -> Option<(usize, usize)> {
    let scroll_offset = tui.message_list.scroll_state.offset().y;
    let input_height = tui.input_box.calculate_height(frame_area.width);

    let (item_idx, row_in_item) = ui::hit_test_item(
        row,
        frame_area,
        scroll_offset,
        &tui.message_list.layout.heights,
        input_height,
    )?;

    match app.transcript.items().get(item_idx)? {
        TranscriptItem::SuggestionPanel(labels) => {
            SuggestionPanel::chip_at_row(labels, row_in_item).map(|chip| (item_idx, chip))
        }
        TranscriptItem::Entry(_) => None,
    }
}

/// Issues the chatbot request for one submitted message.
///
/// The user entry is already in the transcript and the input field is
/// already cleared by the time this runs; the reducer ordered those
/// strictly before returning `Effect::SpawnRequest`.
fn spawn_request(app: &App, message: String, tx: mpsc::Sender<Action>) {
    info!("Spawning chatbot request");
    let backend = app.backend.clone();
    tokio::spawn(async move {
        let action = match backend.send_message(&message).await {
            Ok(response) => Action::ResponseReceived {
                request: message,
                response,
            },
            Err(e) => Action::RequestFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send response action: receiver dropped");
        }
    });
}

/// One-shot startup fetch of the initial suggestion chips.
///
/// Fire-and-forget: a failure is logged and renders nothing; the
/// conversation state is never touched. On success the chips appear
/// after a fixed display delay.
fn spawn_suggestion_fetch(app: &App, delay_ms: u64, tx: mpsc::Sender<Action>) {
    let backend = app.backend.clone();
    tokio::spawn(async move {
        match backend.fetch_suggestions().await {
            Ok(labels) => {
                info!("Fetched {} startup suggestions", labels.len());
                tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
                if tx.send(Action::SuggestionsLoaded(labels)).is_err() {
                    warn!("Failed to send suggestions action: receiver dropped");
                }
            }
            Err(e) => {
                warn!("Startup suggestion fetch failed: {}", e);
            }
        }
    });
}
