//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Two patterns, mirroring the split in the rest of the crate:
//!
//! - **Stateless (props-based)**: `TitleBar`, `Message`,
//!   `SuggestionPanel`, `TypingRow` — created fresh each frame with the
//!   data they render.
//! - **Stateful (event-driven)**: `InputBox` (text buffer),
//!   `MessageList` (scroll position, layout cache) — persistent state
//!   lives in `TuiState`, events flow through `EventHandler`.
//!
//! Each component file co-locates its state types, event types,
//! rendering logic, and tests.

pub mod input_box;
pub mod message;
pub mod message_list;
pub mod suggestions;
pub mod title_bar;
pub mod typing;

pub use input_box::{InputBox, InputEvent};
pub use message_list::{MessageList, MessageListState};
pub use suggestions::SuggestionPanel;
pub use title_bar::TitleBar;
pub use typing::TypingRow;
