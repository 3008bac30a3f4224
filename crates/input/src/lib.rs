//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`] and
//! [`crate::types::PointerEvent`]. Nothing here touches the board; the session
//! decides what an event means.

pub mod map;

pub use tui_chess_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
