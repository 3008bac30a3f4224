//! Terminal front end for the chess board.
//!
//! Rendering is split the way a small game renderer would split it:
//! - [`game_view`] lays the board out and paints it into a [`FrameBuffer`]
//! - [`renderer`] owns the terminal and flushes only the cells that changed
//!
//! The layout produced by [`GameView::geometry`] is the same one used to turn
//! mouse coordinates back into squares.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_chess_core as core;
pub use tui_chess_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
