//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no UI or I/O dependencies, making them
//! usable in any context (board logic, move generation, terminal rendering).
//!
//! # Board Coordinates
//!
//! - **Ranks**: 1-8, rank 1 is White's back rank
//! - **Files**: a-h, file a is on White's left
//! - **Positions** print file-then-rank (`e4`)
//!
//! Directional steps are named after the side of the board they move toward:
//!
//! | Direction | Axis | Delta |
//! |-----------|------|-------|
//! | `TowardBlack` | rank | +n |
//! | `TowardWhite` | rank | -n |
//! | `TowardA` | file | -n |
//! | `TowardH` | file | +n |
//!
//! Every step is bounds-checked and yields [`ChessError::OutOfRange`] when it
//! would leave the board.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DEFAULT_CLOCK_MS` | 600000 | Countdown clock at game start (10 minutes) |
//!
//! # Examples
//!
//! ```
//! use tui_chess_types::{Direction, File, PieceKind, Position, Rank};
//!
//! let e2 = Position::from_parts(Rank::R2, File::E);
//! assert_eq!(e2.to_string(), "e2");
//!
//! // Steps compose into diagonals.
//! let d3 = e2.toward(Direction::TowardBlack, 1).and_then(|p| p.to_a(1)).unwrap();
//! assert_eq!(d3.to_string(), "d3");
//!
//! // Stepping off the board is an error, not a wrapped coordinate.
//! assert!(e2.to_white(2).is_err());
//!
//! assert_eq!(PieceKind::WhiteKnight.notation(), "N");
//! assert_eq!(PieceKind::BlackPawn.notation(), "");
//! ```

mod coord;
mod error;

pub use coord::{Direction, File, Position, Rank};
pub use error::ChessError;

/// Board edge length in tiles (8 ranks, 8 files)
pub const BOARD_SIZE: u8 = 8;

/// Number of pieces in the standard starting layout
pub const PIECE_COUNT: usize = 32;

/// Upper bound on pseudo-legal destinations for a single piece (a centralized queen)
pub const MAX_MOVES: usize = 27;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Countdown clock at game start (10 minutes)
pub const DEFAULT_CLOCK_MS: u32 = 10 * 60 * 1000;

/// Default tile width in terminal columns
pub const DEFAULT_TILE_WIDTH: u16 = 3;

/// Default tile height in terminal rows (label row + glyph row)
pub const DEFAULT_TILE_HEIGHT: u16 = 2;


/// The two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Direction a pawn of this color advances
    pub fn forward(self) -> Direction {
        match self {
            Color::White => Direction::TowardBlack,
            Color::Black => Direction::TowardWhite,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// The six piece roles, independent of color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];
}

/// The twelve piece identities (color × role)
///
/// Discriminants index the glyph and notation tables:
/// White pieces occupy 0-5, Black pieces 6-11, in role order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,

    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
}

/// Display glyphs, indexed by `PieceKind as usize`.
///
/// White uses the filled set so it reads as the brighter side on dark terminals.
const GLYPHS: [&str; 12] = [
    "♟", "♞", "♝", "♜", "♛", "♚", //
    "♙", "♘", "♗", "♖", "♕", "♔",
];

/// Algebraic notation letters, indexed by `PieceKind as usize`.
const NOTATION: [&str; 12] = [
    "", "N", "B", "R", "Q", "K", //
    "", "N", "B", "R", "Q", "K",
];

impl PieceKind {
    pub const ALL: [PieceKind; 12] = [
        PieceKind::WhitePawn,
        PieceKind::WhiteKnight,
        PieceKind::WhiteBishop,
        PieceKind::WhiteRook,
        PieceKind::WhiteQueen,
        PieceKind::WhiteKing,
        PieceKind::BlackPawn,
        PieceKind::BlackKnight,
        PieceKind::BlackBishop,
        PieceKind::BlackRook,
        PieceKind::BlackQueen,
        PieceKind::BlackKing,
    ];

    /// Build a kind from its color and role
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_chess_types::{Color, PieceKind, Role};
    ///
    /// assert_eq!(PieceKind::new(Color::Black, Role::Queen), PieceKind::BlackQueen);
    /// ```
    pub fn new(color: Color, role: Role) -> Self {
        let offset = match color {
            Color::White => 0,
            Color::Black => 6,
        };
        let role_idx = match role {
            Role::Pawn => 0,
            Role::Knight => 1,
            Role::Bishop => 2,
            Role::Rook => 3,
            Role::Queen => 4,
            Role::King => 5,
        };
        Self::ALL[offset + role_idx]
    }

    pub fn color(&self) -> Color {
        if (*self as usize) < 6 {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn role(&self) -> Role {
        Role::ALL[(*self as usize) % 6]
    }

    /// Unicode glyph used on the board
    pub fn glyph(&self) -> &'static str {
        GLYPHS[*self as usize]
    }

    /// Algebraic notation letter; empty for pawns
    pub fn notation(&self) -> &'static str {
        NOTATION[*self as usize]
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Pointer event kinds the board reacts to
///
/// - **Moved**: continuous pointer movement (drives hover)
/// - **Released**: a discrete click release (drives selection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Moved,
    Released,
}

/// A pointer event in terminal cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: u16,
    pub y: u16,
}

impl PointerEvent {
    pub fn moved(x: u16, y: u16) -> Self {
        Self {
            kind: PointerKind::Moved,
            x,
            y,
        }
    }

    pub fn released(x: u16, y: u16) -> Self {
        Self {
            kind: PointerKind::Released,
            x,
            y,
        }
    }
}

/// Session-level actions triggered from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reset the board to the standard layout and restart the clock
    Restart,
    /// Pause or resume the countdown clock
    ToggleClock,
}
