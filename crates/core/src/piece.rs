//! Piece entity and its stable roster index.

use std::fmt;

use crate::types::{Color, PieceKind, Position, Role};

/// Stable index of a piece in the board's roster.
///
/// Tiles refer to their occupant through this index rather than holding the
/// piece itself, so the roster is the only owner of piece state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(u8);

impl PieceId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u8)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    position: Position,
    captured: bool,
    moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, position: Position) -> Self {
        Self {
            kind,
            position,
            captured: false,
            moved: false,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    pub fn is_white(&self) -> bool {
        self.color() == Color::White
    }

    pub fn role(&self) -> Role {
        self.kind.role()
    }

    pub fn glyph(&self) -> &'static str {
        self.kind.glyph()
    }

    pub fn notation(&self) -> &'static str {
        self.kind.notation()
    }

    /// Current square. For a captured piece this is the square it was taken on.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Override the moved flag (e.g. when setting up a position by hand).
    pub fn set_moved(&mut self, moved: bool) {
        self.moved = moved;
    }

    // Position and capture state only change through `Board::apply_move`,
    // which keeps the tile grid in sync.
    pub(crate) fn relocate(&mut self, to: Position) {
        self.position = to;
        self.moved = true;
    }

    pub(crate) fn capture(&mut self) {
        self.captured = true;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.notation(), self.position)
    }
}
