//! Tile entity - one board square and its interaction flags.

use crate::piece::PieceId;
use crate::types::{File, Position, Rank};

/// One square of the board
///
/// Parity is fixed at construction. The three interaction flags are
/// independent of each other; exclusivity of hover and selection across the
/// board is maintained by the board, not the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    position: Position,
    occupant: Option<PieceId>,
    dark: bool,
    hovered: bool,
    selected: bool,
    potential_move: bool,
}

impl Tile {
    pub fn new(position: Position, occupant: Option<PieceId>) -> Self {
        Self {
            position,
            occupant,
            dark: position.is_dark(),
            hovered: false,
            selected: false,
            potential_move: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_potential_move(&self) -> bool {
        self.potential_move
    }

    /// Coordinate label drawn in the tile's corner.
    ///
    /// Rank-1 tiles carry their file letter and file-a tiles their rank digit,
    /// so a1 reads "a1" and interior tiles carry nothing.
    pub fn edge_label(&self) -> (Option<char>, Option<char>) {
        let file = (self.position.rank == Rank::R1).then(|| self.position.file.as_char());
        let rank = (self.position.file == File::A).then(|| self.position.rank.as_char());
        (file, rank)
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<PieceId>) {
        self.occupant = occupant;
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn set_potential_move(&mut self, potential_move: bool) {
        self.potential_move = potential_move;
    }
}
