//! Interaction state machine - pointer coordinates to hover/selection flags
//!
//! The rendering layer owns layout and hands over a [`BoardGeometry`]
//! describing where the 8x8 grid sits in terminal cells. Pointer events are
//! resolved against it with inclusive-low / exclusive-high tile bounds, so
//! every cell inside the grid maps to exactly one tile.
//!
//! Hover and selection are two independent exclusive flags over the same grid:
//! setting one tile clears the same flag everywhere else. Selecting a tile
//! also refreshes the potential-move highlights for its occupant.

use tracing::debug;

use crate::board::Board;
use crate::types::{File, Position, Rank, BOARD_SIZE};

/// Screen placement of the board grid in terminal cells.
///
/// Screen row 0 is rank 8 (White plays from the bottom), column 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardGeometry {
    pub origin_x: u16,
    pub origin_y: u16,
    pub tile_w: u16,
    pub tile_h: u16,
}

impl BoardGeometry {
    pub fn new(origin_x: u16, origin_y: u16, tile_w: u16, tile_h: u16) -> Self {
        Self {
            origin_x,
            origin_y,
            tile_w,
            tile_h,
        }
    }

    /// Grid width in terminal columns
    pub fn width(&self) -> u16 {
        self.tile_w.saturating_mul(BOARD_SIZE as u16)
    }

    /// Grid height in terminal rows
    pub fn height(&self) -> u16 {
        self.tile_h.saturating_mul(BOARD_SIZE as u16)
    }

    /// Tile under the terminal cell `(x, y)`, if any
    pub fn position_at(&self, x: u16, y: u16) -> Option<Position> {
        if self.tile_w == 0 || self.tile_h == 0 || x < self.origin_x || y < self.origin_y {
            return None;
        }
        let col = (x - self.origin_x) / self.tile_w;
        let row = (y - self.origin_y) / self.tile_h;
        if col >= BOARD_SIZE as u16 || row >= BOARD_SIZE as u16 {
            return None;
        }
        let rank = Rank::ALL[(BOARD_SIZE as u16 - 1 - row) as usize];
        let file = File::ALL[col as usize];
        Some(Position::from_parts(rank, file))
    }

    /// Top-left terminal cell of a tile
    pub fn tile_origin(&self, position: Position) -> (u16, u16) {
        let col = position.file.index() as u16;
        let row = (BOARD_SIZE as usize - 1 - position.rank.index()) as u16;
        (
            self.origin_x.saturating_add(col.saturating_mul(self.tile_w)),
            self.origin_y.saturating_add(row.saturating_mul(self.tile_h)),
        )
    }
}

impl Board {
    /// Hover whichever tile lies under the pointer.
    ///
    /// A pointer outside the grid clears the hover.
    pub fn hover_at(&mut self, geometry: &BoardGeometry, x: u16, y: u16) -> Option<Position> {
        let target = geometry.position_at(x, y);
        self.set_hovered(target);
        target
    }

    /// Select whichever tile lies under the pointer.
    ///
    /// A click outside the grid is ignored and keeps the current selection.
    pub fn select_at(&mut self, geometry: &BoardGeometry, x: u16, y: u16) -> Option<Position> {
        let target = geometry.position_at(x, y)?;
        self.select(target);
        Some(target)
    }

    /// Make `target` the only hovered tile, or clear hover with `None`.
    pub fn set_hovered(&mut self, target: Option<Position>) {
        for tile in self.tiles_mut() {
            let on = Some(tile.position()) == target;
            tile.set_hovered(on);
        }
    }

    /// Make `target` the only selected tile and highlight its occupant's
    /// landing squares. Selecting an empty tile leaves no highlights.
    ///
    /// Re-selecting the selected tile keeps it selected; there is no
    /// deselect-by-click.
    pub fn select(&mut self, target: Position) {
        let highlights = self
            .piece_id_at(target)
            .map(|id| self.landing_targets(id))
            .unwrap_or_default();

        for tile in self.tiles_mut() {
            let pos = tile.position();
            tile.set_selected(pos == target);
            tile.set_potential_move(highlights.contains(&pos));
        }
        debug!(square = %target, highlights = highlights.len(), "selected");
    }

    /// Drop the selection and every potential-move highlight.
    pub fn clear_selection(&mut self) {
        for tile in self.tiles_mut() {
            tile.set_selected(false);
            tile.set_potential_move(false);
        }
    }

    pub fn hovered(&self) -> Option<Position> {
        self.tiles().find(|t| t.is_hovered()).map(|t| t.position())
    }

    pub fn selected(&self) -> Option<Position> {
        self.tiles().find(|t| t.is_selected()).map(|t| t.position())
    }

    /// Squares currently flagged as potential moves, rank 1 first
    pub fn potential_moves(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles()
            .filter(|t| t.is_potential_move())
            .map(|t| t.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_geometry_corners() {
        let g = BoardGeometry::new(10, 5, 3, 2);
        assert_eq!(g.position_at(10, 5), Some(pos("a8")));
        assert_eq!(g.position_at(33, 20), Some(pos("h1")));
        assert_eq!(g.position_at(34, 20), None);
        assert_eq!(g.position_at(33, 21), None);
        assert_eq!(g.position_at(9, 5), None);
        assert_eq!(g.position_at(10, 4), None);
    }

    #[test]
    fn test_tile_origin_inverts_position_at() {
        let g = BoardGeometry::new(2, 1, 4, 2);
        for p in Position::all() {
            let (x, y) = g.tile_origin(p);
            assert_eq!(g.position_at(x, y), Some(p));
        }
    }

    #[test]
    fn test_zero_sized_tiles_resolve_nothing() {
        let g = BoardGeometry::new(0, 0, 0, 2);
        assert_eq!(g.position_at(0, 0), None);
    }

    #[test]
    fn test_select_empty_tile_clears_highlights() {
        let mut board = Board::new();
        board.select(pos("g1"));
        assert_eq!(
            board.potential_moves().collect::<Vec<_>>(),
            vec![pos("f3"), pos("h3")]
        );

        board.select(pos("e4"));
        assert_eq!(board.selected(), Some(pos("e4")));
        assert_eq!(board.potential_moves().count(), 0);
    }

    #[test]
    fn test_clear_selection() {
        let mut board = Board::new();
        board.select(pos("e2"));
        board.clear_selection();
        assert_eq!(board.selected(), None);
        assert_eq!(board.potential_moves().count(), 0);
    }
}
