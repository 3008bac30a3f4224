//! Board module - the 8x8 tile grid and the piece roster
//!
//! Pieces live in a flat roster with stable indices ([`PieceId`]); tiles hold
//! the index of their occupant. Grid storage is `[rank][file]`, rank 1 first.
//!
//! The synchronization invariant (a piece's position names the one tile that
//! holds its id; a captured piece is held by no tile) is maintained by
//! [`Board::apply_move`], the only path that moves pieces.

use arrayvec::ArrayVec;
use tracing::{debug, warn};

use crate::movegen::{moves_for, Moves};
use crate::piece::{Piece, PieceId};
use crate::tile::Tile;
use crate::types::{
    ChessError, Color, File, PieceKind, Position, Rank, Role, BOARD_SIZE, PIECE_COUNT,
};

const N: usize = BOARD_SIZE as usize;

/// Back-rank roles, files a through h
const BACK_RANK: [Role; N] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// A participant. Stored for display; turn order is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub is_active: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            is_active,
        }
    }
}

/// Result of a successfully applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    pub captured: Option<PieceId>,
}

/// The game board - 8x8 tiles plus the piece roster
#[derive(Debug, Clone)]
pub struct Board {
    tiles: [[Tile; N]; N],
    pieces: ArrayVec<Piece, PIECE_COUNT>,
    players: Vec<Player>,
}

impl Board {
    /// Standard starting layout with default player names
    pub fn new() -> Self {
        Self::with_players("White", "Black")
    }

    /// Standard starting layout; White is listed first and starts active
    pub fn with_players(white: impl Into<String>, black: impl Into<String>) -> Self {
        let mut board = Self::empty();
        board.players = vec![Player::new(white, true), Player::new(black, false)];
        board.initial_standard_layout();
        board
    }

    /// A board with no pieces and no players
    pub fn empty() -> Self {
        Self {
            tiles: std::array::from_fn(|r| {
                std::array::from_fn(|f| {
                    Tile::new(Position::from_parts(Rank::ALL[r], File::ALL[f]), None)
                })
            }),
            pieces: ArrayVec::new(),
            players: Vec::new(),
        }
    }

    /// Place both armies on their home squares.
    ///
    /// Roster order: White back rank a-h, White pawns a-h, then the same for Black.
    fn initial_standard_layout(&mut self) {
        for (color, back, pawns) in [
            (Color::White, Rank::R1, Rank::R2),
            (Color::Black, Rank::R8, Rank::R7),
        ] {
            for (file, role) in File::ALL.into_iter().zip(BACK_RANK) {
                self.place(PieceKind::new(color, role), Position::from_parts(back, file));
            }
            for file in File::ALL {
                self.place(PieceKind::new(color, Role::Pawn), Position::from_parts(pawns, file));
            }
        }
        debug!(pieces = self.pieces.len(), "standard layout placed");
    }

    /// Add a piece to the roster on an empty square.
    ///
    /// Returns `None` when the square is occupied or the roster is full.
    pub fn place(&mut self, kind: PieceKind, position: Position) -> Option<PieceId> {
        if self.tile_at(position).is_occupied() || self.pieces.is_full() {
            return None;
        }
        let id = PieceId::new(self.pieces.len());
        self.pieces.push(Piece::new(kind, position));
        self.tile_mut(position).set_occupant(Some(id));
        Some(id)
    }

    /// Tile at a position. Positions are always on the board.
    pub fn tile_at(&self, position: Position) -> &Tile {
        &self.tiles[position.rank.index()][position.file.index()]
    }

    /// Tile at raw 1-based rank/file numbers
    ///
    /// Fails with [`ChessError::OutOfRange`] when either is outside 1-8.
    pub fn tile_at_coords(&self, rank: i8, file: i8) -> Result<&Tile, ChessError> {
        Position::new(rank, file).map(|p| self.tile_at(p))
    }

    pub(crate) fn tile_mut(&mut self, position: Position) -> &mut Tile {
        &mut self.tiles[position.rank.index()][position.file.index()]
    }

    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut().flat_map(|row| row.iter_mut())
    }

    /// Grid rows, rank 1 first
    pub fn rows(&self) -> &[[Tile; N]; N] {
        &self.tiles
    }

    /// All 64 tiles, rank 1 first
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flat_map(|row| row.iter())
    }

    /// Id of the piece on a square
    pub fn piece_id_at(&self, position: Position) -> Result<PieceId, ChessError> {
        self.tile_at(position)
            .occupant()
            .ok_or(ChessError::NoPiece(position))
    }

    /// Occupant of a square; fails with [`ChessError::NoPiece`] on an empty tile
    pub fn piece_at(&self, position: Position) -> Result<&Piece, ChessError> {
        self.piece_id_at(position).map(|id| self.piece(id))
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    pub fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    /// The full roster, captured pieces included
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Color of the piece on a square, if any
    pub fn color_at(&self, position: Position) -> Option<Color> {
        self.tile_at(position)
            .occupant()
            .map(|id| self.piece(id).color())
    }

    pub fn occupied_count(&self) -> usize {
        self.tiles().filter(|t| t.is_occupied()).count()
    }

    /// Squares the piece can actually land on: its generated moves minus
    /// squares held by its own side.
    ///
    /// Pawn pushes only land on empty squares, and the double step also needs
    /// the square it passes over to be empty.
    pub fn landing_targets(&self, id: PieceId) -> Moves {
        let piece = self.piece(id);
        let mut targets = moves_for(piece, self);
        if piece.role() == Role::Pawn {
            let from = piece.position();
            let one = from.toward(piece.color().forward(), 1).ok();
            let path_blocked = one.is_some_and(|p| self.tile_at(p).is_occupied());
            targets.retain(|to| {
                to.file != from.file
                    || (!self.tile_at(*to).is_occupied() && (Some(*to) == one || !path_blocked))
            });
        }
        targets.retain(|to| self.color_at(*to) != Some(piece.color()));
        targets
    }

    /// Move the piece on `from` to `to`, capturing any enemy piece there.
    ///
    /// The destination must be one of the piece's [`landing_targets`](Self::landing_targets);
    /// anything else fails with [`ChessError::InvalidMove`] and leaves the board untouched.
    pub fn apply_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, ChessError> {
        let id = self.piece_id_at(from)?;
        if !self.landing_targets(id).contains(&to) {
            warn!(%from, %to, piece = %self.piece(id), "rejected move");
            return Err(ChessError::InvalidMove { from, to });
        }

        let captured = self.tile_at(to).occupant();
        if let Some(victim) = captured {
            self.pieces[victim.index()].capture();
        }
        self.tile_mut(from).set_occupant(None);
        self.tile_mut(to).set_occupant(Some(id));
        self.pieces[id.index()].relocate(to);

        debug!(
            %from,
            %to,
            piece = %self.piece(id),
            captured = ?captured.map(|c| self.piece(c).to_string()),
            "move applied"
        );
        Ok(MoveOutcome {
            piece: id,
            from,
            to,
            captured,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    /// Every live piece sits on the tile that names it, and nothing else does.
    fn assert_synchronized(board: &Board) {
        for (i, piece) in board.pieces().iter().enumerate() {
            let holders: Vec<_> = board
                .tiles()
                .filter(|t| t.occupant() == Some(PieceId::new(i)))
                .collect();
            if piece.is_captured() {
                assert!(holders.is_empty(), "captured {} still on a tile", piece);
            } else {
                assert_eq!(holders.len(), 1, "{} held by {} tiles", piece, holders.len());
                assert_eq!(holders[0].position(), piece.position());
            }
        }
    }

    #[test]
    fn test_grid_indexing() {
        let board = Board::empty();
        assert_eq!(board.rows()[0][0].position(), pos("a1"));
        assert_eq!(board.rows()[0][7].position(), pos("h1"));
        assert_eq!(board.rows()[7][0].position(), pos("a8"));
        assert_eq!(board.rows()[3][4].position(), pos("e4"));
    }

    #[test]
    fn test_standard_layout_roster_order() {
        let board = Board::new();
        assert_eq!(board.pieces().len(), PIECE_COUNT);
        assert_eq!(board.pieces()[0].kind(), PieceKind::WhiteRook);
        assert_eq!(board.pieces()[3].kind(), PieceKind::WhiteQueen);
        assert_eq!(board.pieces()[4].kind(), PieceKind::WhiteKing);
        assert_eq!(board.pieces()[8].kind(), PieceKind::WhitePawn);
        assert_eq!(board.pieces()[16].kind(), PieceKind::BlackRook);
        assert_eq!(board.pieces()[24].position(), pos("a7"));
        assert_synchronized(&board);
    }

    #[test]
    fn test_place_rejects_occupied_square() {
        let mut board = Board::empty();
        assert!(board.place(PieceKind::WhiteRook, pos("a1")).is_some());
        assert!(board.place(PieceKind::BlackRook, pos("a1")).is_none());
        assert_eq!(board.pieces().len(), 1);
    }

    #[test]
    fn test_place_rejects_full_roster() {
        let mut board = Board::new();
        assert!(board.place(PieceKind::WhiteQueen, pos("e4")).is_none());
    }

    #[test]
    fn test_apply_move_keeps_tiles_in_sync() {
        let mut board = Board::new();
        let out = board.apply_move(pos("e2"), pos("e4")).unwrap();
        assert_eq!(out.captured, None);
        assert!(!board.tile_at(pos("e2")).is_occupied());
        assert_eq!(board.tile_at(pos("e4")).occupant(), Some(out.piece));
        assert!(board.piece(out.piece).has_moved());
        assert_synchronized(&board);
    }

    #[test]
    fn test_apply_move_capture_clears_victim() {
        let mut board = Board::empty();
        let rook = board.place(PieceKind::WhiteRook, pos("a1")).unwrap();
        let victim = board.place(PieceKind::BlackKnight, pos("a5")).unwrap();

        let out = board.apply_move(pos("a1"), pos("a5")).unwrap();
        assert_eq!(out.piece, rook);
        assert_eq!(out.captured, Some(victim));
        assert!(board.piece(victim).is_captured());
        assert_eq!(board.piece_at(pos("a5")).unwrap().kind(), PieceKind::WhiteRook);
        assert_synchronized(&board);
    }

    #[test]
    fn test_apply_move_rejects_friendly_capture() {
        let mut board = Board::new();
        let err = board.apply_move(pos("b1"), pos("d2")).unwrap_err();
        assert_eq!(
            err,
            ChessError::InvalidMove {
                from: pos("b1"),
                to: pos("d2")
            }
        );
        assert_synchronized(&board);
    }

    #[test]
    fn test_apply_move_from_empty_square() {
        let mut board = Board::new();
        assert_eq!(
            board.apply_move(pos("e4"), pos("e5")),
            Err(ChessError::NoPiece(pos("e4")))
        );
    }
}
