//! Move generation - candidate destinations per piece role
//!
//! Generation is pseudo-legal: it ignores check, pins and turn order. Every
//! candidate is built with checked coordinate arithmetic, so squares off the
//! board are dropped rather than produced.
//!
//! Rules by role:
//!
//! - **Pawn**: one step forward; two steps forward while unmoved. Pushes do
//!   not look at occupancy. Diagonal captures (forward + toward a, forward +
//!   toward h) are offered only when an enemy piece stands there. En passant
//!   is not modelled.
//! - **Knight**: the eight L-shaped jumps.
//! - **Bishop / Rook / Queen**: rays along diagonals / orthogonals / both,
//!   stopping at the edge or the first occupied square (included when it holds
//!   an enemy).
//! - **King**: the eight adjacent squares.
//!
//! Knight and king jumps do not filter friendly squares; use
//! [`Board::landing_targets`](crate::Board::landing_targets) for that.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{Direction, Position, Role, MAX_MOVES};

/// Candidate destinations, in generation order
pub type Moves = ArrayVec<Position, MAX_MOVES>;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
];

const KING_STEPS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Candidate destinations for `piece`, reading the board for occupancy only.
///
/// A captured piece has no moves.
pub fn moves_for(piece: &Piece, board: &Board) -> Moves {
    let mut moves = Moves::new();
    if piece.is_captured() {
        return moves;
    }

    match piece.role() {
        Role::Pawn => pawn_moves(piece, board, &mut moves),
        Role::Knight => jumps(piece.position(), &KNIGHT_JUMPS, &mut moves),
        Role::Bishop => rays(piece, board, &DIAGONALS, &mut moves),
        Role::Rook => rays(piece, board, &ORTHOGONALS, &mut moves),
        Role::Queen => {
            rays(piece, board, &ORTHOGONALS, &mut moves);
            rays(piece, board, &DIAGONALS, &mut moves);
        }
        Role::King => jumps(piece.position(), &KING_STEPS, &mut moves),
    }
    moves
}

fn pawn_moves(piece: &Piece, board: &Board, out: &mut Moves) {
    let forward = piece.color().forward();
    let from = piece.position();

    if let Ok(one) = from.toward(forward, 1) {
        out.push(one);
        if !piece.has_moved() {
            if let Ok(two) = from.toward(forward, 2) {
                out.push(two);
            }
        }
    }

    for side in [Direction::TowardA, Direction::TowardH] {
        let Ok(diag) = from.toward(forward, 1).and_then(|p| p.toward(side, 1)) else {
            continue;
        };
        if board.color_at(diag) == Some(!piece.color()) {
            out.push(diag);
        }
    }
}

fn jumps(from: Position, offsets: &[(i8, i8)], out: &mut Moves) {
    out.extend(
        offsets
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df).ok()),
    );
}

fn rays(piece: &Piece, board: &Board, dirs: &[(i8, i8)], out: &mut Moves) {
    for &(dr, df) in dirs {
        let mut cur = piece.position();
        while let Ok(next) = cur.offset(dr, df) {
            match board.color_at(next) {
                None => out.push(next),
                Some(color) => {
                    if color != piece.color() {
                        out.push(next);
                    }
                    break;
                }
            }
            cur = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn squares(moves: &Moves) -> Vec<String> {
        moves.iter().map(|p| p.to_string()).collect()
    }

    fn lone(kind: PieceKind, at: &str) -> (Board, Piece) {
        let mut board = Board::empty();
        let id = board.place(kind, pos(at)).unwrap();
        let piece = *board.piece(id);
        (board, piece)
    }

    #[test]
    fn test_pawn_on_last_rank_has_no_push() {
        let (board, pawn) = lone(PieceKind::WhitePawn, "c8");
        assert!(moves_for(&pawn, &board).is_empty());
    }

    #[test]
    fn test_knight_in_corner() {
        let (board, knight) = lone(PieceKind::WhiteKnight, "a1");
        assert_eq!(squares(&moves_for(&knight, &board)), vec!["b3", "c2"]);
    }

    #[test]
    fn test_knight_in_center_has_eight() {
        let (board, knight) = lone(PieceKind::BlackKnight, "d4");
        assert_eq!(moves_for(&knight, &board).len(), 8);
    }

    #[test]
    fn test_king_on_edge() {
        let (board, king) = lone(PieceKind::WhiteKing, "e1");
        assert_eq!(
            squares(&moves_for(&king, &board)),
            vec!["d2", "e2", "f2", "f1", "d1"]
        );
    }

    #[test]
    fn test_queen_on_empty_board_fills_capacity() {
        let (board, queen) = lone(PieceKind::WhiteQueen, "d4");
        assert_eq!(moves_for(&queen, &board).len(), MAX_MOVES);
    }

    #[test]
    fn test_rook_on_empty_board() {
        let (board, rook) = lone(PieceKind::BlackRook, "h8");
        assert_eq!(moves_for(&rook, &board).len(), 14);
    }

    #[test]
    fn test_captured_piece_has_no_moves() {
        let (board, mut rook) = lone(PieceKind::WhiteRook, "a1");
        rook.capture();
        assert!(moves_for(&rook, &board).is_empty());
    }
}
