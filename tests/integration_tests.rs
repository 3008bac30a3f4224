//! End-to-end session flow: pointer events in, board state and info line out

use tui_chess::core::{BoardGeometry, Game};
use tui_chess::types::{ChessError, GameAction, PointerEvent, Position, TICK_MS};

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

struct Session {
    game: Game,
    geometry: BoardGeometry,
}

impl Session {
    fn new() -> Self {
        Self {
            game: Game::default(),
            geometry: BoardGeometry::new(2, 1, 4, 2),
        }
    }

    fn hover(&mut self, square: &str) {
        let (x, y) = self.geometry.tile_origin(pos(square));
        self.game
            .handle_pointer(PointerEvent::moved(x + 1, y), &self.geometry)
            .unwrap();
    }

    fn click(&mut self, square: &str) {
        let (x, y) = self.geometry.tile_origin(pos(square));
        self.game
            .handle_pointer(PointerEvent::released(x + 3, y + 1), &self.geometry)
            .unwrap();
    }

    fn play(&mut self, from: &str, to: &str) {
        self.click(from);
        self.click(to);
    }
}

#[test]
fn test_scholars_mate_sequence() {
    let mut s = Session::new();
    s.play("e2", "e4");
    s.play("e7", "e5");
    s.play("f1", "c4");
    s.play("b8", "c6");
    s.play("d1", "h5");
    s.play("g8", "f6");
    s.play("h5", "f7");

    let board = s.game.board();
    assert_eq!(s.game.info(), "Qh5xf7");
    assert_eq!(
        board.piece_at(pos("f7")).unwrap().kind(),
        tui_chess::types::PieceKind::WhiteQueen
    );
    assert_eq!(board.pieces().iter().filter(|p| p.is_captured()).count(), 1);
    assert_eq!(board.occupied_count(), 31);
    assert_eq!(board.selected(), None);
}

#[test]
fn test_hover_and_selection_are_independent() {
    let mut s = Session::new();
    s.click("g1");
    s.hover("a5");
    let board = s.game.board();
    assert_eq!(board.selected(), Some(pos("g1")));
    assert_eq!(board.hovered(), Some(pos("a5")));
    assert_eq!(board.potential_moves().count(), 2);
}

#[test]
fn test_moved_pawn_loses_double_step() {
    let mut s = Session::new();
    s.play("a2", "a3");
    s.click("a3");
    let highlighted: Vec<_> = s.game.board().potential_moves().collect();
    assert_eq!(highlighted, vec![pos("a4")]);
}

#[test]
fn test_direct_invalid_move_is_reported() {
    let mut game = Game::default();
    let err = game
        .board_mut()
        .apply_move(pos("b1"), pos("b3"))
        .unwrap_err();
    assert_eq!(
        err,
        ChessError::InvalidMove {
            from: pos("b1"),
            to: pos("b3")
        }
    );
    assert_eq!(err.to_string(), "invalid move: b1 -> b3");
}

#[test]
fn test_restart_and_clock_actions() {
    let mut s = Session::new();
    s.play("e2", "e4");
    for _ in 0..10 {
        s.game.tick(TICK_MS);
    }
    assert_eq!(s.game.clock().remaining_ms(), 600_000 - 10 * TICK_MS);

    s.game.apply_action(GameAction::ToggleClock);
    assert!(s.game.clock().is_paused());
    s.game.tick(TICK_MS);
    assert_eq!(s.game.clock().remaining_ms(), 600_000 - 10 * TICK_MS);

    s.game.apply_action(GameAction::Restart);
    assert!(s.game.board().tile_at(pos("e2")).is_occupied());
    assert!(!s.game.clock().is_paused());
    assert_eq!(s.game.clock().to_string(), "10:00");
}
