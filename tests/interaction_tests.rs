//! Pointer resolution and selection state

use tui_chess::core::{Board, BoardGeometry};
use tui_chess::types::Position;

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

fn geometry() -> BoardGeometry {
    BoardGeometry::new(10, 5, 3, 2)
}

#[test]
fn test_tile_corners_resolve_to_one_tile() {
    let g = geometry();
    // c6: third column, third row from the top.
    let (x0, y0) = g.tile_origin(pos("c6"));
    assert_eq!((x0, y0), (16, 9));

    for (x, y) in [(16, 9), (18, 9), (16, 10), (18, 10)] {
        assert_eq!(g.position_at(x, y), Some(pos("c6")), "({}, {})", x, y);
    }
    // One step past each edge belongs to the neighbour.
    assert_eq!(g.position_at(19, 9), Some(pos("d6")));
    assert_eq!(g.position_at(15, 9), Some(pos("b6")));
    assert_eq!(g.position_at(16, 11), Some(pos("c5")));
    assert_eq!(g.position_at(16, 8), Some(pos("c7")));
}

#[test]
fn test_every_cell_resolves_to_exactly_one_tile() {
    let g = geometry();
    let mut hits = [[0u8; 8]; 8];
    for y in g.origin_y..g.origin_y + g.height() {
        for x in g.origin_x..g.origin_x + g.width() {
            let p = g.position_at(x, y).expect("inside board");
            hits[p.rank.index()][p.file.index()] += 1;
        }
    }
    for row in hits {
        assert!(row.iter().all(|&n| n == 6));
    }
    assert_eq!(g.position_at(9, 5), None);
    assert_eq!(g.position_at(10 + 24, 5), None);
    assert_eq!(g.position_at(10, 5 + 16), None);
}

#[test]
fn test_at_most_one_selected_tile() {
    let mut board = Board::new();
    let g = geometry();
    for square in ["e2", "a8", "d4", "h1", "h1", "b7"] {
        let (x, y) = g.tile_origin(pos(square));
        board.select_at(&g, x, y);
        let selected: Vec<_> = board.tiles().filter(|t| t.is_selected()).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].position(), pos(square));
    }
}

#[test]
fn test_hover_follows_pointer_and_clears_off_board() {
    let mut board = Board::new();
    let g = geometry();
    let (x, y) = g.tile_origin(pos("f5"));
    assert_eq!(board.hover_at(&g, x, y), Some(pos("f5")));
    assert_eq!(board.hovered(), Some(pos("f5")));

    let (x, y) = g.tile_origin(pos("f6"));
    board.hover_at(&g, x, y);
    assert_eq!(board.tiles().filter(|t| t.is_hovered()).count(), 1);

    assert_eq!(board.hover_at(&g, 0, 0), None);
    assert_eq!(board.hovered(), None);
}

#[test]
fn test_click_outside_board_keeps_selection() {
    let mut board = Board::new();
    let g = geometry();
    board.select(pos("g8"));
    assert_eq!(board.select_at(&g, 0, 0), None);
    assert_eq!(board.selected(), Some(pos("g8")));
    let highlighted: Vec<_> = board.potential_moves().collect();
    assert_eq!(highlighted, vec![pos("f6"), pos("h6")]);
}
