use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_chess::core::{moves_for, Board, BoardGeometry};
use tui_chess::types::{File, PieceKind, Position, Rank};

fn bench_start_position(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("moves_for_all_start_pieces", |b| {
        b.iter(|| {
            let mut total = 0;
            for piece in board.pieces() {
                total += moves_for(black_box(piece), &board).len();
            }
            total
        })
    });
}

fn bench_open_queen(c: &mut Criterion) {
    let mut board = Board::empty();
    let d4 = Position::from_parts(Rank::R4, File::D);
    let id = board
        .place(PieceKind::WhiteQueen, d4)
        .expect("empty board has room");

    c.bench_function("queen_center_empty_board", |b| {
        b.iter(|| moves_for(black_box(board.piece(id)), &board).len())
    });
}

fn bench_select(c: &mut Criterion) {
    let mut board = Board::new();
    let geometry = BoardGeometry::new(0, 0, 3, 2);

    c.bench_function("select_and_highlight", |b| {
        b.iter(|| {
            board.select_at(&geometry, black_box(19), black_box(14));
        })
    });
}

criterion_group!(
    benches,
    bench_start_position,
    bench_open_queen,
    bench_select
);
criterion_main!(benches);
