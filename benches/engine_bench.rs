//! Othello Engine Benchmarks
//!
//! Performance benchmarks for move generation, evaluation and search using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use othello::eval::evaluate;
use othello::rules::{apply_move, legal_moves};
use othello::search::Searcher;
use othello::{Board, Pos, Stone};

/// A few plies into the game so every heuristic term is non-trivial
fn midgame() -> Board {
    let mut board = Board::standard();
    let moves = [
        (Pos::new(2, 3), Stone::Black),
        (Pos::new(2, 2), Stone::White),
        (Pos::new(3, 2), Stone::Black),
        (Pos::new(4, 5), Stone::White),
        (Pos::new(5, 4), Stone::Black),
        (Pos::new(2, 4), Stone::White),
    ];
    for (pos, side) in moves {
        apply_move(&mut board, pos, side);
    }
    board
}

fn bench_legal_moves_opening(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("legal_moves_opening", |b| {
        b.iter(|| black_box(legal_moves(&board, Stone::Black)))
    });
}

fn bench_legal_moves_both_colors(c: &mut Criterion) {
    let board = midgame();

    c.bench_function("legal_moves_both_colors", |b| {
        b.iter(|| {
            let black = legal_moves(&board, Stone::Black);
            let white = legal_moves(&board, Stone::White);
            black_box((black.len(), white.len()))
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            let mut copy = board;
            black_box(apply_move(&mut copy, Pos::new(2, 3), Stone::Black))
        })
    });
}

fn bench_evaluate_midgame(c: &mut Criterion) {
    let board = midgame();

    c.bench_function("evaluate_midgame", |b| b.iter(|| black_box(evaluate(&board))));
}

fn bench_search_depth_4(c: &mut Criterion) {
    let board = midgame();

    c.bench_function("search_depth_4", |b| {
        b.iter(|| {
            let mut searcher = Searcher::default();
            black_box(searcher.search_to_depth(&board, Stone::Black, 4).best_move)
        })
    });
}

criterion_group!(
    benches,
    bench_legal_moves_opening,
    bench_legal_moves_both_colors,
    bench_apply_move,
    bench_evaluate_midgame,
    bench_search_depth_4,
);
criterion_main!(benches);
