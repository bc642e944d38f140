use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ttt_solver::min_max::{alpha_beta, score_moves};
use ttt_solver::min_max::stats::NullStats;
use ttt_solver::{Board, Player};

fn empty_board(c: &mut Criterion) {
    let board = Board::empty();
    c.bench_function("minimax empty board", |b| {
        b.iter(|| score_moves(black_box(&board), Player::X, &mut NullStats))
    });
    c.bench_function("alpha-beta empty board", |b| {
        b.iter(|| alpha_beta::score_moves(black_box(&board), Player::X, &mut NullStats))
    });
}

fn midgame(c: &mut Criterion) {
    let board: Board = "X...O....".parse().unwrap();
    c.bench_function("minimax midgame", |b| {
        b.iter(|| score_moves(black_box(&board), Player::X, &mut NullStats))
    });
    c.bench_function("alpha-beta midgame", |b| {
        b.iter(|| alpha_beta::score_moves(black_box(&board), Player::X, &mut NullStats))
    });
}

criterion_group!(benches, empty_board, midgame);
criterion_main!(benches);
