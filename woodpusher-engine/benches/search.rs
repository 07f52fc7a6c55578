use criterion::{black_box, criterion_group, criterion_main, Criterion};

use woodpusher_engine::search;
use woodpusher_engine::Board;

pub fn criterion_start_position(c: &mut Criterion) {
    let ply = 3;

    c.bench_function("start_position_depth_3_alpha_beta", |b| {
        b.iter(|| {
            let mut board = Board::start_position();
            let result = search::alpha_beta(black_box(&mut board), black_box(ply));
            assert!(result.best_move.is_some());
        })
    });

    c.bench_function("start_position_depth_3_minimax", |b| {
        b.iter(|| {
            let mut board = Board::start_position();
            let result = search::minimax(black_box(&mut board), black_box(ply));
            assert!(result.best_move.is_some());
        })
    });
}

pub fn criterion_open_middlegame(c: &mut Criterion) {
    // Italian game, both sides developed, plenty of captures in the tree.
    let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R w KQkq - 6 5";
    let ply = 3;

    c.bench_function("open_middlegame_depth_3_alpha_beta", |b| {
        b.iter(|| {
            let mut board = Board::from_fen(fen).unwrap();
            let result = search::alpha_beta(black_box(&mut board), black_box(ply));
            assert!(result.best_move.is_some());
        })
    });

    c.bench_function("open_middlegame_depth_3_minimax", |b| {
        b.iter(|| {
            let mut board = Board::from_fen(fen).unwrap();
            let result = search::minimax(black_box(&mut board), black_box(ply));
            assert!(result.best_move.is_some());
        })
    });
}

criterion_group! {
    name = searches;
    config = Criterion::default().without_plots().sample_size(30);
    targets = criterion_start_position, criterion_open_middlegame
}

criterion_main!(searches);
