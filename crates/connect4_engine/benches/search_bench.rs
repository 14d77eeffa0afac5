use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use connect4_core::{Board, Player};
use connect4_engine::{evaluate_position, search, search_best_move, SearchConfig};

/// A quiet early middlegame: both sides around the centre, no threats.
fn midgame_board() -> Board {
    let mut board = Board::new();
    for (col, player) in [
        (3, Player::HUMAN),
        (3, Player::AI),
        (2, Player::HUMAN),
        (4, Player::AI),
        (4, Player::HUMAN),
        (2, Player::AI),
    ] {
        board.drop_token(col, player);
    }
    board
}

fn bench_evaluate(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("evaluate_position_midgame", |b| {
        b.iter(|| evaluate_position(black_box(&board)))
    });
}

fn bench_search_depths(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta");
    for depth in [4u8, 5, 6] {
        group.bench_with_input(BenchmarkId::new("sequential", depth), &depth, |b, &depth| {
            let mut board = midgame_board();
            b.iter(|| search(black_box(&mut board), depth, true))
        });
    }
    group.finish();
}

fn bench_parallel_root(c: &mut Criterion) {
    let board = midgame_board();
    let config = SearchConfig::default().with_depth(6).with_parallel(true);
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("parallel_root_depth_6", |b| {
        b.iter(|| search_best_move(black_box(&board), &config, true, &mut rng))
    });
}

criterion_group!(benches, bench_evaluate, bench_search_depths, bench_parallel_root);
criterion_main!(benches);
