#[macro_use]
extern crate criterion;

use criterion::{black_box, BenchmarkId, Criterion};
use draughts_mcts::{
    policy::simulation::{RandomPolicy, SimulationPolicy},
    Board, EnglishDraughts, GameState, MCTSConfig, Piece, PlayerId, TicTacToe, MCTS,
};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

/// Middle-game position with both men and kings and a multi-jump available
fn tactical_position() -> EnglishDraughts {
    let mut board = Board::empty(8).unwrap();
    for s in [18, 19, 21, 25, 30] {
        board.place(s, Piece::man(PlayerId::One)).unwrap();
    }
    board.place(10, Piece::king(PlayerId::One)).unwrap();
    for s in [3, 6, 8, 15] {
        board.place(s, Piece::man(PlayerId::Two)).unwrap();
    }
    board.place(7, Piece::king(PlayerId::Two)).unwrap();
    EnglishDraughts::from_board(board, PlayerId::One)
}

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_generation");

    let positions = [
        ("initial", EnglishDraughts::new()),
        ("tactical", tactical_position()),
        ("initial_10x10", EnglishDraughts::with_size(10).unwrap()),
    ];

    for (name, game) in positions.iter() {
        group.bench_with_input(BenchmarkId::new("legal_moves", name), game, |b, game| {
            b.iter(|| black_box(game.legal_moves()))
        });
        group.bench_with_input(BenchmarkId::new("winner", name), game, |b, game| {
            b.iter(|| black_box(game.winner()))
        });
    }

    group.finish();
}

fn bench_rollouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("rollouts");
    let policy = RandomPolicy::new();

    for size in [6u8, 8, 10] {
        let game = EnglishDraughts::with_size(size).unwrap();
        group.bench_with_input(BenchmarkId::new("board_size", size), &game, |b, game| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| black_box(policy.rollout(game, 10, &mut rng)))
        });
    }

    group.finish();
}

fn bench_mcts_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_search");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    // Test different iteration counts
    for &iter_count in &[10usize, 50, 100] {
        let game = EnglishDraughts::new();
        let config = MCTSConfig::default()
            .without_time_limit()
            .with_max_iterations(iter_count)
            .with_playouts_per_iteration(10)
            .with_seed(7);

        group.bench_with_input(
            BenchmarkId::new("draughts_iterations", iter_count),
            &iter_count,
            |b, &_| {
                b.iter(|| {
                    let mut mcts = MCTS::new(&game, config.clone()).unwrap();
                    black_box(mcts.search())
                })
            },
        );
    }

    // Test different batch sizes
    for &playouts in &[1usize, 10, 100] {
        let game = TicTacToe::new();
        let config = MCTSConfig::default()
            .without_time_limit()
            .with_max_iterations(200)
            .with_playouts_per_iteration(playouts)
            .with_seed(7);

        group.bench_with_input(
            BenchmarkId::new("tic_tac_toe_batch", playouts),
            &playouts,
            |b, &_| {
                b.iter(|| {
                    let mut mcts = MCTS::new(&game, config.clone()).unwrap();
                    black_box(mcts.search())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_move_generation, bench_rollouts, bench_mcts_search);
criterion_main!(benches);
