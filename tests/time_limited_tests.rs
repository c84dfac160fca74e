use draughts_mcts::{EnglishDraughts, GameState, MCTSConfig, TicTacToe, MCTS};
use std::time::{Duration, Instant};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_time_limited_search() {
    init_logging();
    let game = EnglishDraughts::new();

    // Set a short but reasonable time limit
    let time_limit = Duration::from_millis(200);

    let config = MCTSConfig::default()
        .with_max_time(time_limit)
        .with_playouts_per_iteration(5)
        .with_seed(11);

    let mut mcts = MCTS::new(&game, config).unwrap();

    // Measure search time
    let start = Instant::now();
    let result = mcts.search();
    let elapsed = start.elapsed();

    // Search should succeed and return a legal move
    let mv = result.unwrap();
    assert!(game.legal_moves().contains(&mv));

    // Print diagnostic info
    println!("Time limit: {:?}, Actual time: {:?}", time_limit, elapsed);
    println!("Stats: {}", mcts.get_statistics().summary());

    // Verify the search stopped due to time limit
    let stats = mcts.get_statistics();
    assert!(
        stats.stopped_early,
        "Statistics should indicate early stopping due to time limit"
    );
    assert!(!stats.tree_exhausted);
    assert!(stats.iterations > 0);
    assert!(elapsed >= time_limit);
    // The deadline is only checked between iterations
    assert!(elapsed < time_limit + Duration::from_secs(5));
}

#[test]
fn test_search_for_time_overrides_iteration_cap() {
    init_logging();
    let config = MCTSConfig::default()
        .with_max_iterations(1)
        .with_playouts_per_iteration(5);

    let mut mcts = MCTS::new(&EnglishDraughts::with_size(6).unwrap(), config).unwrap();

    let time_limit = Duration::from_millis(50);
    mcts.search_for_time(time_limit).unwrap();

    let stats = mcts.get_statistics();
    assert!(stats.stopped_early);
    assert!(stats.total_time >= time_limit);
}

#[test]
fn test_search_for_iterations_ignores_time_limit() {
    init_logging();
    let config = MCTSConfig::default()
        .with_max_time(Duration::from_millis(1))
        .with_playouts_per_iteration(2)
        .with_seed(3);

    let mut mcts = MCTS::new(&TicTacToe::new(), config).unwrap();
    mcts.search_for_iterations(200).unwrap();

    let stats = mcts.get_statistics();
    assert_eq!(stats.iterations, 200);
    assert!(!stats.stopped_early);
}

#[test]
fn test_exhausted_tree_stops_before_budget() {
    init_logging();
    // Three empty cells: the whole tree is decided within a few iterations
    let game = TicTacToe::from_cells("oxo xxo ...").unwrap();

    let config = MCTSConfig::default()
        .with_max_time(Duration::from_secs(30))
        .with_playouts_per_iteration(10)
        .with_seed(5);
    let mut mcts = MCTS::new(&game, config).unwrap();

    let start = Instant::now();
    let mv = mcts.search().unwrap();

    let stats = mcts.get_statistics();
    assert!(stats.tree_exhausted);
    assert!(!stats.stopped_early);
    assert!(start.elapsed() < Duration::from_secs(30));
    assert!(mcts.root.is_exhausted());

    // o wins on 8 at once, and must play it because x threatens 7
    assert_eq!(mv, 8);
}
