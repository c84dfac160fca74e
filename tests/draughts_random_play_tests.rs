use draughts_mcts::{draughts::HopKind, EnglishDraughts, GameState, PlayerId};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

// Random games end long before this through the piece or draw rules
const MAX_PLIES: usize = 5_000;

fn kings_of(game: &EnglishDraughts, player: PlayerId) -> usize {
    let board = game.board();
    board
        .pieces_of(player)
        .into_iter()
        .filter(|&s| board.is_king(s))
        .count()
}

/// Checks the move generator and move application on every position of a random game
fn play_checked_game(size: u8, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = EnglishDraughts::with_size(size).unwrap();
    let mut plies = 0;

    while game.winner().is_none() {
        let geometry = *game.geometry();
        let legal = game.legal_moves();
        let captures = game.capture_moves();
        assert!(!legal.is_empty(), "undecided position without moves: {}", game);

        // Captures are mandatory
        if captures.is_empty() {
            for mv in &legal {
                assert_eq!(mv.len(), 2);
                let (from, to) = mv.hops().next().unwrap();
                assert_eq!(geometry.hop_kind(from, to), Some(HopKind::Step));
            }
        } else {
            assert_eq!(legal, captures, "only captures are legal in {}", game);
            assert!(legal.iter().all(|mv| mv.is_capture(&geometry)));
        }

        // Capture chains are maximal
        for a in &legal {
            for b in &legal {
                if a != b {
                    assert!(
                        !b.squares().starts_with(a.squares()),
                        "{:?} is a prefix of {:?} in {}",
                        a,
                        b,
                        game
                    );
                }
            }
        }

        let mover = game.current_player();
        let opponent = mover.other();
        let own_before = game.board().count(mover);
        let opponent_before = game.board().count(opponent);
        let kings_before = kings_of(&game, mover);

        let mv = legal.choose(&mut rng).unwrap().clone();
        let mut jumped = mv.jumped_squares(&geometry);
        jumped.sort_unstable();
        jumped.dedup();

        // The unchecked path used by rollouts agrees with the checked one
        let mut unchecked = game.clone();
        unchecked.apply_legal(&mv).unwrap();
        game.apply(&mv).unwrap();
        assert_eq!(unchecked, game);
        assert_eq!(
            game.winner_given_moves(&game.legal_moves()),
            game.winner()
        );

        assert_eq!(game.board().count(mover), own_before);
        assert_eq!(game.board().count(opponent), opponent_before - jumped.len());
        assert!(kings_of(&game, mover) >= kings_before, "a king was demoted");
        assert_eq!(game.current_player(), opponent);

        plies += 1;
        assert!(plies < MAX_PLIES, "game did not terminate");
    }
}

#[test]
fn test_random_games_on_standard_board() {
    for seed in 0..20 {
        play_checked_game(8, seed);
    }
}

#[test]
fn test_random_games_on_other_sizes() {
    for seed in 0..5 {
        play_checked_game(6, seed);
        play_checked_game(10, seed);
    }
    play_checked_game(4, 3);
}
