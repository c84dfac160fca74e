use draughts_mcts::{
    Board, DraughtsMove, EnglishDraughts, GameState, MCTSError, Outcome, Piece, PlayerId,
};

/// Builds an 8x8 position from square lists
fn position(
    white_men: &[u8],
    white_kings: &[u8],
    black_men: &[u8],
    black_kings: &[u8],
    to_move: PlayerId,
) -> EnglishDraughts {
    let mut board = Board::empty(8).unwrap();
    for &s in white_men {
        board.place(s, Piece::man(PlayerId::One)).unwrap();
    }
    for &s in white_kings {
        board.place(s, Piece::king(PlayerId::One)).unwrap();
    }
    for &s in black_men {
        board.place(s, Piece::man(PlayerId::Two)).unwrap();
    }
    for &s in black_kings {
        board.place(s, Piece::king(PlayerId::Two)).unwrap();
    }
    EnglishDraughts::from_board(board, to_move)
}

fn paths(game: &EnglishDraughts) -> Vec<Vec<u8>> {
    game.legal_moves()
        .iter()
        .map(|mv| mv.squares().to_vec())
        .collect()
}

fn play(game: &mut EnglishDraughts, path: &[u8]) {
    game.apply(&DraughtsMove::new(path.to_vec()))
        .unwrap_or_else(|e| panic!("{:?} should be legal in {}: {}", path, game, e));
}

#[test]
fn test_initial_white_moves() {
    let game = EnglishDraughts::new();
    assert_eq!(game.current_player(), PlayerId::One);
    assert_eq!(
        paths(&game),
        vec![
            vec![21, 17],
            vec![22, 17],
            vec![22, 18],
            vec![23, 18],
            vec![23, 19],
            vec![24, 19],
            vec![24, 20],
        ]
    );
}

#[test]
fn test_black_reply() {
    let mut game = EnglishDraughts::new();
    play(&mut game, &[21, 17]);

    assert_eq!(game.current_player(), PlayerId::Two);
    assert_eq!(
        paths(&game),
        vec![
            vec![9, 13],
            vec![9, 14],
            vec![10, 14],
            vec![10, 15],
            vec![11, 15],
            vec![11, 16],
            vec![12, 16],
        ]
    );
}

#[test]
fn test_simple_take() {
    let mut game = position(&[16, 18, 19], &[7], &[11, 15], &[24], PlayerId::One);
    assert_eq!(paths(&game), vec![vec![19, 10]]);

    play(&mut game, &[19, 10]);
    let board = game.board();
    assert!(board.is_empty_square(19));
    assert!(board.is_empty_square(15));
    assert_eq!(board.get(10), Some(Piece::man(PlayerId::One)));
    assert_eq!(board.count(PlayerId::Two), 2);
}

#[test]
fn test_simple_take_with_king() {
    let game = position(&[16, 18, 19], &[7], &[10, 15], &[24], PlayerId::One);
    assert_eq!(paths(&game), vec![vec![7, 14], vec![18, 11]]);
}

#[test]
fn test_multiple_take() {
    let game = position(&[18, 19], &[10], &[6, 8, 15], &[7], PlayerId::One);
    assert_eq!(
        paths(&game),
        vec![vec![10, 1], vec![10, 3, 12], vec![18, 11, 2], vec![18, 11, 4]]
    );
}

#[test]
fn test_multiple_take_king_from_corner() {
    let game = position(&[18, 19], &[1], &[6, 8, 15], &[7], PlayerId::One);
    assert_eq!(
        paths(&game),
        vec![
            vec![1, 10, 3, 12],
            vec![18, 11, 2],
            vec![18, 11, 4],
            vec![19, 10, 3]
        ]
    );
}

#[test]
fn test_multiple_take_and_crown() {
    let mut game = position(&[18, 19], &[10], &[6, 8, 15], &[7], PlayerId::One);
    play(&mut game, &[18, 11, 4]);

    let board = game.board();
    for square in [18, 15, 11, 8] {
        assert!(board.is_empty_square(square), "square {} should be empty", square);
    }
    assert_eq!(board.get(4), Some(Piece::king(PlayerId::One)));
    assert_eq!(board.count(PlayerId::Two), 2);
}

#[test]
fn test_black_man_is_crowned_on_bottom_row() {
    let mut game = position(&[], &[1], &[27], &[], PlayerId::Two);
    assert_eq!(paths(&game), vec![vec![27, 31], vec![27, 32]]);

    play(&mut game, &[27, 31]);
    assert_eq!(game.board().get(31), Some(Piece::king(PlayerId::Two)));
}

#[test]
fn test_king_is_not_demoted() {
    let mut game = position(&[], &[22], &[], &[10], PlayerId::One);
    play(&mut game, &[22, 26]);
    play(&mut game, &[10, 14]);
    play(&mut game, &[26, 22]);
    assert_eq!(game.board().get(22), Some(Piece::king(PlayerId::One)));
    assert_eq!(game.board().get(14), Some(Piece::king(PlayerId::Two)));
}

#[test]
fn test_capture_is_mandatory() {
    let mut game = position(&[16, 18, 19], &[7], &[11, 15], &[24], PlayerId::One);
    let before = game.clone();

    // 18-14 is a plain step, but a capture is available
    let result = game.apply(&DraughtsMove::from([18, 14]));
    assert!(matches!(result, Err(MCTSError::IllegalMove(_))));
    assert_eq!(game, before);
}

#[test]
fn test_illegal_move_leaves_state_untouched() {
    let mut game = EnglishDraughts::new();
    let before = game.clone();

    for mv in [
        DraughtsMove::from([21, 13]),
        DraughtsMove::from([9, 13]),
        DraughtsMove::new(vec![]),
    ] {
        assert!(matches!(game.apply(&mv), Err(MCTSError::IllegalMove(_))));
        assert_eq!(game, before);
    }
}

#[test]
fn test_no_white_pieces_loses() {
    let game = position(&[], &[], &[18, 19], &[1], PlayerId::One);
    assert_eq!(game.winner(), Some(Outcome::Winner(PlayerId::Two)));
    assert!(game.is_terminal());

    let game = position(&[], &[], &[18, 19], &[1], PlayerId::Two);
    assert_eq!(game.winner(), Some(Outcome::Winner(PlayerId::Two)));
}

#[test]
fn test_no_black_pieces_loses() {
    let game = position(&[22], &[], &[], &[], PlayerId::Two);
    assert_eq!(game.winner(), Some(Outcome::Winner(PlayerId::One)));
}

#[test]
fn test_blocked_player_loses() {
    // The white man on 32 can neither step nor jump
    let game = position(&[32], &[], &[23, 27, 28], &[], PlayerId::One);
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.winner(), Some(Outcome::Winner(PlayerId::Two)));
    assert_eq!(game.winner_given_moves(&[]), game.winner());
}

#[test]
fn test_apply_legal_matches_apply() {
    let mut checked = EnglishDraughts::new();
    let mut unchecked = checked.clone();
    for path in [[22, 18], [11, 15]] {
        play(&mut checked, &path);
        unchecked.apply_legal(&DraughtsMove::from(path)).unwrap();
    }
    assert_eq!(checked, unchecked);

    // A capture removes the jumped piece the same way
    play(&mut checked, &[18, 11]);
    unchecked.apply_legal(&DraughtsMove::from([18, 11])).unwrap();
    assert_eq!(checked, unchecked);
    assert_eq!(unchecked.board().count(PlayerId::Two), 11);

    let before = unchecked.clone();
    assert!(matches!(
        unchecked.apply_legal(&DraughtsMove::new(vec![])),
        Err(MCTSError::IllegalMove(_))
    ));
    assert_eq!(unchecked, before);
}

#[test]
fn test_draw_after_quiet_king_moves() {
    let mut game = position(&[], &[22], &[], &[10], PlayerId::One);

    for _ in 0..6 {
        play(&mut game, &[22, 25]);
        play(&mut game, &[10, 7]);
        play(&mut game, &[25, 22]);
        play(&mut game, &[7, 10]);
    }
    assert_eq!(game.quiet_king_moves(), 24);
    assert_eq!(game.winner(), None);

    play(&mut game, &[22, 25]);
    assert_eq!(game.winner(), Some(Outcome::Draw));
}

#[test]
fn test_man_move_resets_quiet_counter() {
    let mut game = position(&[29], &[22], &[], &[10], PlayerId::One);
    play(&mut game, &[22, 26]);
    play(&mut game, &[10, 7]);
    assert_eq!(game.quiet_king_moves(), 2);

    play(&mut game, &[29, 25]);
    assert_eq!(game.quiet_king_moves(), 0);
}

#[test]
fn test_turn_counter() {
    let mut game = EnglishDraughts::new();
    assert_eq!(game.turn(), 1);
    play(&mut game, &[22, 18]);
    assert_eq!(game.turn(), 1);
    play(&mut game, &[11, 15]);
    assert_eq!(game.turn(), 2);
    assert_eq!(game.current_player(), PlayerId::One);
}

#[test]
fn test_board_sizes() {
    let game = EnglishDraughts::with_size(10).unwrap();
    assert_eq!(game.board().count(PlayerId::One), 20);
    assert_eq!(game.board().count(PlayerId::Two), 20);
    assert!(!game.legal_moves().is_empty());

    let game = EnglishDraughts::with_size(6).unwrap();
    assert_eq!(game.board().count(PlayerId::One), 6);
    assert!(!game.legal_moves().is_empty());

    assert_eq!(
        EnglishDraughts::with_size(7).err(),
        Some(MCTSError::InvalidBoardSize(7))
    );
    assert_eq!(
        EnglishDraughts::with_size(14).err(),
        Some(MCTSError::InvalidBoardSize(14))
    );
}

#[test]
fn test_display_and_names() {
    let game = EnglishDraughts::new();
    assert_eq!(
        game.to_string(),
        "1. W:W21,22,23,24,25,26,27,28,29,30,31,32:B1,2,3,4,5,6,7,8,9,10,11,12"
    );
    assert_eq!(game.player_name(PlayerId::One), "Player with the whites");
    assert_eq!(game.player_name(PlayerId::Two), "Player with the blacks");
    assert!(game.view().contains("Player with the whites plays."));
}
