//! Two-player match driver
//!
//! Alternates between two [`Player`]s until the game is decided. A player that
//! returns no move aborts the match.

use log::{debug, info, warn};

use crate::{
    game_state::{GameState, Outcome, PlayerId},
    player::Player,
    MCTSError, Result,
};

/// Record of a finished match
#[derive(Debug, Clone)]
pub struct MatchReport<S: GameState> {
    /// How the game ended
    pub outcome: Outcome,
    /// Every move played, in order
    pub moves: Vec<S::Move>,
    /// The decided final position
    pub final_state: S,
}

/// Plays `game` to the end with `one` moving for [`PlayerId::One`] and `two`
/// for [`PlayerId::Two`]
///
/// # Errors
///
/// * [`MCTSError::PlayerCannotMove`] if the player to move returns no move
/// * [`MCTSError::IllegalMove`] if a player returns a move the game rejects
pub fn play_match<S: GameState>(
    game: S,
    one: &mut dyn Player<S>,
    two: &mut dyn Player<S>,
) -> Result<MatchReport<S>> {
    play_match_with(game, one, two, |_, _, _| {})
}

/// Same as [`play_match`], calling `observer` after every move with the player
/// who moved, the move and the resulting state
pub fn play_match_with<'a, S, F>(
    mut game: S,
    one: &'a mut dyn Player<S>,
    two: &'a mut dyn Player<S>,
    mut observer: F,
) -> Result<MatchReport<S>>
where
    S: GameState,
    F: FnMut(PlayerId, &S::Move, &S),
{
    let mut moves = Vec::new();

    let outcome = loop {
        if let Some(outcome) = game.winner() {
            break outcome;
        }

        let mover = game.current_player();
        let player: &mut dyn Player<S> = match mover {
            PlayerId::One => &mut *one,
            PlayerId::Two => &mut *two,
        };

        let Some(mv) = player.play(&game) else {
            warn!("{} cannot play. Abort.", game.player_name(mover));
            return Err(MCTSError::PlayerCannotMove(mover));
        };

        debug!("{} played {}", game.player_name(mover), game.move_name(&mv));
        game.apply(&mv)?;
        observer(mover, &mv, &game);
        moves.push(mv);
    };

    info!("Match finished after {} moves: {}", moves.len(), outcome);

    Ok(MatchReport {
        outcome,
        moves,
        final_state: game,
    })
}
