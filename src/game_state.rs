//! Traits defining game state representation for MCTS.
//!
//! The GameState trait is the primary interface that must be implemented for any
//! game that will be played by the search engine. The engine and the rollout
//! policy only ever talk to this trait, never to a concrete game.

use std::fmt::{self, Debug};

use crate::Result;

/// The two seats of an alternating two-player game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    /// The player who moves first (the whites in draughts)
    One,
    /// The player who moves second (the blacks in draughts)
    Two,
}

impl PlayerId {
    /// Returns the opponent of this player
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// The result of a decided game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The given player won
    Winner(PlayerId),
    /// Nobody won
    Draw,
}

impl Outcome {
    /// Credit earned by `player` for this outcome: 1 for a win, 0.5 for a draw, 0 for a loss
    pub fn score_for(self, player: PlayerId) -> f64 {
        match self {
            Outcome::Winner(winner) if winner == player => 1.0,
            Outcome::Winner(_) => 0.0,
            Outcome::Draw => 0.5,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Trait defining the game state interface required for MCTS
///
/// `Clone` must produce a fully independent copy: the search engine clones the
/// caller's state once and every tree node owns its own copy, so no board data is
/// ever shared between a live game and a searched line.
pub trait GameState: Clone {
    /// The type of moves that can be played in this game
    type Move: Clone + Debug + PartialEq;

    /// Returns the list of legal moves from this state
    ///
    /// The order must be deterministic: search-tree children map 1:1 to moves
    /// by position. An empty list means the player to move cannot act.
    ///
    /// # Example
    ///
    /// ```
    /// use draughts_mcts::{GameState, TicTacToe};
    ///
    /// let game = TicTacToe::new();
    /// assert_eq!(game.legal_moves(), (0..9).collect::<Vec<_>>());
    /// ```
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays `mv` in place and hands the turn to the other player
    ///
    /// A move that is not in [`legal_moves`](GameState::legal_moves) must be
    /// rejected with [`MCTSError::IllegalMove`](crate::MCTSError::IllegalMove)
    /// and leave the state untouched.
    fn apply(&mut self, mv: &Self::Move) -> Result<()>;

    /// Returns the player whose turn it is in this state
    fn current_player(&self) -> PlayerId;

    /// Returns the decided outcome, or `None` while the game is still running
    fn winner(&self) -> Option<Outcome>;

    /// Same as [`winner`](GameState::winner), given `moves` freshly returned by
    /// [`legal_moves`](GameState::legal_moves) for this state
    ///
    /// Games whose terminal rule reads the move list override this.
    fn winner_given_moves(&self, _moves: &[Self::Move]) -> Option<Outcome> {
        self.winner()
    }

    /// Plays a move taken from [`legal_moves`](GameState::legal_moves) of this
    /// exact state
    ///
    /// Implementers may skip the legality check of [`apply`](GameState::apply).
    fn apply_legal(&mut self, mv: &Self::Move) -> Result<()> {
        self.apply(mv)
    }

    /// Returns true if this state is terminal (won, lost or drawn)
    fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// Returns a copy of this state with `mv` applied, leaving `self` untouched
    fn apply_action(&self, mv: &Self::Move) -> Result<Self> {
        let mut next = self.clone();
        next.apply(mv)?;
        Ok(next)
    }

    /// Human readable name of a player
    fn player_name(&self, player: PlayerId) -> String {
        player.to_string()
    }

    /// Human readable form of a move played from this state
    fn move_name(&self, mv: &Self::Move) -> String {
        format!("{:?}", mv)
    }
}
