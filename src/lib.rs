//! # draughts-mcts
//!
//! A Monte Carlo Tree Search (MCTS) engine that plays any deterministic,
//! perfect-information, alternating two-player board game through a small
//! game-state contract, together with a complete English Draughts rules engine.
//!
//! ## Features
//!
//! - Generic search engine that only talks to the [`GameState`] trait
//! - UCT selection, full-width expansion, batched random rollouts and
//!   perspective-aware backpropagation
//! - Wall-clock bounded search with optional iteration cap and seedable randomness
//! - English Draughts with mandatory multi-hop captures, king promotion and
//!   the 25 quiet king moves draw rule, on 4x4 up to 12x12 boards
//! - A tic-tac-toe implementation showing the contract generalises
//!
//! ## Basic Usage
//!
//! ```
//! use draughts_mcts::{EnglishDraughts, GameState, MCTSConfig, MCTS};
//!
//! fn main() -> Result<(), draughts_mcts::MCTSError> {
//!     let game = EnglishDraughts::new();
//!
//!     // Keep the doctest fast: a handful of iterations with small batches
//!     let config = MCTSConfig::default()
//!         .with_max_iterations(5)
//!         .with_playouts_per_iteration(2)
//!         .with_seed(7);
//!
//!     let mut mcts = MCTS::new(&game, config)?;
//!     let best_move = mcts.search()?;
//!
//!     println!("{}", mcts.get_statistics().summary());
//!     assert!(game.legal_moves().contains(&best_move));
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! Each search iteration runs four phases:
//!
//! 1. **Selection**: descend from the root to a leaf, picking at every level the
//!    child with the highest UCT score. Unvisited children are always tried first.
//!
//! 2. **Expansion**: if the leaf is not a decided game, create one child per legal
//!    move. Decided leaves are never expanded and are simulated directly.
//!
//! 3. **Simulation**: play a batch of uniformly random games to completion from
//!    the new node and tally wins (draws count half for each side).
//!
//! 4. **Backpropagation**: add the batch to every node on the path. Each node is
//!    credited with the wins of the player who moved into it, so siblings are
//!    always compared from the point of view of the player choosing between them.
//!
//! The loop stops when the time budget elapses or the whole tree is decided. The
//! move returned is the root child with the most visits.

pub mod config;
pub mod draughts;
pub mod game_loop;
pub mod game_state;
pub mod mcts;
pub mod player;
pub mod policy;
pub mod stats;
pub mod tic_tac_toe;
pub mod tree;
pub mod utils;

pub use config::MCTSConfig;
pub use draughts::{Board, DraughtsMove, EnglishDraughts, Piece, PieceKind};
pub use game_loop::{play_match, MatchReport};
pub use game_state::{GameState, Outcome, PlayerId};
pub use mcts::MCTS;
pub use player::{MCTSPlayer, Player, RandomPlayer};
pub use policy::{BackpropagationPolicy, RolloutResult, SelectionPolicy, SimulationPolicy};
pub use stats::SearchStatistics;
pub use tic_tac_toe::TicTacToe;
pub use tree::{MCTSNode, NodePath};

/// Error types for the search engine and the games it drives
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MCTSError {
    /// No legal actions are available from the current state
    #[error("No legal actions available from current state")]
    NoLegalActions,

    /// The root state is already decided
    #[error("Game is already over: {0}")]
    GameOver(Outcome),

    /// A move outside the legal move list was applied
    #[error("Illegal move: {0}")]
    IllegalMove(String),

    /// Draughts boards must have an even side between 4 and 12
    #[error("Invalid board size {0}: expected an even size between 4 and 12")]
    InvalidBoardSize(u8),

    /// A square number outside the board
    #[error("Square {0} is not on the board")]
    InvalidSquare(u8),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A player returned no move during a match
    #[error("{0} cannot play")]
    PlayerCannotMove(PlayerId),
}

/// Result type for MCTS operations
pub type Result<T> = std::result::Result<T, MCTSError>;
