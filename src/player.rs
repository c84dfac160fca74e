//! Move suppliers for the match driver
//!
//! A [`Player`] looks at a game state and picks the next move, or returns
//! `None` when it cannot play. Interactive players live in the demos; the
//! library provides a uniformly random player and the search-backed player.

use std::time::Duration;

use log::warn;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{config::MCTSConfig, game_state::GameState, mcts::MCTS};

/// Something that chooses moves for one side of a game
pub trait Player<S: GameState> {
    /// Returns the move to play from `game`, or `None` if this player cannot act
    fn play(&mut self, game: &S) -> Option<S::Move>;
}

/// Plays a uniformly random legal move
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player seeded from the OS
    pub fn new() -> Self {
        RandomPlayer {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a random player with a reproducible move sequence
    pub fn with_seed(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Player<S> for RandomPlayer {
    fn play(&mut self, game: &S) -> Option<S::Move> {
        game.legal_moves().choose(&mut self.rng).cloned()
    }
}

/// Runs a fresh search for every move it is asked for
#[derive(Debug, Clone)]
pub struct MCTSPlayer {
    config: MCTSConfig,
}

impl MCTSPlayer {
    /// Creates a player searching with `config`
    pub fn new(config: MCTSConfig) -> Self {
        MCTSPlayer { config }
    }

    /// Creates a player with the default configuration and `time` to think per move
    pub fn with_time(time: Duration) -> Self {
        Self::new(MCTSConfig::default().with_max_time(time))
    }

    /// Returns the configuration used for every search
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}

impl Default for MCTSPlayer {
    fn default() -> Self {
        Self::new(MCTSConfig::default())
    }
}

impl<S: GameState + 'static> Player<S> for MCTSPlayer {
    fn play(&mut self, game: &S) -> Option<S::Move> {
        let result = MCTS::new(game, self.config.clone()).and_then(|mut mcts| mcts.search());

        // Consecutive searches draw different rollouts
        if let Some(seed) = self.config.seed {
            self.config.seed = Some(seed.wrapping_add(1));
        }

        match result {
            Ok(mv) => Some(mv),
            Err(e) => {
                warn!("Search failed: {}", e);
                None
            }
        }
    }
}
