//! Simulation policies for the MCTS algorithm
//!
//! Simulation policies determine how to play out a game from a given state
//! to estimate the value of that state.

use rand::{seq::SliceRandom, RngCore};

use crate::{
    game_state::{GameState, Outcome, PlayerId},
    Result,
};

/// Tally of a batch of playouts
///
/// Wins are counted per player; a draw credits half a win to each side.
/// Results are purely additive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RolloutResult {
    /// Wins of player one
    pub wins_one: f64,
    /// Wins of player two
    pub wins_two: f64,
    /// Number of completed playouts
    pub playouts: u64,
}

impl RolloutResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished playout
    pub fn record(&mut self, outcome: Outcome) {
        self.wins_one += outcome.score_for(PlayerId::One);
        self.wins_two += outcome.score_for(PlayerId::Two);
        self.playouts += 1;
    }

    /// Adds another tally to this one
    pub fn add(&mut self, other: &RolloutResult) {
        self.wins_one += other.wins_one;
        self.wins_two += other.wins_two;
        self.playouts += other.playouts;
    }

    /// Win credit of `player`
    pub fn wins_for(&self, player: PlayerId) -> f64 {
        match player {
            PlayerId::One => self.wins_one,
            PlayerId::Two => self.wins_two,
        }
    }
}

/// Trait for policies that simulate games
pub trait SimulationPolicy<S: GameState> {
    /// Plays one game from `state` to its end and returns the outcome
    fn playout(&self, state: &S, rng: &mut dyn RngCore) -> Result<Outcome>;

    /// Plays `playouts` independent games from `state` and tallies them
    fn rollout(&self, state: &S, playouts: usize, rng: &mut dyn RngCore) -> Result<RolloutResult> {
        let mut result = RolloutResult::new();
        for _ in 0..playouts {
            result.record(self.playout(state, rng)?);
        }
        Ok(result)
    }
}

/// Random simulation policy
///
/// This policy plays uniformly random legal moves until the game is decided.
/// There is no depth limit: termination relies on the game's own end rules.
#[derive(Debug, Clone)]
pub struct RandomPolicy;

impl RandomPolicy {
    /// Creates a new random policy
    pub fn new() -> Self {
        RandomPolicy
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> SimulationPolicy<S> for RandomPolicy {
    fn playout(&self, state: &S, rng: &mut dyn RngCore) -> Result<Outcome> {
        let mut current = state.clone();
        loop {
            let moves = current.legal_moves();
            if let Some(outcome) = current.winner_given_moves(&moves) {
                return Ok(outcome);
            }
            match moves.choose(&mut *rng) {
                Some(mv) => current.apply_legal(mv)?,
                // an undecided player who cannot act loses
                None => return Ok(Outcome::Winner(current.current_player().other())),
            }
        }
    }
}

// Implement SimulationPolicy for Box<dyn SimulationPolicy>
impl<S: GameState> SimulationPolicy<S> for Box<dyn SimulationPolicy<S>> {
    fn playout(&self, state: &S, rng: &mut dyn RngCore) -> Result<Outcome> {
        (**self).playout(state, rng)
    }

    fn rollout(&self, state: &S, playouts: usize, rng: &mut dyn RngCore) -> Result<RolloutResult> {
        (**self).rollout(state, playouts, rng)
    }
}
