//! Configuration options for the MCTS algorithm
//!
//! This module defines the configuration parameters that control the
//! behavior of the MCTS algorithm.

use std::time::Duration;

use crate::{MCTSError, Result};

/// Rollouts played from a node each iteration unless configured otherwise
pub const DEFAULT_PLAYOUTS_PER_ITERATION: usize = 100;

/// Thinking time per move unless configured otherwise
pub const DEFAULT_MAX_TIME: Duration = Duration::from_millis(1000);

/// Criteria for selecting the best child after search is complete
///
/// This determines how the final move is selected after the search budget is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestChildCriteria {
    /// Select the child with the most visits, ties broken by the highest win score
    ///
    /// This is generally more robust and conservative, as it relies on
    /// statistical confidence rather than potentially noisy value estimates.
    MostVisits,

    /// Select the child with the highest average value
    ///
    /// Favors high-value moves even if they haven't been visited as often.
    HighestValue,
}

/// Configuration for the MCTS algorithm
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use draughts_mcts::{MCTSConfig, config::BestChildCriteria};
/// use std::time::Duration;
///
/// let config = MCTSConfig::default()
///     .with_exploration_constant(1.5)
///     .with_max_time(Duration::from_secs(5))
///     .with_playouts_per_iteration(50)
///     .with_best_child_criteria(BestChildCriteria::MostVisits)
///     .with_seed(42);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MCTSConfig {
    /// Exploration constant for UCT
    ///
    /// Controls the balance between exploration and exploitation.
    /// The standard value is sqrt(2).
    pub exploration_constant: f64,

    /// Wall-clock budget for one search, measured once when the search starts
    pub max_time: Option<Duration>,

    /// Optional cap on the number of iterations
    pub max_iterations: Option<usize>,

    /// Number of random playouts run from the expanded node each iteration
    pub playouts_per_iteration: usize,

    /// Criteria for selecting the best child after search
    pub best_child_criteria: BestChildCriteria,

    /// Seed for the random number generator, `None` to seed from the OS
    pub seed: Option<u64>,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        MCTSConfig {
            exploration_constant: std::f64::consts::SQRT_2,
            max_time: Some(DEFAULT_MAX_TIME),
            max_iterations: None,
            playouts_per_iteration: DEFAULT_PLAYOUTS_PER_ITERATION,
            best_child_criteria: BestChildCriteria::MostVisits,
            seed: None,
        }
    }
}

impl MCTSConfig {
    /// Sets the exploration constant
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the maximum time to run the search
    pub fn with_max_time(mut self, duration: Duration) -> Self {
        self.max_time = Some(duration);
        self
    }

    /// Removes the time budget; an iteration cap is then required
    pub fn without_time_limit(mut self) -> Self {
        self.max_time = None;
        self
    }

    /// Sets the maximum number of iterations
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Sets the rollout batch size
    pub fn with_playouts_per_iteration(mut self, playouts: usize) -> Self {
        self.playouts_per_iteration = playouts;
        self
    }

    /// Sets the criteria for selecting the best child
    pub fn with_best_child_criteria(mut self, criteria: BestChildCriteria) -> Self {
        self.best_child_criteria = criteria;
        self
    }

    /// Seeds the search's random number generator
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the configuration describes a search that can run and end
    pub fn validate(&self) -> Result<()> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(MCTSError::InvalidConfiguration(format!(
                "exploration constant must be a non-negative number, got {}",
                self.exploration_constant
            )));
        }
        if self.playouts_per_iteration == 0 {
            return Err(MCTSError::InvalidConfiguration(
                "playouts per iteration must be at least 1".to_string(),
            ));
        }
        if self.max_time.is_none() && self.max_iterations.is_none() {
            return Err(MCTSError::InvalidConfiguration(
                "either a time limit or an iteration limit is required".to_string(),
            ));
        }
        Ok(())
    }
}
