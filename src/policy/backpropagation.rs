//! Backpropagation policies for the MCTS algorithm
//!
//! Backpropagation policies determine how to update node statistics
//! after a simulation batch.

use crate::{game_state::GameState, policy::simulation::RolloutResult, tree::MCTSNode};

/// Trait for policies that backpropagate simulation results
pub trait BackpropagationPolicy<S: GameState> {
    /// Updates statistics for a node based on a rollout batch
    fn update_stats(&self, node: &mut MCTSNode<S>, result: &RolloutResult);
}

/// Standard backpropagation policy
///
/// Adds the batch's playouts to the visit count and credits the node with the
/// wins of its own player (the one who moved into it). Siblings therefore all
/// hold scores from the point of view of the player choosing between them.
#[derive(Debug, Clone)]
pub struct StandardPolicy;

impl StandardPolicy {
    /// Creates a new standard policy
    pub fn new() -> Self {
        StandardPolicy
    }
}

impl Default for StandardPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> BackpropagationPolicy<S> for StandardPolicy {
    fn update_stats(&self, node: &mut MCTSNode<S>, result: &RolloutResult) {
        node.visits += result.playouts;
        node.wins += result.wins_for(node.player);
    }
}

// Implement BackpropagationPolicy for Box<dyn BackpropagationPolicy>
impl<S: GameState> BackpropagationPolicy<S> for Box<dyn BackpropagationPolicy<S>> {
    fn update_stats(&self, node: &mut MCTSNode<S>, result: &RolloutResult) {
        (**self).update_stats(node, result)
    }
}
