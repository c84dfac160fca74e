//! Selection policies for the MCTS algorithm
//!
//! Selection policies determine which nodes to visit during the selection
//! phase of MCTS, balancing exploration and exploitation.

use crate::{game_state::GameState, tree::MCTSNode, utils};

/// Trait for policies that select nodes to explore
pub trait SelectionPolicy<S: GameState> {
    /// Selects a child index based on the policy
    ///
    /// Only called on nodes that have at least one child.
    fn select_child(&self, node: &MCTSNode<S>) -> usize;
}

/// Upper Confidence bound for Trees (UCT) selection policy
///
/// This is the classic selection policy for MCTS:
///
/// ```text
/// UCT = wins / visits + exploration_constant * sqrt(ln(parent_visits) / visits)
/// ```
///
/// Where:
/// - `wins / visits` is the child's score for the player choosing at the parent
/// - `exploration_constant` controls the balance between exploration and exploitation
/// - `parent_visits` is the number of visits to the parent node
/// - `visits` is the number of visits to the child node
///
/// Unvisited children score infinity, and ties go to the first child in move
/// order, so unvisited children are tried in order before any is revisited.
#[derive(Debug, Clone)]
pub struct UCTPolicy {
    /// Exploration constant that controls the balance between exploration and exploitation.
    /// Higher values favor exploration of less-visited nodes.
    pub exploration_constant: f64,
}

impl UCTPolicy {
    /// Creates a new UCT policy with the given exploration constant
    pub fn new(exploration_constant: f64) -> Self {
        UCTPolicy {
            exploration_constant,
        }
    }

    /// Calculates the UCT value for a child node
    pub fn uct_value(&self, child_wins: f64, child_visits: u64, parent_visits: u64) -> f64 {
        utils::uct_value(
            child_wins,
            child_visits,
            parent_visits,
            self.exploration_constant,
        )
    }
}

impl Default for UCTPolicy {
    fn default() -> Self {
        Self::new(std::f64::consts::SQRT_2)
    }
}

impl<S: GameState> SelectionPolicy<S> for UCTPolicy {
    fn select_child(&self, node: &MCTSNode<S>) -> usize {
        let parent_visits = node.visits();
        let mut best_value = f64::NEG_INFINITY;
        let mut best_index = 0;

        for (i, child) in node.children.iter().enumerate() {
            let uct = self.uct_value(child.wins(), child.visits(), parent_visits);
            if uct > best_value {
                best_value = uct;
                best_index = i;
            }
        }

        best_index
    }
}

// Implement SelectionPolicy for Box<dyn SelectionPolicy>
impl<S: GameState> SelectionPolicy<S> for Box<dyn SelectionPolicy<S>> {
    fn select_child(&self, node: &MCTSNode<S>) -> usize {
        (**self).select_child(node)
    }
}
