//! Tree data structures for Monte Carlo Tree Search
//!
//! This module defines the tree representation used in MCTS, including
//! nodes and paths through the tree.

use std::fmt;

use crate::{
    game_state::{GameState, Outcome, PlayerId},
    utils, Result,
};

/// Represents a node in the MCTS tree
///
/// Each node owns its own copy of the game state, the move that led to it,
/// statistics about visits and wins, and its children. Children are created all
/// at once the first time the node is expanded.
pub struct MCTSNode<S: GameState> {
    /// The game state at this node
    pub state: S,

    /// The move that led to this state (None for root)
    pub mv: Option<S::Move>,

    /// Number of playouts run through this node
    pub visits: u64,

    /// Win credit of `player` over those playouts; draws count half
    pub wins: f64,

    /// Children nodes, in the order of the parent's legal moves
    pub children: Vec<MCTSNode<S>>,

    /// Depth of this node in the tree (root = 0)
    pub depth: usize,

    /// Player whose wins are counted here: the one who made the move to reach
    /// this state. For the root node, this is the player to move.
    pub player: PlayerId,

    /// Decided outcome of `state`, if any. Such nodes are never expanded.
    pub outcome: Option<Outcome>,

    expanded: bool,
    exhausted: bool,
}

impl<S: GameState> MCTSNode<S> {
    /// Creates a new node with the given state and move
    pub fn new(
        state: S,
        mv: Option<S::Move>,
        parent_player: Option<PlayerId>,
        depth: usize,
    ) -> Self {
        let player = parent_player.unwrap_or_else(|| state.current_player());
        let outcome = state.winner();

        MCTSNode {
            state,
            mv,
            visits: 0,
            wins: 0.0,
            children: Vec::new(),
            depth,
            player,
            outcome,
            expanded: false,
            exhausted: outcome.is_some(),
        }
    }

    /// Returns the number of visits to this node
    pub fn visits(&self) -> u64 {
        self.visits
    }

    /// Returns the win credit accumulated at this node
    pub fn wins(&self) -> f64 {
        self.wins
    }

    /// Returns the average win credit (score) of this node
    pub fn value(&self) -> f64 {
        utils::win_rate(self.wins, self.visits)
    }

    /// Returns true if the game is decided at this node
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns true if this node is a leaf (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true once `expand` has run on this node
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns true if nothing below this node is left to expand
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Creates one child per legal move of this node's state
    ///
    /// Terminal nodes and already expanded nodes are left untouched. A state
    /// that is undecided yet has no legal move produces no children and is marked
    /// exhausted.
    ///
    /// # Returns
    ///
    /// The number of children created
    pub fn expand(&mut self) -> Result<usize> {
        if self.expanded || self.is_terminal() {
            return Ok(0);
        }

        let mover = self.state.current_player();
        let mut children = Vec::new();
        for mv in self.state.legal_moves() {
            let next_state = self.state.apply_action(&mv)?;
            children.push(MCTSNode::new(next_state, Some(mv), Some(mover), self.depth + 1));
        }

        self.expanded = true;
        self.exhausted = children.is_empty();
        self.children = children;
        Ok(self.children.len())
    }

    /// Recomputes the exhausted flags along `path`, deepest node first
    pub(crate) fn refresh_exhausted(&mut self, path: &[usize]) {
        if let Some((&first, rest)) = path.split_first() {
            if let Some(child) = self.children.get_mut(first) {
                child.refresh_exhausted(rest);
            }
        }
        if !self.exhausted && self.expanded {
            self.exhausted = self.children.iter().all(MCTSNode::is_exhausted);
        }
    }

    /// Number of nodes in the subtree rooted here, this node included
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(MCTSNode::subtree_size)
            .sum::<usize>()
    }

    /// Follows `path` from this node
    pub fn descendant(&self, path: &NodePath) -> Option<&MCTSNode<S>> {
        path.indices
            .iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }
}

/// Represents a path through the MCTS tree
///
/// A path is a sequence of indices that can be used to navigate from
/// the root node to a specific node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    /// Indices of children to follow from the root
    pub indices: Vec<usize>,
}

impl NodePath {
    /// Creates a new empty path (pointing to the root)
    pub fn new() -> Self {
        NodePath {
            indices: Vec::new(),
        }
    }

    /// Extends the path with a new index
    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    /// Returns the length of the path
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the path is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Default for NodePath {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path[")?;
        for (i, idx) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", idx)?;
        }
        write!(f, "]")
    }
}
