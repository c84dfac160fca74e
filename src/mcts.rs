//! Main implementation of the Monte Carlo Tree Search algorithm
//!
//! This module contains the core MCTS implementation, orchestrating the
//! four phases of selection, expansion, simulation, and backpropagation.

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::{BestChildCriteria, MCTSConfig},
    game_state::GameState,
    policy::{
        backpropagation::{BackpropagationPolicy, StandardPolicy},
        selection::{SelectionPolicy, UCTPolicy},
        simulation::{RandomPolicy, RolloutResult, SimulationPolicy},
    },
    stats::SearchStatistics,
    tree::{MCTSNode, NodePath},
    MCTSError, Result,
};

/// The main Monte Carlo Tree Search implementation
///
/// The engine works on its own copy of the game state and rebuilds its tree
/// from scratch on every search; nothing is kept between searches except the
/// configuration, the policies and the random number generator.
pub struct MCTS<S: GameState> {
    /// Root node of the search tree
    pub root: MCTSNode<S>,

    /// Configuration for the search
    config: MCTSConfig,

    /// Statistics gathered during search
    statistics: SearchStatistics,

    /// Policy for selecting nodes during the selection phase
    selection_policy: Box<dyn SelectionPolicy<S>>,

    /// Policy for simulating games during the simulation phase
    simulation_policy: Box<dyn SimulationPolicy<S>>,

    /// Policy for backpropagating results
    backpropagation_policy: Box<dyn BackpropagationPolicy<S>>,

    /// Source of randomness for the rollouts
    rng: StdRng,
}

impl<S: GameState + 'static> MCTS<S> {
    /// Creates a new MCTS instance searching from a copy of `state`
    pub fn new(state: &S, config: MCTSConfig) -> Result<Self> {
        config.validate()?;

        let root = MCTSNode::new(state.clone(), None, None, 0);

        let selection_policy: Box<dyn SelectionPolicy<S>> =
            Box::new(UCTPolicy::new(config.exploration_constant));

        let simulation_policy: Box<dyn SimulationPolicy<S>> = Box::new(RandomPolicy::new());

        let backpropagation_policy: Box<dyn BackpropagationPolicy<S>> =
            Box::new(StandardPolicy::new());

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(MCTS {
            root,
            config,
            statistics: SearchStatistics::new(),
            selection_policy,
            simulation_policy,
            backpropagation_policy,
            rng,
        })
    }

    /// Sets the selection policy to use
    pub fn with_selection_policy<P: SelectionPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }

    /// Sets the simulation policy to use
    pub fn with_simulation_policy<P: SimulationPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.simulation_policy = Box::new(policy);
        self
    }

    /// Sets the backpropagation policy to use
    pub fn with_backpropagation_policy<P: BackpropagationPolicy<S> + 'static>(
        mut self,
        policy: P,
    ) -> Self {
        self.backpropagation_policy = Box::new(policy);
        self
    }

    /// Returns the configuration
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Runs the search within the configured budget and returns the best move
    ///
    /// # Errors
    ///
    /// * [`MCTSError::GameOver`] if the root state is already decided
    /// * [`MCTSError::NoLegalActions`] if the player to move cannot act
    pub fn search(&mut self) -> Result<S::Move> {
        self.run(self.config.max_time, self.config.max_iterations)
    }

    /// Runs the search for the specified duration, ignoring the configured budget
    pub fn search_for_time(&mut self, duration: Duration) -> Result<S::Move> {
        self.run(Some(duration), None)
    }

    /// Runs the search for the specified number of iterations, ignoring the configured budget
    ///
    /// The loop still ends early if the whole tree gets decided.
    pub fn search_for_iterations(&mut self, iterations: usize) -> Result<S::Move> {
        self.run(None, Some(iterations))
    }

    fn run(&mut self, max_time: Option<Duration>, max_iterations: Option<usize>) -> Result<S::Move> {
        // Rebuild the tree from the root state
        let state = self.root.state.clone();
        self.root = MCTSNode::new(state, None, None, 0);
        self.statistics = SearchStatistics::new();

        if let Some(outcome) = self.root.outcome {
            return Err(MCTSError::GameOver(outcome));
        }
        if self.root.state.legal_moves().is_empty() {
            return Err(MCTSError::NoLegalActions);
        }

        debug!(
            "Starting search for {} (time limit: {:?}, iteration limit: {:?})",
            self.root.player, max_time, max_iterations
        );

        let start_time = Instant::now();

        // Main search loop
        loop {
            if max_iterations.is_some_and(|limit| self.statistics.iterations >= limit) {
                break;
            }

            if let Some(max_duration) = max_time {
                if start_time.elapsed() >= max_duration {
                    self.statistics.stopped_early = true;
                    debug!("Search stopped early due to time limit");
                    break;
                }
            }

            if self.root.is_exhausted() {
                self.statistics.tree_exhausted = true;
                debug!("Search stopped: every line in the tree is decided");
                break;
            }

            // Execute one iteration of MCTS
            self.execute_iteration()?;

            self.statistics.iterations += 1;
        }

        self.statistics.total_time = start_time.elapsed();

        info!(
            "Stopped search after {} ms and {} iterations. Root stats is {}/{} ({:.2}% win for {})",
            self.statistics.total_time.as_millis(),
            self.statistics.iterations,
            self.root.wins(),
            self.root.visits(),
            100.0 * self.root.value(),
            self.root.player
        );

        self.select_best_move()
    }

    /// Execute a single iteration of the MCTS algorithm
    fn execute_iteration(&mut self) -> Result<()> {
        // 1. Selection phase
        let mut path = self.selection();

        // 2. Expansion phase
        self.expansion(&mut path)?;

        // 3. Simulation phase
        let result = self.simulation(&path)?;

        // 4. Backpropagation phase
        self.backpropagation(&path, &result);

        Ok(())
    }

    /// Selection phase: descend by UCT until reaching a node without children
    fn selection(&mut self) -> NodePath {
        let mut path = NodePath::new();
        let mut current = &self.root;

        while !current.is_leaf() {
            let best_child_idx = self.selection_policy.select_child(current);

            let Some(child) = current.children.get(best_child_idx) else {
                break;
            };

            path.push(best_child_idx);
            current = child;

            self.statistics.max_depth = self.statistics.max_depth.max(path.len());
        }

        path
    }

    /// Expansion phase: create every child of the selected leaf
    ///
    /// When children are created, `path` is extended to the first of them, which
    /// becomes the simulation target. Decided leaves are left as they are.
    fn expansion(&mut self, path: &mut NodePath) -> Result<()> {
        let mut node = &mut self.root;
        for &index in &path.indices {
            node = &mut node.children[index];
        }

        if node.is_terminal() || node.is_expanded() {
            return Ok(());
        }

        let created = node.expand()?;
        self.statistics.tree_size += created;
        if created > 0 {
            path.push(0);
            self.statistics.max_depth = self.statistics.max_depth.max(path.len());
        }

        Ok(())
    }

    /// Simulation phase: play a batch of random games from the node at `path`
    fn simulation(&mut self, path: &NodePath) -> Result<RolloutResult> {
        let node = self.root.descendant(path).unwrap_or(&self.root);
        let result = self.simulation_policy.rollout(
            &node.state,
            self.config.playouts_per_iteration,
            &mut self.rng,
        )?;
        self.statistics.playouts += result.playouts;
        Ok(result)
    }

    /// Backpropagation phase: Update statistics in all nodes along the path
    fn backpropagation(&mut self, path: &NodePath, result: &RolloutResult) {
        // First, update the root node
        self.backpropagation_policy.update_stats(&mut self.root, result);

        // Then update all nodes along the path
        let mut node = &mut self.root;

        for &index in &path.indices {
            node = &mut node.children[index];
            self.backpropagation_policy.update_stats(node, result);
        }

        self.root.refresh_exhausted(&path.indices);
    }

    /// Returns the root child that the configured criteria rank first
    pub fn best_child(&self) -> Option<&MCTSNode<S>> {
        let mut best: Option<&MCTSNode<S>> = None;

        for child in &self.root.children {
            let better = match best {
                None => true,
                Some(current) => match self.config.best_child_criteria {
                    BestChildCriteria::MostVisits => {
                        child.visits() > current.visits()
                            || (child.visits() == current.visits()
                                && child.wins() > current.wins())
                    }
                    BestChildCriteria::HighestValue => child.value() > current.value(),
                },
            };
            if better {
                best = Some(child);
            }
        }

        best
    }

    /// Selects the best move based on configured criteria
    fn select_best_move(&self) -> Result<S::Move> {
        match self.best_child() {
            Some(child) => child.mv.clone().ok_or(MCTSError::NoLegalActions),
            // Nothing was explored: fall back to the first legal move
            None => self
                .root
                .state
                .legal_moves()
                .into_iter()
                .next()
                .ok_or(MCTSError::NoLegalActions),
        }
    }

    /// Returns the search statistics
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Score and win/visit counts of every root move, one per line
    pub fn move_statistics(&self) -> String {
        let mut result = format!("MCTS with {} iterations\n", self.statistics.iterations);
        for child in &self.root.children {
            if let Some(mv) = &child.mv {
                result.push_str(&format!(
                    "{} : {:.4} ({}/{})\n",
                    self.root.state.move_name(mv),
                    child.value(),
                    child.wins(),
                    child.visits()
                ));
            }
        }
        result
    }

    /// Returns a visualization of the search tree
    pub fn visualize_tree(&self) -> String {
        let mut result = String::new();
        Self::visualize_node(&self.root, None, 0, &mut result);
        result
    }

    /// Helper method to visualize a node and its children
    ///
    /// `parent` is the state the node's move was played from.
    fn visualize_node(node: &MCTSNode<S>, parent: Option<&S>, depth: usize, output: &mut String) {
        let indent = "  ".repeat(depth);
        let move_str = match (&node.mv, parent) {
            (Some(mv), Some(parent)) => parent.move_name(mv),
            _ => "Root".to_string(),
        };

        output.push_str(&format!(
            "{}{} (visits: {}, value: {:.3})\n",
            indent,
            move_str,
            node.visits(),
            node.value()
        ));

        for child in &node.children {
            Self::visualize_node(child, Some(&node.state), depth + 1, output);
        }
    }
}
