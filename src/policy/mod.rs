//! Policies for different phases of the MCTS algorithm
//!
//! This module contains implementations of the policies used in MCTS:
//! - Selection policies: How to choose which nodes to explore
//! - Simulation policies: How to play out games from a node
//! - Backpropagation policies: How to update node statistics

pub mod backpropagation;
pub mod selection;
pub mod simulation;

pub use backpropagation::{BackpropagationPolicy, StandardPolicy};
pub use selection::{SelectionPolicy, UCTPolicy};
pub use simulation::{RandomPolicy, RolloutResult, SimulationPolicy};
