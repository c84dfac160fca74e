//! Statistics collection for MCTS searches
//!
//! This module provides structures for collecting and reporting statistics
//! about one MCTS search session.

use std::time::Duration;

/// Statistics collected during an MCTS search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatistics {
    /// Number of iterations performed
    pub iterations: usize,

    /// Number of random playouts performed
    pub playouts: u64,

    /// Total time spent searching
    pub total_time: Duration,

    /// Total number of nodes in the tree
    pub tree_size: usize,

    /// Maximum depth reached in the tree
    pub max_depth: usize,

    /// Whether the search was stopped by the time limit
    pub stopped_early: bool,

    /// Whether the search ended because every line in the tree was decided
    pub tree_exhausted: bool,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            iterations: 0,
            playouts: 0,
            total_time: Duration::from_secs(0),
            tree_size: 1, // Start with root node
            max_depth: 0,
            stopped_early: false,
            tree_exhausted: false,
        }
    }

    /// Returns the average time per iteration in microseconds
    pub fn avg_time_per_iteration_us(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.total_time.as_micros() as f64 / self.iterations as f64
    }

    /// Returns the number of playouts per second
    pub fn playouts_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.playouts as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "MCTS Search Statistics:\n\
             - Iterations: {}\n\
             - Playouts: {}\n\
             - Total time: {:.3} seconds\n\
             - Tree size: {} nodes\n\
             - Max depth: {}\n\
             - Avg time per iteration: {:.3} µs\n\
             - Playouts per second: {:.1}\n\
             - Stopped early: {}\n\
             - Tree exhausted: {}",
            self.iterations,
            self.playouts,
            self.total_time.as_secs_f64(),
            self.tree_size,
            self.max_depth,
            self.avg_time_per_iteration_us(),
            self.playouts_per_second(),
            self.stopped_early,
            self.tree_exhausted
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
