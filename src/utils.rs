//! Utility functions for the MCTS algorithm
//!
//! This module contains the UCT arithmetic shared by the selection policy
//! and the search reports.

/// Average win credit of a node, 0 if it has never been visited
pub fn win_rate(wins: f64, visits: u64) -> f64 {
    if visits == 0 {
        return 0.0;
    }
    wins / visits as f64
}

/// Calculates the exploration term for UCT
///
/// This is the term that encourages exploration of less-visited nodes.
pub fn exploration_term(parent_visits: u64, child_visits: u64, exploration_constant: f64) -> f64 {
    if child_visits == 0 {
        return f64::INFINITY;
    }

    exploration_constant * ((parent_visits as f64).ln() / child_visits as f64).sqrt()
}

/// Calculates the UCT value for a node
///
/// ```text
/// UCT = wins / visits + C * sqrt(ln(parent_visits) / visits)
/// ```
///
/// Unvisited nodes get an infinite value so they are always tried first.
pub fn uct_value(wins: f64, visits: u64, parent_visits: u64, exploration_constant: f64) -> f64 {
    if visits == 0 {
        return f64::INFINITY;
    }

    win_rate(wins, visits) + exploration_term(parent_visits, visits, exploration_constant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unvisited_is_infinite() {
        assert_eq!(uct_value(0.0, 0, 10, 1.0), f64::INFINITY);
        assert_eq!(win_rate(3.0, 0), 0.0);
    }

    #[test]
    fn test_uct_value() {
        let c = std::f64::consts::SQRT_2;
        let expected = 0.5 + c * ((100f64).ln() / 10.0).sqrt();
        assert!((uct_value(5.0, 10, 100, c) - expected).abs() < 1e-12);
    }
}
