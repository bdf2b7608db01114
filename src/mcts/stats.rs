//! Per-decision MCTS counters.

use serde::{Deserialize, Serialize};

/// Counters for the most recent decision. Zeroed at the start of every
/// `search`; opening moves leave them at zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Completed cycles. Always equals `rollouts`.
    pub iterations: u32,

    /// Children attached to the tree; cycles ending on a terminal node
    /// expand nothing.
    pub nodes_expanded: u32,

    /// Playouts run to a terminal state.
    pub rollouts: u32,

    /// Depth of the deepest expanded node (root = 0).
    pub max_depth: u16,

    /// Wall-clock time of the search loop (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Cycles per second of wall-clock search, 0 before any timing.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        match self.time_us {
            0 => 0.0,
            us => f64::from(self.iterations) * 1e6 / us as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::isolation::IsolationBuilder;
    use crate::mcts::{MctsConfig, MctsSearch};

    fn open_board() -> crate::games::isolation::Isolation {
        IsolationBuilder::new(6, 6)
            .first_at(0, 0)
            .second_at(5, 5)
            .ply_count(2)
            .build()
    }

    #[test]
    fn test_rate_from_counters() {
        let stats = SearchStats {
            iterations: 300,
            time_us: 1_500,
            ..SearchStats::default()
        };
        assert_eq!(stats.iterations_per_second(), 200_000.0);
        assert_eq!(SearchStats::default().iterations_per_second(), 0.0);
    }

    #[test]
    fn test_search_fills_counters() {
        let config = MctsConfig::default()
            .with_time_limit(60_000)
            .with_max_iterations(40);
        let mut search = MctsSearch::new(config);

        search.search(&open_board()).unwrap();
        let stats = search.stats();

        assert_eq!(stats.iterations, 40);
        assert_eq!(stats.rollouts, stats.iterations);
        assert!(stats.nodes_expanded >= 1 && stats.nodes_expanded <= 40);
        assert!(stats.max_depth >= 1);
    }

    #[test]
    fn test_counters_do_not_accumulate() {
        let config = MctsConfig::default()
            .with_time_limit(60_000)
            .with_max_iterations(25);
        let mut search = MctsSearch::new(config);
        let state = open_board();

        search.search(&state).unwrap();
        search.search(&state).unwrap();

        assert_eq!(search.stats().iterations, 25);
        assert_eq!(search.stats().rollouts, 25);
    }
}
