//! Alpha-beta search statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one decision. `time_us` is refreshed after
/// every completed depth, so the rate is current in per-depth logs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Deepest fully completed iterative-deepening depth.
    pub depth_reached: u32,

    /// States visited by `min_value`/`max_value`.
    pub nodes: u64,

    /// Subtrees skipped by an alpha or beta cutoff.
    pub cutoffs: u64,

    /// Total time spent deciding (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes searched per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
