//! Alpha-beta configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::SearchError;

/// Alpha-beta configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlphaBetaConfig {
    /// Deepest iterative-deepening search, in plies.
    pub depth_limit: u32,

    /// Optional wall-clock allowance per decision (milliseconds).
    /// Only checked after a depth completes; a depth in progress always
    /// finishes, so the sink never holds a partial result.
    pub time_limit_ms: Option<u64>,

    /// Seed for opening moves.
    pub seed: u64,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self {
            depth_limit: 5,
            time_limit_ms: None,
            seed: 42,
        }
    }
}

impl AlphaBetaConfig {
    /// Create a new config with a custom depth ceiling.
    pub fn with_depth_limit(mut self, depth: u32) -> Self {
        self.depth_limit = depth;
        self
    }

    /// Create a new config that stops deepening after `ms` milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The time allowance as a `Duration`, if any.
    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.depth_limit == 0 {
            return Err(SearchError::InvalidConfig(
                "depth_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
