//! MCTS configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::SearchError;

/// MCTS configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MctsConfig {
    /// Total time allowance per move (milliseconds), as granted by the
    /// match driver. `None` falls back to `default_delta_ms`.
    pub time_limit_ms: Option<u64>,

    /// Reserved out of `time_limit_ms` for returning the move. Also covers
    /// the one cycle that may still be in flight when the deadline passes.
    pub safety_buffer_ms: u64,

    /// Search time used when no allowance is configured.
    pub default_delta_ms: u64,

    /// UCB1 exploration weight during the search loop.
    /// The final move is always picked with weight 0.
    pub exploration: f64,

    /// Optional cap on search cycles, in addition to the deadline.
    /// Makes a decision independent of machine speed.
    pub max_iterations: Option<u32>,

    /// Random seed for opening moves and rollouts.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: None,
            safety_buffer_ms: 75,
            default_delta_ms: 25,
            exploration: 1.0,
            max_iterations: None,
            seed: 42,
        }
    }
}

impl MctsConfig {
    /// Create a new config with a per-move time allowance.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Create a new config with custom safety buffer.
    pub fn with_safety_buffer(mut self, ms: u64) -> Self {
        self.safety_buffer_ms = ms;
        self
    }

    /// Create a new config with custom exploration weight.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Create a new config with an iteration cap.
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// How long the search loop may run: allowance minus buffer, or the
    /// default when no allowance is configured.
    #[must_use]
    pub fn search_delta(&self) -> Duration {
        match self.time_limit_ms {
            Some(limit) => Duration::from_millis(limit.saturating_sub(self.safety_buffer_ms)),
            None => Duration::from_millis(self.default_delta_ms),
        }
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), SearchError> {
        if let Some(limit) = self.time_limit_ms {
            if limit <= self.safety_buffer_ms {
                return Err(SearchError::InvalidConfig(format!(
                    "time_limit_ms ({limit}) must exceed safety_buffer_ms ({})",
                    self.safety_buffer_ms
                )));
            }
        }
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "exploration must be a non-negative number, got {}",
                self.exploration
            )));
        }
        if self.max_iterations == Some(0) {
            return Err(SearchError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
