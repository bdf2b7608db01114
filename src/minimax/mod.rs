//! Depth-limited minimax with alpha-beta pruning and iterative deepening.
//!
//! ## Overview
//!
//! `AlphaBetaSearch::decide` searches depth 1, 2, ... up to the configured
//! ceiling, pushing the best root action to the decision sink after every
//! completed depth. A driver that reads the sink early gets the answer of
//! the deepest finished search, never a partial one.
//!
//! ```rust
//! use isolation_search::agent::DecisionEngine;
//! use isolation_search::core::LatestDecision;
//! use isolation_search::games::isolation::{Cell, IsolationBuilder};
//! use isolation_search::minimax::{AlphaBetaConfig, AlphaBetaSearch};
//!
//! let state = IsolationBuilder::new(5, 5)
//!     .first_at(0, 0)
//!     .second_at(4, 4)
//!     .ply_count(2)
//!     .build();
//!
//! let mut search = AlphaBetaSearch::new(AlphaBetaConfig::default().with_depth_limit(3));
//! let mut sink: LatestDecision<Cell> = LatestDecision::new();
//! search.decide(&state, &mut sink).unwrap();
//!
//! assert_eq!(sink.pushes(), 3);
//! assert!(sink.get().is_some());
//! ```

pub mod config;
pub mod heuristic;
pub mod search;
pub mod stats;

pub use config::AlphaBetaConfig;
pub use heuristic::{Heuristic, Mobility};
pub use search::AlphaBetaSearch;
pub use stats::SearchStats;
