//! Monte Carlo Tree Search with UCB1 selection.
//!
//! ## Overview
//!
//! The engine grows a fresh tree for every decision until its deadline:
//!
//! - **Selection**: descend fully explored nodes by UCB1 (`c = 1`)
//! - **Expansion**: add the first untried action in canonical order
//! - **Rollout**: play out uniformly at random to a terminal state
//! - **Backpropagation**: add the reward, negating it at each level
//!
//! The final pick is the root child with the best mean reward (`c = 0`).
//! Rewards are stored from the point of view of the player who moved into
//! each node, so a root child's value is the root player's outlook.
//!
//! ## Usage
//!
//! ```rust
//! use isolation_search::agent::DecisionEngine;
//! use isolation_search::core::LatestDecision;
//! use isolation_search::games::isolation::{Cell, IsolationBuilder};
//! use isolation_search::mcts::{MctsConfig, MctsSearch};
//!
//! let state = IsolationBuilder::new(5, 5)
//!     .first_at(0, 0)
//!     .second_at(4, 4)
//!     .ply_count(2)
//!     .build();
//!
//! let config = MctsConfig::default().with_time_limit(150);
//! let mut search = MctsSearch::new(config);
//! let mut sink: LatestDecision<Cell> = LatestDecision::new();
//!
//! search.decide(&state, &mut sink).unwrap();
//! assert_eq!(sink.pushes(), 1);
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use node::{NodeId, SearchNode};
pub use policy::{best_child, rollout_reward, ucb1, RandomRollout, RolloutPolicy};
pub use search::{MctsSearch, RootChild};
pub use stats::SearchStats;
pub use tree::{SearchTree, TreeStats};
