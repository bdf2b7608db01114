//! # isolation-search
//!
//! Decision engines for knight's Isolation: a two-player, zero-sum game
//! where each player moves one piece like a chess knight, every visited
//! cell closes, and a player with no legal move loses.
//!
//! ## Design Principles
//!
//! 1. **State-Agnostic**: Both engines search any `GameState`. The rules
//!    engine is a collaborator behind that trait, not part of the search.
//!
//! 2. **Anytime Answers**: Engines publish through a `DecisionSink`. Every
//!    push supersedes the last, so a driver can always act on the deepest
//!    finished result.
//!
//! 3. **Deterministic by Seed**: All randomness (opening moves, rollouts)
//!    comes from a seeded ChaCha8 RNG owned by each engine.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, errors, decision sinks
//! - `rules`: The `GameState` trait engines consume
//! - `opening`: Random play for the first two plies
//! - `minimax`: Iterative-deepening alpha-beta
//! - `mcts`: Monte Carlo Tree Search with UCB1
//! - `agent`: `DecisionEngine` trait and strategy dispatch
//! - `driver`: Runs a match between two engines
//! - `games`: Reference Isolation rules engine

pub mod core;
pub mod rules;
pub mod opening;
pub mod minimax;
pub mod mcts;
pub mod agent;
pub mod driver;
pub mod games;

// Re-export commonly used types
pub use crate::core::{DecisionSink, GameRng, LatestDecision, PlayerId, SearchError};

pub use crate::rules::GameState;

pub use crate::minimax::{AlphaBetaConfig, AlphaBetaSearch, Heuristic, Mobility};

pub use crate::mcts::{MctsConfig, MctsSearch};

pub use crate::agent::{Agent, DecisionEngine, Strategy};

pub use crate::driver::{play_match, Forfeit, MatchRecord};
