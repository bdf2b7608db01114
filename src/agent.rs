//! Strategy dispatch over the two engines.
//!
//! Drivers talk to engines through `DecisionEngine`. An engine pushes one
//! or more candidate actions into the sink during `decide`; the last push
//! before `decide` returns is its answer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{DecisionSink, SearchError};
use crate::mcts::{MctsConfig, MctsSearch};
use crate::minimax::{AlphaBetaConfig, AlphaBetaSearch};
use crate::rules::GameState;

/// A move-choosing engine.
pub trait DecisionEngine<S: GameState> {
    /// Choose an action for the player to move in `state`.
    ///
    /// Each push to `sink` supersedes the previous one. On `Err`, the sink
    /// holds whatever was pushed before the failure (usually nothing).
    fn decide(&mut self, state: &S, sink: &mut dyn DecisionSink<S::Action>) -> Result<(), SearchError>;
}

/// Which search a player uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    AlphaBeta,
    Mcts,
}

impl Strategy {
    /// All strategies, in display order.
    pub const ALL: [Strategy; 2] = [Strategy::AlphaBeta, Strategy::Mcts];

    /// Command-line name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::Mcts => "mcts",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| SearchError::InvalidConfig(format!("unknown strategy '{s}'")))
    }
}

/// Either engine behind one type, so drivers can mix strategies.
pub enum Agent<S: GameState> {
    AlphaBeta(AlphaBetaSearch),
    Mcts(MctsSearch<S>),
}

impl<S: GameState> Agent<S> {
    /// Build an agent for `strategy`. Only the matching config is used.
    pub fn new(strategy: Strategy, alpha_beta: AlphaBetaConfig, mcts: MctsConfig) -> Self {
        match strategy {
            Strategy::AlphaBeta => Agent::AlphaBeta(AlphaBetaSearch::new(alpha_beta)),
            Strategy::Mcts => Agent::Mcts(MctsSearch::new(mcts)),
        }
    }

    /// The strategy this agent runs.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        match self {
            Agent::AlphaBeta(_) => Strategy::AlphaBeta,
            Agent::Mcts(_) => Strategy::Mcts,
        }
    }
}

impl<S: GameState> DecisionEngine<S> for Agent<S> {
    fn decide(&mut self, state: &S, sink: &mut dyn DecisionSink<S::Action>) -> Result<(), SearchError> {
        match self {
            Agent::AlphaBeta(search) => search.decide(state, sink),
            Agent::Mcts(search) => search.decide(state, sink),
        }
    }
}

impl<S: GameState> fmt::Debug for Agent<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Agent::AlphaBeta(search) => f.debug_tuple("AlphaBeta").field(search.config()).finish(),
            Agent::Mcts(search) => f.debug_tuple("Mcts").field(search.config()).finish(),
        }
    }
}
