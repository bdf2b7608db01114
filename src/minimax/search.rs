//! Alpha-beta search with iterative deepening.
//!
//! `min_value` and `max_value` are mutually recursive over the two roles.
//! Terminal states score `utility(player)`, frontier states score the
//! heuristic, and both are always from the root player's point of view.

use std::time::Instant;

use tracing::{debug, warn};

use crate::agent::DecisionEngine;
use crate::core::{DecisionSink, GameRng, PlayerId, SearchError};
use crate::opening::{in_opening, random_action};
use crate::rules::GameState;

use super::config::AlphaBetaConfig;
use super::heuristic::{Heuristic, Mobility};
use super::stats::SearchStats;

/// Iterative-deepening alpha-beta engine.
///
/// Generic over the frontier heuristic; `Mobility` by default.
pub struct AlphaBetaSearch<H = Mobility> {
    config: AlphaBetaConfig,
    heuristic: H,
    rng: GameRng,
    stats: SearchStats,
}

impl AlphaBetaSearch<Mobility> {
    /// Create an engine using the mobility heuristic.
    pub fn new(config: AlphaBetaConfig) -> Self {
        Self::with_heuristic(config, Mobility)
    }
}

impl<H> AlphaBetaSearch<H> {
    /// Create an engine with a custom heuristic.
    pub fn with_heuristic(config: AlphaBetaConfig, heuristic: H) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            heuristic,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AlphaBetaConfig {
        &self.config
    }

    /// Statistics of the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best root action for a single fixed-depth search.
    ///
    /// Ties go to the first action in enumeration order. The root must not
    /// be terminal.
    pub fn search_depth<S>(&mut self, state: &S, depth: u32) -> Result<S::Action, SearchError>
    where
        S: GameState,
        H: Heuristic<S>,
    {
        self.best_root(state, depth).map(|(action, _)| action)
    }

    /// First root action with the highest value at `depth`, and that value.
    fn best_root<S>(&mut self, state: &S, depth: u32) -> Result<(S::Action, f64), SearchError>
    where
        S: GameState,
        H: Heuristic<S>,
    {
        let mut best: Option<(S::Action, f64)> = None;
        for (action, value) in self.root_values(state, depth)? {
            if best.as_ref().map_or(true, |(_, best_value)| value > *best_value) {
                best = Some((action, value));
            }
        }
        best.ok_or(SearchError::NoLegalActions)
    }

    /// Minimax value of every root action at `depth`, in enumeration order.
    ///
    /// Each child is searched with a fresh `(-inf, +inf)` window.
    pub fn root_values<S>(&mut self, state: &S, depth: u32) -> Result<Vec<(S::Action, f64)>, SearchError>
    where
        S: GameState,
        H: Heuristic<S>,
    {
        if state.terminal_test() {
            return Err(SearchError::TerminalRoot);
        }

        let player = state.player();
        let remaining = depth as i32 - 1;
        let values = state
            .actions()
            .into_iter()
            .map(|action| {
                let child = state.result(&action);
                let value = self.min_value(&child, player, f64::NEG_INFINITY, f64::INFINITY, remaining);
                (action, value)
            })
            .collect();
        Ok(values)
    }

    fn min_value<S>(&mut self, state: &S, player: PlayerId, alpha: f64, mut beta: f64, depth: i32) -> f64
    where
        S: GameState,
        H: Heuristic<S>,
    {
        self.stats.nodes += 1;
        if state.terminal_test() {
            return state.utility(player);
        }
        if depth <= 0 {
            return self.heuristic.evaluate(state, player);
        }

        let mut value = f64::INFINITY;
        for action in state.actions() {
            value = value.min(self.max_value(&state.result(&action), player, alpha, beta, depth - 1));
            if value <= alpha {
                self.stats.cutoffs += 1;
                return value;
            }
            beta = beta.min(value);
        }
        value
    }

    fn max_value<S>(&mut self, state: &S, player: PlayerId, mut alpha: f64, beta: f64, depth: i32) -> f64
    where
        S: GameState,
        H: Heuristic<S>,
    {
        self.stats.nodes += 1;
        if state.terminal_test() {
            return state.utility(player);
        }
        if depth <= 0 {
            return self.heuristic.evaluate(state, player);
        }

        let mut value = f64::NEG_INFINITY;
        for action in state.actions() {
            value = value.max(self.min_value(&state.result(&action), player, alpha, beta, depth - 1));
            if value >= beta {
                self.stats.cutoffs += 1;
                return value;
            }
            alpha = alpha.max(value);
        }
        value
    }
}

impl<S, H> DecisionEngine<S> for AlphaBetaSearch<H>
where
    S: GameState,
    H: Heuristic<S>,
{
    /// Push the best action of every completed depth, shallowest first.
    fn decide(&mut self, state: &S, sink: &mut dyn DecisionSink<S::Action>) -> Result<(), SearchError> {
        self.config.validate()?;
        let start = Instant::now();
        self.stats.reset();

        if in_opening(state) {
            sink.put(random_action(state, &mut self.rng)?);
            return Ok(());
        }

        if state.terminal_test() {
            warn!(ply = state.ply_count(), "alpha-beta asked to decide from a terminal root");
            sink.put(random_action(state, &mut self.rng)?);
            return Ok(());
        }

        for depth in 1..=self.config.depth_limit {
            let (action, value) = self.best_root(state, depth)?;
            self.stats.time_us = start.elapsed().as_micros() as u64;
            debug!(
                depth,
                ?action,
                value,
                nodes = self.stats.nodes,
                cutoffs = self.stats.cutoffs,
                nodes_per_second = self.stats.nodes_per_second(),
                "completed depth"
            );
            sink.put(action);
            self.stats.depth_reached = depth;

            if let Some(limit) = self.config.time_limit() {
                if start.elapsed() >= limit && depth < self.config.depth_limit {
                    debug!(depth, "time limit reached, stopping deepening");
                    break;
                }
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(())
    }
}
