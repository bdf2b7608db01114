//! Core MCTS-UCT search algorithm.
//!
//! Each cycle runs four phases until the deadline passes:
//! 1. Selection: descend fully explored nodes by UCB1
//! 2. Expansion: attach the first untried action as a new child
//! 3. Rollout: play the child's position out at random
//! 4. Backpropagation: add the reward up to the root, flipping sign per level

use std::time::Instant;

use tracing::debug;

use crate::agent::DecisionEngine;
use crate::core::{DecisionSink, GameRng, SearchError};
use crate::opening::{in_opening, random_action};
use crate::rules::GameState;

use super::config::MctsConfig;
use super::node::NodeId;
use super::policy::{best_child, rollout_reward, RandomRollout, RolloutPolicy};
use super::stats::SearchStats;
use super::tree::{SearchTree, TreeStats};

/// Summary of one root child after a decision.
#[derive(Clone, Debug, PartialEq)]
pub struct RootChild<A> {
    /// The action leading to this child.
    pub action: A,

    /// Visit count (including the initial 1).
    pub visits: u32,

    /// Accumulated reward, from the root player's point of view.
    pub value: f64,
}

/// MCTS-UCT engine.
///
/// Owns its configuration and RNG across decisions. The search tree is
/// created per decision and dropped before `decide` returns.
pub struct MctsSearch<S: GameState, R = RandomRollout> {
    /// Search configuration.
    config: MctsConfig,

    /// Rollout policy.
    rollout: R,

    /// RNG for opening moves and rollouts.
    rng: GameRng,

    /// Statistics of the last decision.
    stats: SearchStats,

    /// Shape of the last decision's tree.
    tree_stats: TreeStats,

    /// Root children of the last decision.
    root_children: Vec<RootChild<S::Action>>,
}

impl<S: GameState> MctsSearch<S> {
    /// Create an engine with random rollouts.
    pub fn new(config: MctsConfig) -> Self {
        Self::with_rollout(config, RandomRollout)
    }
}

impl<S: GameState, R: RolloutPolicy<S>> MctsSearch<S, R> {
    /// Create an engine with a custom rollout policy.
    pub fn with_rollout(config: MctsConfig, rollout: R) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rollout,
            rng,
            stats: SearchStats::default(),
            tree_stats: TreeStats::default(),
            root_children: Vec::new(),
        }
    }

    /// Run the search from `state` and return the chosen action.
    ///
    /// A terminal root short-circuits to a uniformly random legal action
    /// without building a tree.
    pub fn search(&mut self, state: &S) -> Result<S::Action, SearchError> {
        let start = Instant::now();
        self.stats.reset();
        self.tree_stats = TreeStats::default();
        self.root_children.clear();

        if state.terminal_test() {
            return random_action(state, &mut self.rng);
        }

        let deadline = start + self.config.search_delta();
        let mut tree = SearchTree::new(state.clone());

        // The first cycle always runs so the root gets a child
        loop {
            self.iteration(&mut tree);

            if let Some(max) = self.config.max_iterations {
                if self.stats.iterations >= max {
                    break;
                }
            }
            if Instant::now() >= deadline {
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.tree_stats = tree.stats();

        let root = tree.root_node();
        self.root_children = root
            .actions
            .iter()
            .zip(root.children.iter())
            .map(|(action, &child)| RootChild {
                action: action.clone(),
                visits: tree.get(child).visits,
                value: tree.get(child).value,
            })
            .collect();

        let best = best_child(&tree, tree.root(), 0.0).ok_or(SearchError::NoLegalActions)?;
        let action = root.actions[best].clone();

        debug!(
            iterations = self.stats.iterations,
            nodes = self.tree_stats.node_count,
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            iterations_per_second = self.stats.iterations_per_second(),
            ?action,
            mean_value = self.root_children[best].value / self.root_children[best].visits as f64,
            "mcts decision"
        );

        Ok(action)
    }

    /// One select-expand-rollout-backprop cycle.
    fn iteration(&mut self, tree: &mut SearchTree<S>) {
        let leaf = self.tree_policy(tree);

        let leaf_node = tree.get(leaf);
        let leaf_mover = leaf_node.state.player();
        let terminal = self.rollout.playout(&leaf_node.state, &mut self.rng);
        self.stats.rollouts += 1;

        let reward = rollout_reward(&terminal, leaf_mover);
        tree.backpropagate(leaf, reward);
        self.stats.iterations += 1;
    }

    /// Descend from the root until a node can be expanded or a terminal
    /// node is reached.
    fn tree_policy(&mut self, tree: &mut SearchTree<S>) -> NodeId {
        let mut node = tree.root();
        while !tree.get(node).state.terminal_test() {
            if !tree.get(node).is_fully_explored() {
                return self.expand(tree, node);
            }
            match best_child(tree, node, self.config.exploration) {
                Some(i) => node = tree.get(node).children[i],
                None => break,
            }
        }
        node
    }

    /// Attach the first untried action of `node` as a new child.
    fn expand(&mut self, tree: &mut SearchTree<S>, node: NodeId) -> NodeId {
        let parent = tree.get(node);
        let Some(action) = parent.next_untried() else {
            return node;
        };
        let state = parent.state.result(&action);
        let child = tree.add_child(node, action, state);

        self.stats.nodes_expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(tree.get(child).depth);
        child
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Shape of the last decision's tree.
    #[must_use]
    pub fn tree_stats(&self) -> &TreeStats {
        &self.tree_stats
    }

    /// Root children of the last decision, in expansion order.
    #[must_use]
    pub fn root_children(&self) -> &[RootChild<S::Action>] {
        &self.root_children
    }

    /// Get the configuration.
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

impl<S: GameState, R: RolloutPolicy<S>> DecisionEngine<S> for MctsSearch<S, R> {
    /// Push exactly one action: the opening move or the search result.
    fn decide(&mut self, state: &S, sink: &mut dyn DecisionSink<S::Action>) -> Result<(), SearchError> {
        self.config.validate()?;

        let action = if in_opening(state) {
            self.stats.reset();
            random_action(state, &mut self.rng)?
        } else {
            self.search(state)?
        };
        sink.put(action);
        Ok(())
    }
}
