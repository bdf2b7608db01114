//! MCTS policies: UCB1 selection and rollouts.
//!
//! - Selection scores children with UCB1 and takes the first maximum
//! - Rollouts are trait-based; `RandomRollout` plays uniformly random moves

use crate::core::{GameRng, PlayerId};
use crate::rules::GameState;

use super::node::{NodeId, SearchNode};
use super::tree::SearchTree;

// =============================================================================
// Selection
// =============================================================================

/// Average observed reward of `node`.
#[inline]
pub fn exploit<S: GameState>(node: &SearchNode<S>) -> f64 {
    node.value / node.visits as f64
}

/// UCB1 uncertainty bonus: `sqrt(2 ln(parent visits) / visits)`.
#[inline]
pub fn explore<S: GameState>(node: &SearchNode<S>, parent: &SearchNode<S>) -> f64 {
    (2.0 * (parent.visits as f64).ln() / node.visits as f64).sqrt()
}

/// UCB1 score of `node` under exploration weight `c`.
#[inline]
pub fn ucb1<S: GameState>(node: &SearchNode<S>, parent: &SearchNode<S>, c: f64) -> f64 {
    exploit(node) + c * explore(node, parent)
}

/// Position in `parent`'s child list of the child with the highest UCB1
/// score. Ties go to the earliest child. `None` if `parent` has no children.
pub fn best_child<S: GameState>(tree: &SearchTree<S>, parent: NodeId, c: f64) -> Option<usize> {
    let parent_node = tree.get(parent);
    let mut best: Option<(usize, f64)> = None;

    for (i, &child) in parent_node.children.iter().enumerate() {
        let score = ucb1(tree.get(child), parent_node, c);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((i, score));
        }
    }

    best.map(|(i, _)| i)
}

// =============================================================================
// Rollout
// =============================================================================

/// Policy for playing a position out to the end of the game.
pub trait RolloutPolicy<S: GameState> {
    /// Play from `state` until a terminal state, returning it.
    fn playout(&self, state: &S, rng: &mut GameRng) -> S;
}

/// Random rollout policy.
///
/// Plays uniformly random legal actions until terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomRollout;

impl<S: GameState> RolloutPolicy<S> for RandomRollout {
    fn playout(&self, state: &S, rng: &mut GameRng) -> S {
        let mut state = state.clone();
        while !state.terminal_test() {
            let actions = state.actions();
            match rng.choose(&actions) {
                Some(action) => state = state.result(action),
                None => break,
            }
        }
        state
    }
}

/// Reward of a finished playout for the node it started from.
///
/// `leaf_mover` is the player to move at that node. The reward is from the
/// point of view of the player who moved into the node: +1 when
/// `leaf_mover` ends up without liberties, -1 when it still has some.
///
/// Only liberties are consulted, not who is to move. When the playout
/// ends with both pieces boxed in, every node scores +1 for the player
/// who moved into it, including the side that actually lost.
pub fn rollout_reward<S: GameState>(terminal: &S, leaf_mover: PlayerId) -> f64 {
    if terminal.has_liberties(leaf_mover) {
        -1.0
    } else {
        1.0
    }
}
