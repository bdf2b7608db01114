//! Shared fixtures for integration tests.
//!
//! `TreeGame` walks a hand-built (or randomly generated) game tree, so
//! search results can be checked against values computed by hand.

#![allow(dead_code)]

use std::rc::Rc;

use isolation_search::games::isolation::{Isolation, IsolationBuilder};
use isolation_search::{GameRng, GameState, Heuristic, PlayerId};

// =============================================================================
// Isolation Fixtures
// =============================================================================

/// First player to move on a 5 x 5 board with two choices: (1, 3) loses
/// by force, (2, 2) strands the second player at once.
pub fn forced_win() -> Isolation {
    IsolationBuilder::new(5, 5)
        .open_only(&[(1, 1), (2, 2), (1, 3), (2, 3)])
        .first_at(0, 1)
        .second_at(4, 3)
        .ply_count(2)
        .build()
}

/// Both pieces in opposite corners of an open board, first player to move.
pub fn corners(size: u8) -> Isolation {
    let far = i16::from(size) - 1;
    IsolationBuilder::new(size, size)
        .first_at(0, 0)
        .second_at(far, far)
        .ply_count(2)
        .build()
}

// =============================================================================
// Synthetic Game Trees
// =============================================================================

/// A node of a synthetic game tree.
#[derive(Debug)]
pub struct TreeNode {
    /// Frontier score from the first player's point of view.
    pub score: f64,
    pub children: Vec<Rc<TreeNode>>,
}

impl TreeNode {
    /// A terminal node: the player to move there loses.
    pub fn leaf() -> Rc<Self> {
        Self::branch(0.0, Vec::new())
    }

    pub fn branch(score: f64, children: Vec<Rc<TreeNode>>) -> Rc<Self> {
        Rc::new(Self { score, children })
    }

    /// A random tree at most `depth` plies deep. Internal nodes have 1 to
    /// 3 children; below the root a node may also stop early as a leaf.
    pub fn random(rng: &mut GameRng, depth: u32) -> Rc<Self> {
        Self::random_inner(rng, depth, true)
    }

    fn random_inner(rng: &mut GameRng, depth: u32, root: bool) -> Rc<Self> {
        let score = rng.gen_range_usize(0..11) as f64 - 5.0;
        if depth == 0 {
            return Self::branch(score, Vec::new());
        }
        let width = if root {
            rng.gen_range_usize(1..4)
        } else {
            rng.gen_range_usize(0..4)
        };
        let children = (0..width)
            .map(|_| Self::random_inner(rng, depth - 1, false))
            .collect();
        Self::branch(score, children)
    }
}

/// Game state walking a `TreeNode` tree. Actions are child indices.
#[derive(Clone, Debug)]
pub struct TreeGame {
    node: Rc<TreeNode>,
    ply: u32,
}

impl TreeGame {
    /// Start at `root` with the first player to move, past the opening.
    pub fn new(root: Rc<TreeNode>) -> Self {
        Self { node: root, ply: 2 }
    }

    pub fn node(&self) -> &TreeNode {
        &self.node
    }
}

impl GameState for TreeGame {
    type Action = usize;
    type Location = PlayerId;

    fn ply_count(&self) -> u32 {
        self.ply
    }

    fn actions(&self) -> Vec<usize> {
        (0..self.node.children.len()).collect()
    }

    fn result(&self, action: &usize) -> Self {
        Self {
            node: Rc::clone(&self.node.children[*action]),
            ply: self.ply + 1,
        }
    }

    fn terminal_test(&self) -> bool {
        self.node.children.is_empty()
    }

    fn utility(&self, player: PlayerId) -> f64 {
        if !self.terminal_test() {
            0.0
        } else if player == self.player() {
            -1.0
        } else {
            1.0
        }
    }

    fn loc(&self, player: PlayerId) -> PlayerId {
        player
    }

    /// Only the player to move has moves; the other player is never stuck.
    fn liberties(&self, loc: PlayerId) -> Vec<usize> {
        if loc == self.player() {
            self.actions()
        } else {
            Vec::new()
        }
    }

    fn player(&self) -> PlayerId {
        PlayerId::to_move(self.ply)
    }

    fn has_liberties(&self, player: PlayerId) -> bool {
        player != self.player() || !self.terminal_test()
    }
}

/// Reads the precomputed node score.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreeScore;

impl Heuristic<TreeGame> for TreeScore {
    fn evaluate(&self, state: &TreeGame, player: PlayerId) -> f64 {
        if player == PlayerId::FIRST {
            state.node().score
        } else {
            -state.node().score
        }
    }
}

/// Plain depth-limited minimax with the same leaf conventions as the
/// engine: terminals score `utility(player)`, the frontier scores the
/// heuristic.
pub fn minimax(state: &TreeGame, player: PlayerId, depth: u32) -> f64 {
    if state.terminal_test() {
        return state.utility(player);
    }
    if depth == 0 {
        return TreeScore.evaluate(state, player);
    }
    let values = state
        .actions()
        .into_iter()
        .map(|a| minimax(&state.result(&a), player, depth - 1));
    if state.player() == player {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}
