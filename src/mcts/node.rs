//! MCTS node structure.
//!
//! Nodes live in the `SearchTree` arena and refer to each other by
//! `NodeId`. A node owns its children through the arena; the parent link
//! is a plain index used only to walk upward.

use smallvec::SmallVec;

use crate::rules::GameState;

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A node in the MCTS tree.
///
/// `actions[i]` is the action that produced `children[i]`. Knight moves
/// give at most 8 children, so both lists stay inline.
#[derive(Clone, Debug)]
pub struct SearchNode<S: GameState> {
    /// Snapshot of the position at this node.
    pub state: S,

    /// Parent node (`None` for root).
    pub parent: Option<NodeId>,

    /// Visit count. Starts at 1 so UCB1 never divides by zero.
    pub visits: u32,

    /// Sum of backpropagated rewards, from the point of view of the
    /// player who moved into this node.
    pub value: f64,

    /// Actions already expanded from this node, in expansion order.
    pub actions: SmallVec<[S::Action; 8]>,

    /// Child nodes, parallel to `actions`.
    pub children: SmallVec<[NodeId; 8]>,

    /// Depth in tree (root = 0).
    pub depth: u16,
}

impl<S: GameState> SearchNode<S> {
    /// Create a new node.
    pub fn new(state: S, parent: Option<NodeId>, depth: u16) -> Self {
        Self {
            state,
            parent,
            visits: 1,
            value: 0.0,
            actions: SmallVec::new(),
            children: SmallVec::new(),
            depth,
        }
    }

    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self::new(state, None, 0)
    }

    /// Record one backpropagated reward.
    #[inline]
    pub fn update(&mut self, reward: f64) {
        self.value += reward;
        self.visits += 1;
    }

    /// Average reward per visit.
    #[inline]
    #[must_use]
    pub fn mean_value(&self) -> f64 {
        self.value / self.visits as f64
    }

    /// Whether every legal action has been expanded.
    #[must_use]
    pub fn is_fully_explored(&self) -> bool {
        self.actions.len() == self.state.actions().len()
    }

    /// First legal action, in canonical order, not yet expanded.
    #[must_use]
    pub fn next_untried(&self) -> Option<S::Action> {
        self.state
            .actions()
            .into_iter()
            .find(|action| !self.actions.contains(action))
    }
}
