//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references. A tree is
//! built fresh for every decision and dropped when the decision is made.

use crate::rules::GameState;

use super::node::{NodeId, SearchNode};

/// Arena-based MCTS tree.
#[derive(Clone, Debug)]
pub struct SearchTree<S: GameState> {
    /// All nodes in the tree. The root is always at index 0.
    nodes: Vec<SearchNode<S>>,
}

impl<S: GameState> SearchTree<S> {
    /// Create a new tree rooted at `state`.
    pub fn new(state: S) -> Self {
        let mut nodes = Vec::with_capacity(1024);
        nodes.push(SearchNode::root(state));
        Self { nodes }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Attach a child reached from `parent` by `action`.
    ///
    /// Panics if `action` was already expanded from `parent`.
    pub fn add_child(&mut self, parent: NodeId, action: S::Action, state: S) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        let depth = self.get(parent).depth + 1;

        let parent_node = self.get_mut(parent);
        assert!(
            !parent_node.actions.contains(&action),
            "Action {:?} already expanded from {}",
            action,
            parent
        );
        parent_node.actions.push(action);
        parent_node.children.push(id);

        self.nodes.push(SearchNode::new(state, Some(parent), depth));
        id
    }

    /// Add `reward` to `leaf` and every ancestor, flipping its sign at
    /// each step up.
    pub fn backpropagate(&mut self, leaf: NodeId, mut reward: f64) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.update(reward);
            current = node.parent;
            reward = -reward;
        }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode<S> {
        self.get(self.root())
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            terminal_count: self.nodes.iter().filter(|n| n.state.terminal_test()).count(),
        }
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::isolation::{Isolation, IsolationBuilder};

    fn corner_state() -> Isolation {
        IsolationBuilder::new(5, 5)
            .first_at(0, 0)
            .second_at(4, 4)
            .ply_count(2)
            .build()
    }

    /// Root -> first child -> its first child.
    fn chain() -> (SearchTree<Isolation>, [NodeId; 3]) {
        let mut tree = SearchTree::new(corner_state());
        let root = tree.root();

        let a = tree.root_node().state.actions()[0];
        let a_state = tree.root_node().state.result(&a);
        let child = tree.add_child(root, a, a_state);

        let b = tree.get(child).state.actions()[0];
        let b_state = tree.get(child).state.result(&b);
        let grandchild = tree.add_child(child, b, b_state);

        (tree, [root, child, grandchild])
    }

    #[test]
    fn test_tree_new() {
        let tree = SearchTree::new(corner_state());

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId::new(0));
        assert_eq!(tree.root_node().visits, 1);
    }

    #[test]
    fn test_add_child_links_both_ways() {
        let (tree, [root, child, grandchild]) = chain();

        assert_eq!(tree.get(root).children.as_slice(), &[child]);
        assert_eq!(tree.get(child).parent, Some(root));
        assert_eq!(tree.get(grandchild).parent, Some(child));
        assert_eq!(tree.get(grandchild).depth, 2);
        assert_eq!(tree.get(root).actions.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already expanded")]
    fn test_duplicate_action_panics() {
        let mut tree = SearchTree::new(corner_state());
        let root = tree.root();
        let a = tree.root_node().state.actions()[0];
        let a_state = tree.root_node().state.result(&a);

        tree.add_child(root, a, a_state.clone());
        tree.add_child(root, a, a_state);
    }

    #[test]
    fn test_backpropagate_alternates_sign() {
        let (mut tree, [root, child, grandchild]) = chain();

        tree.backpropagate(grandchild, 1.0);

        assert_eq!(tree.get(grandchild).value, 1.0);
        assert_eq!(tree.get(child).value, -1.0);
        assert_eq!(tree.get(root).value, 1.0);
        for id in [root, child, grandchild] {
            assert_eq!(tree.get(id).visits, 2);
        }
    }

    #[test]
    fn test_backpropagate_conserves_values() {
        let (mut tree, [root, child, grandchild]) = chain();
        let rewards = [1.0, -1.0, -1.0, 1.0, 1.0];

        for &reward in &rewards {
            tree.backpropagate(grandchild, reward);
        }

        let total: f64 = rewards.iter().sum();
        assert_eq!(tree.get(grandchild).value, total);
        assert_eq!(tree.get(child).value, -total);
        assert_eq!(tree.get(root).value, total);
        for id in [root, child, grandchild] {
            assert_eq!(tree.get(id).visits, 1 + rewards.len() as u32);
        }
    }

    #[test]
    fn test_backpropagate_from_child_leaves_siblings() {
        let (mut tree, [root, child, grandchild]) = chain();

        tree.backpropagate(child, -1.0);

        assert_eq!(tree.get(grandchild).visits, 1);
        assert_eq!(tree.get(grandchild).value, 0.0);
        assert_eq!(tree.get(child).value, -1.0);
        assert_eq!(tree.get(root).value, 1.0);
    }

    #[test]
    fn test_tree_stats() {
        let (tree, _) = chain();
        let stats = tree.stats();

        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.terminal_count, 0);
    }
}
