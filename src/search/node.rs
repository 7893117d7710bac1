//! Search nodes and the arena that owns them.
//!
//! Parent links are arena indices rather than references, so the parent tree
//! can never form a cycle and a path is rebuilt by following indices back to
//! the root.

use crate::core::Word;

/// Index of a node inside a [`NodeStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in expansion order (root = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A discovered search state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// The word this node stands for.
    pub state: Word,
    /// The expanded node this one was reached from (`None` for the root).
    pub parent: Option<NodeId>,
    /// Number of edges from the start word.
    pub g_cost: u32,
    /// Heuristic estimate to the goal (0 when the strategy ignores it).
    pub h_cost: u32,
}

impl SearchNode {
    /// Root node for a search.
    #[must_use]
    pub const fn root(state: Word, h_cost: u32) -> Self {
        Self {
            state,
            parent: None,
            g_cost: 0,
            h_cost,
        }
    }

    /// `f_cost = g_cost + h_cost`, the A* ordering key.
    #[must_use]
    pub const fn f_cost(&self) -> u32 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// Arena of every node popped and accepted during one search, in pop order.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    nodes: Vec<SearchNode>,
}

impl NodeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a node and return its index.
    ///
    /// The node's parent, if any, must already be stored.
    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        debug_assert!(
            node.parent.is_none_or(|p| p.0 < self.nodes.len()),
            "parent must be stored before its child"
        );
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in the order they were stored.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter()
    }

    /// Words from the root to `id`, inclusive.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<Word> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(node) = self.nodes.get(current.0) else {
                break;
            };
            path.push(node.state.clone());
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}
