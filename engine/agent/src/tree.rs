//! MCTS tree structure with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by NodeId indices;
//! parents are indices too, so dropping the tree drops every node at once.

use hinger_core::{GridState, Move};

use crate::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree {
    /// Arena storing all nodes
    nodes: Vec<MctsNode>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl MctsTree {
    /// Create a new tree rooted at `root_state`.
    pub fn new(root_state: GridState) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: MctsNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a child for `mv` under `parent_id`. Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, mv: Move, state: GridState) -> NodeId {
        let child_id = self.allocate(MctsNode::new_child(parent_id, Some(mv), state));
        self.get_mut(parent_id).children.push(child_id);
        child_id
    }

    /// Select the child with the highest UCT score.
    ///
    /// Ties keep the earliest-created child.
    pub fn select_child(&self, node_id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        first_max(node.children.iter().map(|&id| {
            (id, self.get(id).uct_score(node.visits, exploration))
        }))
    }

    /// Walk from `leaf_id` to the root, adding one visit and `outcome` wins to
    /// every node on the way.
    pub fn backpropagate(&mut self, leaf_id: NodeId, outcome: u32) {
        let mut current_id = leaf_id;
        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.visits += 1;
            node.wins += outcome;
            current_id = node.parent;
        }
    }

    /// Most-visited child of the root as (move, visits, wins).
    ///
    /// Ties keep the earliest-created child. Returns None if the root was
    /// never expanded.
    pub fn best_move(&self) -> Option<(Move, u32, u32)> {
        let root = self.get(self.root);
        let best = first_max(
            root.children
                .iter()
                .map(|&id| (id, self.get(id).visits as f64)),
        )?;

        let child = self.get(best);
        child.mv.map(|mv| (mv, child.visits, child.wins))
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            root_win_rate: root.win_rate(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        node.children
            .iter()
            .map(|&id| self.compute_max_depth(id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// First item with the largest score. `Iterator::max_by` would return the last.
fn first_max(items: impl Iterator<Item = (NodeId, f64)>) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for (id, score) in items {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((id, score)),
        }
    }
    best.map(|(id, _)| id)
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_win_rate: f64,
    pub max_depth: u32,
}
