//! MCTS tree node representation.
//!
//! Each node owns the state reached by one move from its parent, the moves
//! not yet expanded from that state, and the visit/win statistics used for
//! UCT selection.

use hinger_core::{GridState, Move};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Move that led here from the parent (None for root)
    pub mv: Option<Move>,

    /// Game state at this node
    pub state: GridState,

    /// Moves not yet expanded, row-major
    pub untried: Vec<Move>,

    /// Children in creation order
    pub children: Vec<NodeId>,

    /// Number of times this node has been visited
    pub visits: u32,

    /// Number of simulations through this node that ended in a win
    pub wins: u32,
}

impl MctsNode {
    /// Create a new root node.
    pub fn new_root(state: GridState) -> Self {
        Self::new_child(NodeId::NONE, None, state)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, mv: Option<Move>, state: GridState) -> Self {
        let untried = state.active_cells();
        Self {
            parent,
            mv,
            state,
            untried,
            children: Vec::new(),
            visits: 0,
            wins: 0,
        }
    }

    /// Fraction of visits that ended in a win. 0.0 if never visited.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins as f64 / self.visits as f64
        }
    }

    /// UCT score for selecting this node from a parent visited
    /// `parent_visits` times:
    /// `wins / visits + sqrt(exploration * ln(parent_visits) / visits)`.
    ///
    /// Unvisited nodes score infinity.
    #[inline]
    pub fn uct_score(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let visits = self.visits as f64;
        let explore = (exploration * (parent_visits as f64).ln() / visits).sqrt();
        self.win_rate() + explore
    }

    /// True once every move from this state has a child.
    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Check if this is a leaf node (no children yet).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GridState {
        GridState::new(vec![vec![1, 0, 2], vec![0, 1, 0]]).unwrap()
    }

    #[test]
    fn test_node_id_none() {
        assert!(NodeId::NONE.is_none());
        assert!(!NodeId::NONE.is_some());
        assert!(!NodeId(0).is_none());
        assert!(NodeId(0).is_some());
    }

    #[test]
    fn test_new_root() {
        let node = MctsNode::new_root(state());

        assert!(node.parent.is_none());
        assert_eq!(node.mv, None);
        assert_eq!(node.visits, 0);
        assert!(node.children.is_empty());
        assert_eq!(
            node.untried,
            vec![Move::new(0, 0), Move::new(0, 2), Move::new(1, 1)]
        );
        assert!(!node.is_fully_expanded());
    }

    #[test]
    fn test_terminal_state_has_nothing_to_try() {
        let node = MctsNode::new_root(GridState::empty(2, 2));
        assert!(node.is_fully_expanded());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_win_rate() {
        let mut node = MctsNode::new_root(state());
        assert!(node.win_rate().abs() < 1e-9);

        node.visits = 4;
        node.wins = 1;
        assert!((node.win_rate() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_uct_score() {
        let mut node = MctsNode::new_root(state());
        assert!(node.uct_score(10, 2.0).is_infinite());

        node.visits = 10;
        node.wins = 5;
        // 0.5 + sqrt(2 * ln(100) / 10) = 0.5 + 0.9597...
        let uct = node.uct_score(100, 2.0);
        assert!((uct - 1.4597).abs() < 0.001);
    }
}
