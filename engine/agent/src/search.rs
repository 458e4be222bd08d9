//! MCTS search implementation.
//!
//! Each iteration runs the four UCT phases:
//! 1. Selection: descend through fully expanded nodes by UCT score
//! 2. Expansion: add a child for one untried move, chosen uniformly at random
//! 3. Simulation: play the new child out with a [`Rollout`] policy
//! 4. Backpropagation: add the visit and outcome to every node up to the root

use hinger_core::{GridState, Move};
use rand::Rng;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::rollout::Rollout;
use crate::terminal::is_terminal;
use crate::tree::MctsTree;

/// Result of an MCTS search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Move of the most-visited root child
    pub best_move: Move,

    /// Visits of that child
    pub visits: u32,

    /// Wins recorded through that child
    pub wins: u32,

    /// Iterations performed
    pub iterations: u32,

    /// Nodes in the tree when the search ended
    pub tree_size: usize,
}

/// MCTS search state.
pub struct MctsSearch<'a, P: Rollout> {
    tree: MctsTree,
    rollout: &'a P,
    config: MctsConfig,
}

impl<'a, P: Rollout> MctsSearch<'a, P> {
    /// Create a new MCTS search rooted at `state`.
    pub fn new(state: GridState, rollout: &'a P, config: MctsConfig) -> Self {
        Self {
            tree: MctsTree::new(state),
            rollout,
            config,
        }
    }

    /// Run the configured number of iterations.
    ///
    /// Returns `None` without growing the tree if the root is terminal, and
    /// `None` if no child was ever expanded.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Option<SearchResult> {
        if is_terminal(&self.tree.get(self.tree.root()).state) {
            debug!("MCTS root is terminal, no move available");
            return None;
        }

        for iteration in 0..self.config.iterations {
            self.iterate(iteration, rng);
        }

        let (best_move, visits, wins) = self.tree.best_move()?;
        let stats = self.tree.stats();
        debug!(
            best_move = %best_move,
            visits,
            wins,
            total_nodes = stats.total_nodes,
            max_depth = stats.max_depth,
            "MCTS search complete"
        );

        Some(SearchResult {
            best_move,
            visits,
            wins,
            iterations: self.config.iterations,
            tree_size: stats.total_nodes,
        })
    }

    /// Run a single iteration (select -> expand -> simulate -> backpropagate).
    fn iterate<R: Rng>(&mut self, iteration: u32, rng: &mut R) {
        let leaf_id = self.select();
        let node_id = self.expand(leaf_id, rng);

        let outcome = self.rollout.simulate(&self.tree.get(node_id).state, rng);
        self.tree.backpropagate(node_id, outcome);

        trace!(iteration, node = node_id.0, outcome, "MCTS iteration complete");
    }

    /// Descend while the current node is fully expanded and has children.
    fn select(&self) -> NodeId {
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);
            if !node.is_fully_expanded() || node.is_leaf() {
                return current;
            }
            match self.tree.select_child(current, self.config.exploration) {
                Some(child_id) => current = child_id,
                None => return current,
            }
        }
    }

    /// Expand one random untried move of `node_id`.
    /// Returns the new child, or `node_id` itself if nothing is left to try.
    fn expand<R: Rng>(&mut self, node_id: NodeId, rng: &mut R) -> NodeId {
        let node = self.tree.get_mut(node_id);
        if node.untried.is_empty() {
            return node_id;
        }

        let idx = rng.gen_range(0..node.untried.len());
        let mv = node.untried.remove(idx);
        // Untried moves are active cells of this very state
        let Ok(state) = node.state.apply(mv) else {
            return node_id;
        };
        self.tree.add_child(node_id, mv, state)
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }
}

/// Convenience function to run a single MCTS search.
pub fn run_mcts<P: Rollout, R: Rng>(
    state: &GridState,
    rollout: &P,
    config: MctsConfig,
    rng: &mut R,
) -> Option<SearchResult> {
    MctsSearch::new(state.clone(), rollout, config).run(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rollout::RandomRollout;
    use crate::terminal::is_win;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// Scores a win when the expanded state holds a critical cell.
    struct HingerAtStart;

    impl Rollout for HingerAtStart {
        fn simulate<R: Rng>(&self, state: &GridState, _rng: &mut R) -> u32 {
            u32::from(is_win(state))
        }
    }

    fn grid() -> GridState {
        GridState::new(vec![vec![2, 1, 0], vec![0, 1, 0], vec![1, 0, 2]]).unwrap()
    }

    #[test]
    fn test_mcts_terminal_root() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut search = MctsSearch::new(GridState::empty(3, 3), &RandomRollout, MctsConfig::for_testing());

        assert_eq!(search.run(&mut rng), None);
        assert_eq!(search.tree().len(), 1);
        assert_eq!(search.tree().get(search.tree().root()).visits, 0);
    }

    #[test]
    fn test_mcts_basic_search() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let state = grid();
        let config = MctsConfig::for_testing();

        let result = run_mcts(&state, &RandomRollout, config, &mut rng).unwrap();

        assert!(state.active_cells().contains(&result.best_move));
        assert_eq!(result.iterations, 50);
        assert_eq!(result.tree_size, 51);
        assert!(result.visits > 0);
    }

    #[test]
    fn test_every_root_move_gets_expanded() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let state = grid();
        let mut search = MctsSearch::new(state.clone(), &RandomRollout, MctsConfig::for_testing());
        search.run(&mut rng).unwrap();

        let tree = search.tree();
        let root = tree.get(tree.root());
        assert!(root.untried.is_empty());

        let mut moves: Vec<_> = root.children.iter().filter_map(|&id| tree.get(id).mv).collect();
        moves.sort();
        assert_eq!(moves, state.active_cells());
        assert_eq!(root.visits, 50);
    }

    #[test]
    fn test_mcts_is_reproducible() {
        let state = grid();
        let run = |seed| {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            run_mcts(&state, &RandomRollout, MctsConfig::for_testing(), &mut rng)
        };

        assert_eq!(run(7), run(7));
    }

    #[test]
    fn test_zero_iterations_has_no_move() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let config = MctsConfig::for_testing().with_iterations(0);
        assert_eq!(run_mcts(&grid(), &RandomRollout, config, &mut rng), None);
    }

    #[test]
    fn test_mcts_follows_winning_rollouts() {
        // Removing an end leaves a three-cell line with a critical middle;
        // removing an inner cell leaves no hinger anywhere below
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let state = GridState::new(vec![vec![1, 1, 1, 1]]).unwrap();
        let config = MctsConfig::for_testing().with_iterations(200);

        let mut search = MctsSearch::new(state, &HingerAtStart, config);
        let result = search.run(&mut rng).unwrap();

        assert!(result.best_move == Move::new(0, 0) || result.best_move == Move::new(0, 3));
        assert!(result.wins > 0);
    }

    #[test]
    fn test_random_rollout_steers_visits() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let state = GridState::new(vec![vec![1, 1, 1, 1]]).unwrap();
        let config = MctsConfig::for_testing().with_iterations(200);

        let mut search = MctsSearch::new(state, &RandomRollout, config);
        let result = search.run(&mut rng).unwrap();

        let ends = [Move::new(0, 0), Move::new(0, 3)];
        assert!(ends.contains(&result.best_move));
        assert_eq!(result.wins, 1);

        // Whatever was expanded first, end moves out-visit inner moves
        let tree = search.tree();
        let root = tree.get(tree.root());
        let (winning, losing): (Vec<_>, Vec<_>) = root
            .children
            .iter()
            .map(|&id| tree.get(id))
            .partition(|child| child.mv.is_some_and(|mv| ends.contains(&mv)));
        let fewest_winning = winning.iter().map(|c| c.visits).min().unwrap();
        let most_losing = losing.iter().map(|c| c.visits).max().unwrap();
        assert!(fewest_winning > most_losing);
        assert!(losing.iter().all(|c| c.wins == 0));
    }
}
