//! Adversarial move selection for Hinger.
//!
//! Three searches pick a move for the side to act:
//!
//! 1. **Minimax** ([`minimax`]): full tree to a fixed depth, scored by an
//!    [`Evaluator`]
//! 2. **Alpha-beta** ([`alpha_beta`]): the same tree with fail-high/fail-low
//!    cutoffs; always agrees with minimax on the score
//! 3. **Monte Carlo tree search** ([`MctsSearch`]): UCT selection, random
//!    expansion, [`Rollout`] simulation and backpropagation over a fixed
//!    number of iterations
//!
//! # Usage
//!
//! ```rust
//! use agent::{Agent, MctsConfig, SearchMode};
//! use hinger_core::GridState;
//!
//! let state = GridState::new(vec![vec![2, 1, 0], vec![0, 1, 0], vec![1, 0, 2]]).unwrap();
//!
//! let mut agent = Agent::new("B1").with_seed(42);
//! let mv = agent.choose_move_with(&state, &SearchMode::AlphaBeta { depth: 3, maximizing: true });
//! assert!(mv.is_some());
//!
//! let mcts = SearchMode::Mcts(MctsConfig::default().with_iterations(100));
//! assert!(agent.choose_move_with(&state, &mcts).is_some());
//!
//! // No active cells: nothing to play
//! assert_eq!(agent.choose_move(&GridState::empty(3, 3)), None);
//! ```
//!
//! # Terminal positions
//!
//! A state is terminal when no active cells remain. Every search reports
//! `None` there; that is an ordinary outcome, not an error. A critical cell on
//! the board is logged as a win signal for the side to move but does not end
//! the game.

pub mod agent;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod minimax;
pub mod node;
pub mod rollout;
pub mod search;
pub mod terminal;
pub mod tree;

// Re-export main types
pub use agent::Agent;
pub use config::{MctsConfig, SearchMode};
pub use error::AgentError;
pub use evaluator::{Evaluator, HingerEvaluator};
pub use minimax::{alpha_beta, minimax, Decision};
pub use node::{MctsNode, NodeId};
pub use rollout::{RandomRollout, Rollout};
pub use search::{run_mcts, MctsSearch, SearchResult};
pub use terminal::{is_terminal, is_win};
pub use tree::{MctsTree, TreeStats};
