//! Safe-path search between Hinger grid states.
//!
//! Every strategy looks for a sequence of single-counter removals turning a
//! start state into a goal state while passing only through *safe* states
//! (states without a critical cell). Five interchangeable strategies are
//! provided:
//!
//! 1. **Breadth-first** ([`bfs`]): fewest moves, ignores move cost
//! 2. **Depth-first** ([`dfs`]): bounded by a step budget
//! 3. **Iterative deepening** ([`iddfs`]): depth-limited DFS with growing limits
//! 4. **A\*** ([`astar`]): cost-optimal, guided by an admissible heuristic
//! 5. **Uniform cost** ([`min_cost`]): cost-optimal, returns the move list
//!
//! # Usage
//!
//! ```rust
//! use hinger_core::GridState;
//! use pathfind::{astar, min_cost, moves_cost};
//!
//! let start = GridState::new(vec![vec![1, 1, 0], vec![0, 1, 0], vec![0, 0, 0]]).unwrap();
//! let goal = GridState::new(vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 0, 0]]).unwrap();
//!
//! let path = astar(&start, &goal).unwrap();
//! assert_eq!(path.start(), &start);
//! assert_eq!(path.goal(), &goal);
//!
//! let moves = min_cost(&start, &goal).unwrap();
//! assert_eq!(moves_cost(&start, &moves).unwrap(), path.cost());
//! ```
//!
//! Failure to connect the two states is reported as a [`NoPath`] value, never
//! a panic.

pub mod config;
pub mod error;
pub mod heuristic;
pub mod informed;
pub mod path;
pub mod strategy;
pub mod uninformed;

// Re-export main types
pub use config::PathSearchConfig;
pub use error::NoPath;
pub use heuristic::{admissible_estimate, singleton_distance};
pub use informed::{astar, min_cost};
pub use path::{is_safe, move_cost_between, moves_cost, Path};
pub use strategy::{compare, PathSummary, Strategy, StrategyReport};
pub use uninformed::{bfs, dfs, iddfs};
