//! Path-search failure reasons.

use thiserror::Error;

/// No path connects the start to the goal.
///
/// Returned as an ordinary value by every strategy; the variant records why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoPath {
    #[error("start state contains a critical cell")]
    UnsafeStart,

    #[error("goal state contains a critical cell")]
    UnsafeGoal,

    #[error("goal is not reachable by removing counters from the start")]
    Unreachable,

    #[error("step limit of {limit} expansions exhausted")]
    StepLimit { limit: usize },

    #[error("no path within depth {max_depth}")]
    DepthLimit { max_depth: usize },

    #[error("search space exhausted")]
    Exhausted,
}
