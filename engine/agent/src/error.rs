//! Agent configuration errors.

use thiserror::Error;

/// Errors raised when an agent is asked for a strategy it does not have, or
/// for one bounded so tightly it could never pick a move.
///
/// A terminal position is not an error: move requests return `None` there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("unknown search mode '{0}' (expected minimax, alphabeta or mcts)")]
    UnknownMode(String),

    #[error("{field} must be at least 1")]
    InvalidBound { field: &'static str },
}
