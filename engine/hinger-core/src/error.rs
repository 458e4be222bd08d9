//! Error types for grid construction and move application.

use thiserror::Error;

/// Errors raised when a grid is not rectangular.
///
/// Construction either succeeds with a complete grid or fails with one of
/// these; rows are never truncated or padded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("grid has no rows")]
    NoRows,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised when a single move cannot be applied to a state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cell ({row}, {col}) holds no counters")]
    EmptyCell { row: usize, col: usize },
}
