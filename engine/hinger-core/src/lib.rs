//! Core state model for the Hinger counter game
//!
//! A Hinger position is a rectangular grid of counters. A move removes one
//! counter from an active cell; the cost of a move grows with how many active
//! cells surround it. This crate provides:
//! - `GridState`: immutable value type holding the counters
//! - `Move`: a (row, column) coordinate naming the decremented cell
//! - `Successors`: lazy, row-major move generation
//! - Region and critical ("hinger") cell analysis over 8-connectivity
//!
//! # Usage
//!
//! ```rust
//! use hinger_core::{GridState, Move};
//!
//! let state = GridState::new(vec![
//!     vec![1, 1, 0],
//!     vec![0, 1, 0],
//!     vec![0, 0, 1],
//! ]).unwrap();
//!
//! assert_eq!(state.region_count(), 1);
//! assert_eq!(state.move_cost(Move::new(1, 1)), 4);
//!
//! for successor in state.successors() {
//!     println!("{} costs {}", successor.mv, successor.cost);
//! }
//! ```

pub mod error;
pub mod grid;
pub mod moves;
pub mod regions;

// Re-export main types for convenience
pub use error::{MoveError, ShapeError};
pub use grid::GridState;
pub use moves::{Move, Successor, Successors};

#[cfg(test)]
mod tests;
