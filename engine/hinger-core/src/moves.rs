//! Moves and successor generation.

use std::fmt;

use crate::grid::GridState;

/// A move: the (row, column) of the cell losing one counter.
///
/// Ordering is row-major, matching the order in which moves are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells.
    #[inline]
    pub fn manhattan(self, other: Move) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One generated move: the resulting state, the move and what it cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor {
    pub state: GridState,
    pub mv: Move,
    /// Cost evaluated against the source state's neighbourhood
    pub cost: u32,
}

/// Lazy iterator over the successors of a state, in row-major order.
///
/// Created by [`GridState::successors`]. Each item owns a fresh copy of the
/// grid; the source state is only read.
#[derive(Debug, Clone)]
pub struct Successors<'a> {
    source: &'a GridState,
    next_idx: usize,
}

impl<'a> Successors<'a> {
    pub(crate) fn new(source: &'a GridState) -> Self {
        Self {
            source,
            next_idx: 0,
        }
    }
}

impl Iterator for Successors<'_> {
    type Item = Successor;

    fn next(&mut self) -> Option<Self::Item> {
        let cells = self.source.cells();
        while self.next_idx < cells.len() {
            let idx = self.next_idx;
            self.next_idx += 1;

            if cells[idx] > 0 {
                let mv = self.source.coord(idx);
                return Some(Successor {
                    state: self.source.decremented(idx),
                    mv,
                    cost: self.source.move_cost(mv),
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.source.cells().len() - self.next_idx))
    }
}
