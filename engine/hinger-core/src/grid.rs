//! Grid state representation.
//!
//! Counters are stored row-major in a flat `Vec<u32>`. Equality and hashing
//! cover the dimensions and every cell, so a `GridState` doubles as its own
//! canonical key in visited sets.

use std::fmt;

use crate::error::{MoveError, ShapeError};
use crate::moves::{Move, Successors};

/// Offsets of the eight neighbours of a cell (diagonals included).
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Hinger game state
///
/// A rectangular grid of counters. Dimensions are fixed at construction and a
/// state is never modified once built: every move produces a fresh, independent
/// copy (see [`GridState::apply`] and [`GridState::successors`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridState {
    rows: usize,
    cols: usize,
    /// Counter per cell, row-major
    cells: Vec<u32>,
}

impl GridState {
    /// Create a state from a grid of rows.
    ///
    /// Fails with [`ShapeError`] if the grid has no rows or if any row differs
    /// in length from the first.
    pub fn new(grid: Vec<Vec<u32>>) -> Result<Self, ShapeError> {
        Self::from_rows(&grid)
    }

    /// Create a state by copying borrowed rows.
    pub fn from_rows(grid: &[Vec<u32>]) -> Result<Self, ShapeError> {
        let cols = grid.first().ok_or(ShapeError::NoRows)?.len();
        let mut cells = Vec::with_capacity(grid.len() * cols);

        for (row, values) in grid.iter().enumerate() {
            if values.len() != cols {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            rows: grid.len(),
            cols,
            cells,
        })
    }

    /// All-zero grid of the given size.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Counter at (row, col), or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Counter at a move's cell; 0 outside the grid.
    #[inline]
    pub fn count_at(&self, mv: Move) -> u32 {
        self.get(mv.row, mv.col).unwrap_or(0)
    }

    /// Iterate the grid row by row.
    pub fn row_slices(&self) -> impl Iterator<Item = &[u32]> + '_ {
        // chunks() panics on zero; a zero-column grid still has `rows` empty rows
        (0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// Copy of the grid as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.row_slices().map(<[u32]>::to_vec).collect()
    }

    /// Total number of counters on the board.
    pub fn total_counters(&self) -> u64 {
        self.cells.iter().map(|&c| c as u64).sum()
    }

    #[inline]
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|c| c > 0)
    }

    /// True if any cell still holds a counter.
    pub fn has_active_cells(&self) -> bool {
        self.cells.iter().any(|&c| c > 0)
    }

    /// Coordinates of all active cells in row-major order.
    pub fn active_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(idx, _)| self.coord(idx))
            .collect()
    }

    /// Coordinates of cells holding exactly one counter, row-major.
    pub fn singleton_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count == 1)
            .map(|(idx, _)| self.coord(idx))
            .collect()
    }

    /// True iff every cell holds 0 or 1 counters.
    pub fn is_binary(&self) -> bool {
        self.cells.iter().all(|&c| c <= 1)
    }

    /// In-bounds neighbours of (row, col) under 8-directional adjacency.
    pub(crate) fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let (rows, cols) = (self.rows as isize, self.cols as isize);
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let (nr, nc) = (row as isize + dr, col as isize + dc);
            (nr >= 0 && nr < rows && nc >= 0 && nc < cols).then_some((nr as usize, nc as usize))
        })
    }

    /// Cost of a move at `mv`: 1 plus the number of active neighbours in the
    /// current grid.
    ///
    /// The cell's own counter does not matter; the cost reflects the
    /// neighbourhood before the move is made.
    pub fn move_cost(&self, mv: Move) -> u32 {
        1 + self
            .neighbours(mv.row, mv.col)
            .filter(|&(r, c)| self.cells[self.index(r, c)] > 0)
            .count() as u32
    }

    /// Apply a single move, returning the successor state.
    pub fn apply(&self, mv: Move) -> Result<GridState, MoveError> {
        match self.get(mv.row, mv.col) {
            None => Err(MoveError::OutOfBounds {
                row: mv.row,
                col: mv.col,
                rows: self.rows,
                cols: self.cols,
            }),
            Some(0) => Err(MoveError::EmptyCell {
                row: mv.row,
                col: mv.col,
            }),
            Some(_) => Ok(self.decremented(self.index(mv.row, mv.col))),
        }
    }

    /// Lazily generate every successor state, one per active cell, row-major.
    ///
    /// Each call starts a fresh sequence of independent copies.
    pub fn successors(&self) -> Successors<'_> {
        Successors::new(self)
    }

    /// Copy of this state with the counter at `idx` reduced by one.
    pub(crate) fn decremented(&self, idx: usize) -> GridState {
        let mut next = self.clone();
        next.cells[idx] -= 1;
        next
    }

    /// Copy of this state with the cell at `idx` emptied.
    pub(crate) fn zeroed(&self, idx: usize) -> GridState {
        let mut next = self.clone();
        next.cells[idx] = 0;
        next
    }

    #[inline]
    pub(crate) fn cells(&self) -> &[u32] {
        &self.cells
    }

    #[inline]
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Move {
        Move::new(idx / self.cols, idx % self.cols)
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.row_slices().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, count) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{count}")?;
            }
        }
        Ok(())
    }
}
