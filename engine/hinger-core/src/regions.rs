//! Connectivity analysis: regions and critical ("hinger") cells.
//!
//! A region is a maximal set of active cells joined by 8-directional
//! adjacency. A critical cell holds exactly one counter and removing it
//! strictly increases the region count.

use std::collections::VecDeque;

use crate::grid::GridState;
use crate::moves::Move;

impl GridState {
    /// Number of regions of active cells under 8-connectivity.
    pub fn region_count(&self) -> usize {
        let cells = self.cells();
        let mut visited = vec![false; cells.len()];
        let mut queue = VecDeque::new();
        let mut regions = 0;

        for start in 0..cells.len() {
            if cells[start] == 0 || visited[start] {
                continue;
            }

            regions += 1;
            visited[start] = true;
            queue.push_back(start);

            while let Some(idx) = queue.pop_front() {
                let here = self.coord(idx);
                for (r, c) in self.neighbours(here.row, here.col) {
                    let n = self.index(r, c);
                    if cells[n] > 0 && !visited[n] {
                        visited[n] = true;
                        queue.push_back(n);
                    }
                }
            }
        }

        regions
    }

    /// Critical cells in row-major order.
    ///
    /// Each singleton cell is emptied hypothetically and the regions recounted
    /// from scratch.
    pub fn critical_cells(&self) -> Vec<Move> {
        let singletons = self.singleton_cells();
        if singletons.is_empty() {
            return Vec::new();
        }

        let base = self.region_count();
        singletons
            .into_iter()
            .filter(|&mv| self.zeroed(self.index(mv.row, mv.col)).region_count() > base)
            .collect()
    }

    /// Number of critical cells.
    pub fn critical_cell_count(&self) -> usize {
        self.critical_cells().len()
    }

    /// True if the cell at `mv` is critical.
    pub fn is_critical(&self, mv: Move) -> bool {
        if self.count_at(mv) != 1 {
            return false;
        }
        let base = self.region_count();
        self.zeroed(self.index(mv.row, mv.col)).region_count() > base
    }
}
