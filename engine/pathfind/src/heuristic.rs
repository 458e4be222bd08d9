//! Remaining-cost estimates for A*.

use hinger_core::GridState;

use crate::path::can_reach;

/// Singleton pairing distance between two states.
///
/// Singleton cells of each state are sorted row-major and paired in order; the
/// result is the sum of Manhattan distances between pairs plus the difference
/// in singleton counts.
///
/// This alone can overestimate: `[[1, 0, 0, 1]]` to `[[0, 0, 0, 1]]` scores 4
/// while the single move needed costs 1. Use [`admissible_estimate`] to guide
/// A*.
pub fn singleton_distance(from: &GridState, to: &GridState) -> u64 {
    // singleton_cells() is already row-major
    let a = from.singleton_cells();
    let b = to.singleton_cells();

    let paired: u64 = a.iter().zip(&b).map(|(p, q)| p.manhattan(*q) as u64).sum();
    paired + a.len().abs_diff(b.len()) as u64
}

/// Lower bound on the cost of reaching `goal` from `state`.
///
/// Every move removes one counter and costs at least 1, so the counter deficit
/// bounds the remaining cost; the singleton distance is capped by it. Returns
/// `None` when `goal` cannot be reached at all.
pub fn admissible_estimate(state: &GridState, goal: &GridState) -> Option<u64> {
    if !can_reach(state, goal) {
        return None;
    }
    let remaining = state.total_counters() - goal.total_counters();
    Some(singleton_distance(state, goal).min(remaining))
}
