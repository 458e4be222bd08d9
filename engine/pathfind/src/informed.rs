//! Cost-aware strategies: A* and uniform-cost search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use hinger_core::{GridState, Move};
use tracing::debug;

use crate::error::NoPath;
use crate::heuristic::admissible_estimate;
use crate::path::{check_endpoints, is_safe, Endpoints, Path};

/// Priority-queue entry, popped smallest `key` first, then oldest.
#[derive(Debug)]
struct Queued<T> {
    key: (u64, u64),
    seq: u64,
    item: T,
}

impl<T> PartialEq for Queued<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T> Eq for Queued<T> {}

impl<T> Ord for Queued<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Queued<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search ordered by `g + h`, ties broken by lower `g`.
///
/// `h` is [`admissible_estimate`]; states that cannot reach the goal are never
/// queued. A cheaper route to a known state replaces its recorded cost and
/// requeues it, and outdated heap entries are skipped when popped.
pub fn astar(start: &GridState, goal: &GridState) -> Result<Path, NoPath> {
    if check_endpoints(start, goal)? == Endpoints::Same {
        return Ok(Path::single(start));
    }

    let h0 = admissible_estimate(start, goal).ok_or(NoPath::Unreachable)?;
    let mut seq = 0u64;
    let mut open = BinaryHeap::new();
    open.push(Queued {
        key: (h0, 0),
        seq,
        item: start.clone(),
    });

    let mut best_g: HashMap<GridState, u64> = HashMap::from([(start.clone(), 0)]);
    let mut came_from: HashMap<GridState, GridState> = HashMap::new();
    let mut expanded = 0usize;

    while let Some(Queued {
        key: (_, g),
        item: current,
        ..
    }) = open.pop()
    {
        if best_g.get(&current).is_some_and(|&best| g > best) {
            continue;
        }
        if current == *goal {
            let path = reconstruct(&came_from, current);
            debug!(strategy = "astar", expanded, cost = g, "Path found");
            return Ok(path);
        }

        expanded += 1;
        for successor in current.successors() {
            if !is_safe(&successor.state) {
                continue;
            }
            let Some(h) = admissible_estimate(&successor.state, goal) else {
                continue;
            };

            let tentative = g + successor.cost as u64;
            if best_g
                .get(&successor.state)
                .is_some_and(|&known| tentative >= known)
            {
                continue;
            }

            best_g.insert(successor.state.clone(), tentative);
            came_from.insert(successor.state.clone(), current.clone());
            seq += 1;
            open.push(Queued {
                key: (tentative + h, tentative),
                seq,
                item: successor.state,
            });
        }
    }

    debug!(strategy = "astar", expanded, "Open set exhausted");
    Err(NoPath::Exhausted)
}

/// Walk predecessor links back from `end` to the start.
fn reconstruct(came_from: &HashMap<GridState, GridState>, end: GridState) -> Path {
    let mut states = vec![end];
    while let Some(prev) = states.last().and_then(|s| came_from.get(s)) {
        states.push(prev.clone());
    }
    states.reverse();
    Path::new(states)
}

/// Uniform-cost search returning the moves of a cheapest safe path.
///
/// A state is settled the first time it is popped; later entries for it are
/// stale and skipped. Start equal to goal yields an empty move list.
pub fn min_cost(start: &GridState, goal: &GridState) -> Result<Vec<Move>, NoPath> {
    cheapest_moves(start, goal).map(|(moves, _)| moves)
}

/// Moves of a cheapest safe path together with their total cost.
pub(crate) fn cheapest_moves(
    start: &GridState,
    goal: &GridState,
) -> Result<(Vec<Move>, u64), NoPath> {
    if check_endpoints(start, goal)? == Endpoints::Same {
        return Ok((Vec::new(), 0));
    }

    let mut seq = 0u64;
    let mut open = BinaryHeap::new();
    open.push(Queued {
        key: (0, 0),
        seq,
        item: (start.clone(), Vec::new()),
    });
    let mut settled = HashSet::new();

    while let Some(Queued {
        key: (cost, _),
        item: (current, moves),
        ..
    }) = open.pop()
    {
        if !settled.insert(current.clone()) {
            continue;
        }
        if current == *goal {
            debug!(strategy = "min_cost", settled = settled.len(), cost, "Path found");
            return Ok((moves, cost));
        }

        for successor in current.successors() {
            if settled.contains(&successor.state) || !is_safe(&successor.state) {
                continue;
            }
            let mut next = moves.clone();
            next.push(successor.mv);
            seq += 1;
            open.push(Queued {
                key: (cost + successor.cost as u64, 0),
                seq,
                item: (successor.state, next),
            });
        }
    }

    debug!(strategy = "min_cost", settled = settled.len(), "Open set exhausted");
    Err(NoPath::Exhausted)
}
