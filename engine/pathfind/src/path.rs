//! Paths, safety and the checks shared by every strategy.

use hinger_core::{GridState, Move, MoveError};

use crate::error::NoPath;

/// A state is safe when it holds no critical cell.
pub fn is_safe(state: &GridState) -> bool {
    state.critical_cell_count() == 0
}

/// Cell where `from` holds exactly one more counter than `to`, with every
/// other cell equal.
fn decremented_cell(from: &GridState, to: &GridState) -> Option<Move> {
    if from.rows() != to.rows() || from.cols() != to.cols() {
        return None;
    }

    let mut moved = None;
    for (r, (a, b)) in from.row_slices().zip(to.row_slices()).enumerate() {
        for (c, (&x, &y)) in a.iter().zip(b).enumerate() {
            if x == y {
                continue;
            }
            if x != y + 1 || moved.is_some() {
                return None;
            }
            moved = Some(Move::new(r, c));
        }
    }
    moved
}

/// Cost of the single decrement turning `from` into `to`.
///
/// Returns 0 when the two states do not differ by exactly one decrement.
pub fn move_cost_between(from: &GridState, to: &GridState) -> u32 {
    decremented_cell(from, to).map_or(0, |mv| from.move_cost(mv))
}

/// Cost of replaying `moves` from `start`.
pub fn moves_cost(start: &GridState, moves: &[Move]) -> Result<u64, MoveError> {
    let mut state = start.clone();
    let mut total = 0u64;
    for &mv in moves {
        total += state.move_cost(mv) as u64;
        state = state.apply(mv)?;
    }
    Ok(total)
}

/// True if every cell of `state` holds at least as many counters as the
/// same cell of `goal`. Counters are only ever removed, so anything else is a
/// dead end.
pub(crate) fn can_reach(state: &GridState, goal: &GridState) -> bool {
    state.rows() == goal.rows()
        && state.cols() == goal.cols()
        && state
            .row_slices()
            .zip(goal.row_slices())
            .all(|(a, b)| a.iter().zip(b).all(|(x, y)| x >= y))
}

/// Outcome of the endpoint checks run before any search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoints {
    /// Start equals goal
    Same,
    /// A real search is needed
    Distinct,
}

/// Endpoint checks common to all strategies, in order: start safety, goal
/// safety, equality, reachability.
pub(crate) fn check_endpoints(start: &GridState, goal: &GridState) -> Result<Endpoints, NoPath> {
    if !is_safe(start) {
        return Err(NoPath::UnsafeStart);
    }
    if !is_safe(goal) {
        return Err(NoPath::UnsafeGoal);
    }
    if start == goal {
        return Ok(Endpoints::Same);
    }
    if !can_reach(start, goal) {
        return Err(NoPath::Unreachable);
    }
    Ok(Endpoints::Distinct)
}

/// Ordered sequence of states from a start to a goal.
///
/// Never empty: the shortest path is the single state where start equals
/// goal. Consecutive states differ by one single-cell decrement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    states: Vec<GridState>,
}

impl Path {
    pub(crate) fn new(states: Vec<GridState>) -> Self {
        debug_assert!(!states.is_empty());
        Self { states }
    }

    pub(crate) fn single(state: &GridState) -> Self {
        Self {
            states: vec![state.clone()],
        }
    }

    pub fn states(&self) -> &[GridState] {
        &self.states
    }

    pub fn into_states(self) -> Vec<GridState> {
        self.states
    }

    /// Number of states, including start and goal.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Never true: a path holds at least one state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of moves (one less than the state count).
    pub fn move_count(&self) -> usize {
        self.states.len() - 1
    }

    pub fn start(&self) -> &GridState {
        &self.states[0]
    }

    pub fn goal(&self) -> &GridState {
        &self.states[self.states.len() - 1]
    }

    /// Sum of move costs between consecutive states.
    pub fn cost(&self) -> u64 {
        self.states
            .windows(2)
            .map(|pair| move_cost_between(&pair[0], &pair[1]) as u64)
            .sum()
    }

    /// Cells decremented along the path, in order.
    pub fn moves(&self) -> Vec<Move> {
        self.states
            .windows(2)
            .filter_map(|pair| decremented_cell(&pair[0], &pair[1]))
            .collect()
    }
}
