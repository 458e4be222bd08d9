//! Uninformed strategies: breadth-first, bounded depth-first and iterative
//! deepening.
//!
//! All three ignore move cost. Successors are generated in row-major order and
//! the goal is tested when a state is generated, so runs are reproducible.

use std::collections::{HashSet, VecDeque};

use hinger_core::GridState;
use tracing::debug;

use crate::error::NoPath;
use crate::path::{check_endpoints, is_safe, Endpoints, Path};

/// Breadth-first search. Returns a path with the fewest moves.
pub fn bfs(start: &GridState, goal: &GridState) -> Result<Path, NoPath> {
    if check_endpoints(start, goal)? == Endpoints::Same {
        return Ok(Path::single(start));
    }

    let mut frontier = VecDeque::from([(start.clone(), vec![start.clone()])]);
    let mut visited = HashSet::from([start.clone()]);
    let mut expanded = 0usize;

    while let Some((current, trail)) = frontier.pop_front() {
        expanded += 1;
        for successor in current.successors() {
            if visited.contains(&successor.state) || !is_safe(&successor.state) {
                continue;
            }
            visited.insert(successor.state.clone());

            let mut next = trail.clone();
            next.push(successor.state.clone());
            if successor.state == *goal {
                debug!(strategy = "bfs", expanded, states = next.len(), "Path found");
                return Ok(Path::new(next));
            }
            frontier.push_back((successor.state, next));
        }
    }

    debug!(strategy = "bfs", expanded, "Frontier exhausted");
    Err(NoPath::Exhausted)
}

/// Depth-first search bounded by `step_limit` stack pops.
pub fn dfs(start: &GridState, goal: &GridState, step_limit: usize) -> Result<Path, NoPath> {
    if check_endpoints(start, goal)? == Endpoints::Same {
        return Ok(Path::single(start));
    }

    let mut stack = vec![(start.clone(), vec![start.clone()])];
    let mut visited = HashSet::from([start.clone()]);
    let mut steps = 0usize;

    while let Some((current, trail)) = stack.pop() {
        steps += 1;
        if steps > step_limit {
            debug!(strategy = "dfs", step_limit, "Step limit reached");
            return Err(NoPath::StepLimit { limit: step_limit });
        }

        for successor in current.successors() {
            if visited.contains(&successor.state) || !is_safe(&successor.state) {
                continue;
            }
            visited.insert(successor.state.clone());

            let mut next = trail.clone();
            next.push(successor.state.clone());
            if successor.state == *goal {
                debug!(strategy = "dfs", steps, states = next.len(), "Path found");
                return Ok(Path::new(next));
            }
            stack.push((successor.state, next));
        }
    }

    debug!(strategy = "dfs", steps, "Stack exhausted");
    Err(NoPath::Exhausted)
}

/// Iterative-deepening depth-first search over limits `1..=max_depth`.
///
/// Each limit starts a fresh visited set holding only the start. Within one
/// iteration a state is added before recursing into it and removed after, so
/// it can be reached again along a different branch.
pub fn iddfs(start: &GridState, goal: &GridState, max_depth: usize) -> Result<Path, NoPath> {
    if check_endpoints(start, goal)? == Endpoints::Same {
        return Ok(Path::single(start));
    }

    for depth in 1..=max_depth {
        let mut visited = HashSet::from([start.clone()]);
        if let Some(mut reversed) = depth_limited(start, goal, depth, &mut visited) {
            reversed.reverse();
            debug!(strategy = "iddfs", depth, states = reversed.len(), "Path found");
            return Ok(Path::new(reversed));
        }
    }

    debug!(strategy = "iddfs", max_depth, "Depth limit reached");
    Err(NoPath::DepthLimit { max_depth })
}

/// Depth-limited recursion. On success returns the path goal-first.
fn depth_limited(
    current: &GridState,
    goal: &GridState,
    depth: usize,
    visited: &mut HashSet<GridState>,
) -> Option<Vec<GridState>> {
    if current == goal {
        return Some(vec![current.clone()]);
    }
    if depth == 0 {
        return None;
    }

    for successor in current.successors() {
        if visited.contains(&successor.state) || !is_safe(&successor.state) {
            continue;
        }

        visited.insert(successor.state.clone());
        let found = depth_limited(&successor.state, goal, depth - 1, visited);
        visited.remove(&successor.state);

        if let Some(mut reversed) = found {
            reversed.push(current.clone());
            return Some(reversed);
        }
    }
    None
}
