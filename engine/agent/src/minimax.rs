//! Depth-limited minimax and alpha-beta search.
//!
//! Both searches expand successors in row-major order and replace the best
//! move only on a strictly better score, so ties keep the first move found.
//! Alpha-beta visits a subset of the minimax tree and always agrees with it on
//! the score.

use hinger_core::{GridState, Move};

use crate::evaluator::Evaluator;
use crate::terminal::is_terminal;

/// Result of a depth-limited search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Backed-up evaluation of the root
    pub score: i64,

    /// Move achieving `score`. `None` at a terminal root or at depth 0.
    pub best_move: Option<Move>,

    /// Number of states visited, root included
    pub nodes: u64,
}

// Static information shared by one search.
struct Context<'a, E: Evaluator + ?Sized> {
    evaluator: &'a E,
    nodes: u64,
}

/// Plain minimax to `depth` plies.
pub fn minimax<E: Evaluator + ?Sized>(
    state: &GridState,
    depth: u32,
    maximizing: bool,
    evaluator: &E,
) -> Decision {
    let mut ctx = Context {
        evaluator,
        nodes: 0,
    };
    let (score, best_move) = minimax_node(&mut ctx, state, depth, maximizing);
    Decision {
        score,
        best_move,
        nodes: ctx.nodes,
    }
}

fn minimax_node<E: Evaluator + ?Sized>(
    ctx: &mut Context<'_, E>,
    state: &GridState,
    depth: u32,
    maximizing: bool,
) -> (i64, Option<Move>) {
    ctx.nodes += 1;
    if depth == 0 || is_terminal(state) {
        return (ctx.evaluator.evaluate(state), None);
    }

    let mut best = if maximizing { i64::MIN } else { i64::MAX };
    let mut best_move = None;

    for successor in state.successors() {
        let (score, _) = minimax_node(ctx, &successor.state, depth - 1, !maximizing);
        let better = if maximizing { score > best } else { score < best };
        if better || best_move.is_none() {
            best = score;
            best_move = Some(successor.mv);
        }
    }

    (best, best_move)
}

/// Minimax with alpha-beta pruning to `depth` plies.
///
/// A maximizing node stops expanding once `alpha >= beta`; a minimizing node
/// once `beta <= alpha`.
pub fn alpha_beta<E: Evaluator + ?Sized>(
    state: &GridState,
    depth: u32,
    maximizing: bool,
    evaluator: &E,
) -> Decision {
    let mut ctx = Context {
        evaluator,
        nodes: 0,
    };
    let (score, best_move) =
        alpha_beta_node(&mut ctx, state, i64::MIN, i64::MAX, depth, maximizing);
    Decision {
        score,
        best_move,
        nodes: ctx.nodes,
    }
}

fn alpha_beta_node<E: Evaluator + ?Sized>(
    ctx: &mut Context<'_, E>,
    state: &GridState,
    mut alpha: i64,
    mut beta: i64,
    depth: u32,
    maximizing: bool,
) -> (i64, Option<Move>) {
    ctx.nodes += 1;
    if depth == 0 || is_terminal(state) {
        return (ctx.evaluator.evaluate(state), None);
    }

    let mut best_move = None;

    if maximizing {
        let mut best = i64::MIN;
        for successor in state.successors() {
            let (score, _) = alpha_beta_node(ctx, &successor.state, alpha, beta, depth - 1, false);
            if score > best || best_move.is_none() {
                best = score;
                best_move = Some(successor.mv);
            }
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        (best, best_move)
    } else {
        let mut best = i64::MAX;
        for successor in state.successors() {
            let (score, _) = alpha_beta_node(ctx, &successor.state, alpha, beta, depth - 1, true);
            if score < best || best_move.is_none() {
                best = score;
                best_move = Some(successor.mv);
            }
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        (best, best_move)
    }
}
