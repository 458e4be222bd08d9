//! Strategy selection and side-by-side comparison.

use std::fmt;

use hinger_core::GridState;
use tracing::info;

use crate::config::PathSearchConfig;
use crate::error::NoPath;
use crate::informed::{astar, cheapest_moves};
use crate::uninformed::{bfs, dfs, iddfs};

/// The five path-search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Dfs,
    Iddfs,
    AStar,
    MinCost,
}

impl Strategy {
    /// Every strategy, in reporting order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Iddfs,
        Strategy::AStar,
        Strategy::MinCost,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Iddfs => "IDDFS",
            Strategy::AStar => "A*",
            Strategy::MinCost => "min_safe",
        }
    }

    /// Run this strategy and summarise the result.
    pub fn run(
        &self,
        start: &GridState,
        goal: &GridState,
        config: &PathSearchConfig,
    ) -> Result<PathSummary, NoPath> {
        let path = match self {
            Strategy::Bfs => bfs(start, goal)?,
            Strategy::Dfs => dfs(start, goal, config.dfs_step_limit)?,
            Strategy::Iddfs => iddfs(start, goal, config.iddfs_max_depth)?,
            Strategy::AStar => astar(start, goal)?,
            Strategy::MinCost => {
                let (moves, cost) = cheapest_moves(start, goal)?;
                return Ok(PathSummary {
                    moves: moves.len(),
                    cost,
                });
            }
        };

        Ok(PathSummary {
            moves: path.move_count(),
            cost: path.cost(),
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Length and cost of a found path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSummary {
    /// Number of moves
    pub moves: usize,
    pub cost: u64,
}

/// Outcome of one strategy in a comparison run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub outcome: Result<PathSummary, NoPath>,
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(summary) => write!(
                f,
                "{:<8} | Success | Moves: {} | Total cost: {}",
                self.strategy.name(),
                summary.moves,
                summary.cost
            ),
            Err(reason) => write!(f, "{:<8} | Failed  | {}", self.strategy.name(), reason),
        }
    }
}

/// Run every strategy on the same endpoints, in [`Strategy::ALL`] order.
pub fn compare(
    start: &GridState,
    goal: &GridState,
    config: &PathSearchConfig,
) -> Vec<StrategyReport> {
    Strategy::ALL
        .iter()
        .map(|&strategy| {
            let report = StrategyReport {
                strategy,
                outcome: strategy.run(start, goal, config),
            };
            info!("{report}");
            report
        })
        .collect()
}
