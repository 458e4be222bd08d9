//! Static position evaluation for depth-limited search.

use hinger_core::GridState;

/// Scores a state for the maximizing side. Higher is better.
pub trait Evaluator {
    fn evaluate(&self, state: &GridState) -> i64;
}

/// The standard Hinger heuristic.
///
/// Sum of move costs over every active cell, plus `region_weight` per region,
/// minus `critical_weight` per critical cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HingerEvaluator {
    pub region_weight: i64,
    pub critical_weight: i64,
}

impl Default for HingerEvaluator {
    fn default() -> Self {
        Self {
            region_weight: 2,
            critical_weight: 3,
        }
    }
}

impl HingerEvaluator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Evaluator for HingerEvaluator {
    fn evaluate(&self, state: &GridState) -> i64 {
        let activity: i64 = state
            .active_cells()
            .into_iter()
            .map(|mv| state.move_cost(mv) as i64)
            .sum();

        activity + self.region_weight * state.region_count() as i64
            - self.critical_weight * state.critical_cell_count() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_scores_zero() {
        let evaluator = HingerEvaluator::new();
        assert_eq!(evaluator.evaluate(&GridState::empty(3, 3)), 0);
    }

    #[test]
    fn test_hinger_evaluation() {
        let evaluator = HingerEvaluator::new();

        // Costs 2 + 3 + 2, one region, (0,1) critical
        let line = GridState::new(vec![vec![1, 1, 1]]).unwrap();
        assert_eq!(evaluator.evaluate(&line), 7 + 2 - 3);

        let state = GridState::new(vec![vec![2, 1, 0], vec![0, 1, 0], vec![1, 0, 2]]).unwrap();
        assert_eq!(evaluator.evaluate(&state), 14);
    }

    #[test]
    fn test_custom_weights() {
        let evaluator = HingerEvaluator {
            region_weight: 10,
            critical_weight: 0,
        };
        // Two isolated counters: cost 1 each, two regions
        let state = GridState::new(vec![vec![1, 0, 1]]).unwrap();
        assert_eq!(evaluator.evaluate(&state), 2 + 20);
    }
}
