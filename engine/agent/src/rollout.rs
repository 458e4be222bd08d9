//! Simulation policies for MCTS.

use hinger_core::GridState;
use rand::Rng;

use crate::terminal::{is_terminal, is_win};

/// Plays a state out to the end and reports the outcome.
pub trait Rollout {
    /// Returns 1 if the playout ends in a win, 0 otherwise.
    fn simulate<R: Rng>(&self, state: &GridState, rng: &mut R) -> u32;
}

/// Uniformly random moves until a hinger appears or no active cells remain.
///
/// A playout scores 1 as soon as it reaches a state where [`is_win`] holds,
/// and 0 if the grid empties first.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRollout;

impl RandomRollout {
    pub fn new() -> Self {
        Self
    }
}

impl Rollout for RandomRollout {
    fn simulate<R: Rng>(&self, state: &GridState, rng: &mut R) -> u32 {
        let mut current = state.clone();
        loop {
            if is_win(&current) {
                return 1;
            }
            if is_terminal(&current) {
                return 0;
            }
            let idx = rng.gen_range(0..current.active_cells().len());
            let Some(next) = current.successors().nth(idx) else {
                return 0;
            };
            current = next.state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// Wins whenever the playout starts from a state with a critical cell.
    struct HingerAtStart;

    impl Rollout for HingerAtStart {
        fn simulate<R: Rng>(&self, state: &GridState, _rng: &mut R) -> u32 {
            u32::from(is_win(state))
        }
    }

    #[test]
    fn test_random_rollout_wins_on_hinger() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let state = GridState::new(vec![vec![2, 1, 0], vec![0, 1, 0], vec![1, 0, 2]]).unwrap();

        for _ in 0..20 {
            assert_eq!(RandomRollout::new().simulate(&state, &mut rng), 1);
        }
    }

    #[test]
    fn test_random_rollout_without_reachable_hinger() {
        // Every cell touches every other, so no removal ever splits a region
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let block = GridState::new(vec![vec![1, 1], vec![1, 1]]).unwrap();

        for _ in 0..20 {
            assert_eq!(RandomRollout.simulate(&block, &mut rng), 0);
        }
    }

    #[test]
    fn test_random_rollout_finds_later_hinger() {
        // No hinger yet; dropping the middle to one counter creates one
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let line = GridState::new(vec![vec![2, 2, 2]]).unwrap();
        assert!(!is_win(&line));

        let wins: u32 = (0..50).map(|_| RandomRollout.simulate(&line, &mut rng)).sum();
        assert!(wins > 0);
    }

    #[test]
    fn test_rollout_on_terminal_state() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        assert_eq!(RandomRollout.simulate(&GridState::empty(2, 2), &mut rng), 0);
    }

    #[test]
    fn test_custom_rollout() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let hinger = GridState::new(vec![vec![1, 1, 1]]).unwrap();
        let safe = GridState::new(vec![vec![1, 1, 0]]).unwrap();

        assert_eq!(HingerAtStart.simulate(&hinger, &mut rng), 1);
        assert_eq!(HingerAtStart.simulate(&safe, &mut rng), 0);
    }
}
