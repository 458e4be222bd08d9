//! Terminal and win tests.

use hinger_core::GridState;

/// A state is terminal once no active cells remain.
#[inline]
pub fn is_terminal(state: &GridState) -> bool {
    !state.has_active_cells()
}

/// True if the side to move faces a state holding a critical cell.
///
/// Advisory only: it never makes a state terminal.
#[inline]
pub fn is_win(state: &GridState) -> bool {
    state.critical_cell_count() > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_only_when_empty() {
        assert!(is_terminal(&GridState::empty(2, 3)));

        let hinger = GridState::new(vec![vec![1, 1, 1]]).unwrap();
        assert!(is_win(&hinger));
        assert!(!is_terminal(&hinger));
    }

    #[test]
    fn test_empty_grid_is_not_a_win() {
        assert!(!is_win(&GridState::empty(1, 1)));
    }
}
