use super::*;

fn coursework_grid() -> GridState {
    GridState::new(vec![
        vec![2, 1, 0, 0, 0],
        vec![0, 1, 0, 1, 0],
        vec![1, 0, 2, 0, 1],
        vec![0, 0, 0, 1, 0],
    ])
    .unwrap()
}

#[test]
fn test_three_by_three_scenario() {
    // (1,1) touches every other active cell diagonally or orthogonally
    let state = GridState::new(vec![vec![2, 1, 0], vec![0, 1, 0], vec![1, 0, 2]]).unwrap();

    assert_eq!(state.region_count(), 1);
    // Emptying (1,1) splits into {(0,0),(0,1)}, {(2,0)}, {(2,2)}
    assert_eq!(state.critical_cells(), vec![Move::new(1, 1)]);
    assert_eq!(state.critical_cell_count(), 1);
}

#[test]
fn test_coursework_grid_analysis() {
    let state = coursework_grid();

    assert_eq!(state.region_count(), 1);
    assert_eq!(state.critical_cells(), vec![Move::new(1, 1)]);

    let costs: Vec<_> = state.successors().map(|s| (s.mv, s.cost)).collect();
    assert_eq!(
        costs,
        vec![
            (Move::new(0, 0), 3),
            (Move::new(0, 1), 3),
            (Move::new(1, 1), 5),
            (Move::new(1, 3), 3),
            (Move::new(2, 0), 2),
            (Move::new(2, 2), 4),
            (Move::new(2, 4), 3),
            (Move::new(3, 3), 3),
        ]
    );
}

#[test]
fn test_two_region_grid() {
    let state = GridState::new(vec![
        vec![1, 1, 0, 0, 1],
        vec![1, 1, 0, 0, 0],
        vec![0, 0, 1, 1, 1],
        vec![0, 0, 0, 1, 1],
    ])
    .unwrap();

    assert_eq!(state.region_count(), 2);
    assert_eq!(state.critical_cells(), vec![Move::new(1, 1), Move::new(2, 2)]);
}

#[test]
fn test_region_count_independent_of_orientation() {
    let state = coursework_grid();

    // Mirror the grid left-to-right and top-to-bottom
    let mirrored: Vec<Vec<u32>> = state
        .to_rows()
        .into_iter()
        .rev()
        .map(|row| row.into_iter().rev().collect())
        .collect();
    let mirrored = GridState::new(mirrored).unwrap();

    assert_eq!(mirrored.region_count(), state.region_count());
    assert_eq!(mirrored.critical_cell_count(), state.critical_cell_count());
}

#[test]
fn test_critical_matches_definition() {
    let state = coursework_grid();
    let base = state.region_count();

    for mv in state.singleton_cells() {
        let emptied = state.apply(mv).unwrap();
        assert_eq!(state.is_critical(mv), emptied.region_count() > base, "{mv}");
    }
}

#[test]
fn test_successors_leave_source_untouched() {
    let state = coursework_grid();
    let before = state.clone();
    let active = state.active_cells().len();

    let successors: Vec<_> = state.successors().collect();
    assert_eq!(successors.len(), active);
    assert_eq!(state, before);

    for successor in &successors {
        assert_eq!(successor.state.total_counters() + 1, state.total_counters());
        assert_eq!(
            successor.state.count_at(successor.mv) + 1,
            state.count_at(successor.mv)
        );
        assert_eq!(successor.cost, state.move_cost(successor.mv));
    }
}

#[test]
fn test_successors_are_restartable() {
    let state = coursework_grid();

    let first: Vec<_> = state.successors().map(|s| (s.mv, s.cost)).collect();
    let second: Vec<_> = state.successors().map(|s| (s.mv, s.cost)).collect();
    assert_eq!(first, second);

    // Generated states are independent values
    let mut a: Vec<_> = state.successors().map(|s| s.state).collect();
    let b: Vec<_> = state.successors().map(|s| s.state).collect();
    a[0] = a[0].apply(Move::new(0, 0)).unwrap();
    assert_ne!(a[0], b[0]);
}

#[test]
fn test_equality_and_hash_are_structural() {
    use std::collections::HashSet;

    let a = GridState::new(vec![vec![1, 0], vec![0, 1]]).unwrap();
    let b = GridState::new(vec![vec![1, 0], vec![0, 1]]).unwrap();
    // Same cells, different shape
    let c = GridState::new(vec![vec![1, 0, 0, 1]]).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<_> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}
