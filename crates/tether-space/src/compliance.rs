//! Environment trait compliance test helpers.
//!
//! These functions verify that an [`Environment`] implementation
//! satisfies the invariants the explorer relies on.

use indexmap::IndexSet;
use tether_core::{CellKind, CellPos, Environment};

fn all_cells(env: &dyn Environment) -> Vec<CellPos> {
    (0..env.height() as i32)
        .flat_map(|r| (0..env.width() as i32).map(move |c| CellPos::new(r, c)))
        .collect()
}

/// Assert that exactly one cell is classified as the station, and that
/// it is the cell reported by `station()`.
pub fn assert_single_station(env: &dyn Environment) {
    let stations: Vec<CellPos> = all_cells(env)
        .into_iter()
        .filter(|&pos| env.classify(pos) == Some(CellKind::Station))
        .collect();
    assert_eq!(stations, vec![env.station()], "expected exactly one station");
}

/// Assert that every free neighbour is adjacent, EMPTY and unique.
pub fn assert_free_neighbours_bounded(env: &dyn Environment) {
    for pos in all_cells(env) {
        let nbs = env.free_neighbours(pos);
        assert!(nbs.len() <= 4, "{pos} has {} free neighbours", nbs.len());
        let unique: IndexSet<CellPos> = nbs.iter().copied().collect();
        assert_eq!(unique.len(), nbs.len(), "duplicate neighbour of {pos}");
        for nb in nbs {
            assert!(pos.is_adjacent(nb), "{nb} is not adjacent to {pos}");
            assert_eq!(
                env.classify(nb),
                Some(CellKind::Empty),
                "{nb} returned as free neighbour of {pos}"
            );
        }
    }
}

/// Assert that adjacency between EMPTY cells is symmetric.
pub fn assert_free_neighbours_symmetric(env: &dyn Environment) {
    for pos in all_cells(env) {
        if env.classify(pos) != Some(CellKind::Empty) {
            continue;
        }
        for nb in env.free_neighbours(pos) {
            assert!(
                env.free_neighbours(nb).contains(&pos),
                "neighbour symmetry violated: {nb} in N({pos}) but {pos} not in N({nb})"
            );
        }
    }
}

/// Assert that `free_cells()` matches a scan of `classify()`.
pub fn assert_free_cells_complete(env: &dyn Environment) {
    let expected: Vec<CellPos> = all_cells(env)
        .into_iter()
        .filter(|&pos| env.classify(pos) == Some(CellKind::Empty))
        .collect();
    assert_eq!(env.free_cells(), expected);
}

/// Run all compliance checks.
pub fn run_full_compliance(env: &dyn Environment) {
    assert_single_station(env);
    assert_free_neighbours_bounded(env);
    assert_free_neighbours_symmetric(env);
    assert_free_cells_complete(env);
}
