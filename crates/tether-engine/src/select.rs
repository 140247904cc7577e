//! Frontier target and launch-root selection.

use tether_core::{CellPos, SelectionError};
use tether_graph::{ExplorationGraph, FrontierEntry};

/// Pick the closest frontier node, breaking ties by discovery order.
///
/// Returns the first entry with the minimum `distance`. "Leftmost" is
/// the earliest-discovered node, not the smallest column, so `frontier`
/// must be in discovery order (as produced by
/// [`ExplorationGraph::unvisited_nodes`]).
///
/// # Errors
///
/// [`SelectionError::EmptyFrontier`] if `frontier` is empty.
pub fn closest_leftmost(frontier: &[FrontierEntry]) -> Result<FrontierEntry, SelectionError> {
    let mut best: Option<FrontierEntry> = None;
    for &entry in frontier {
        match best {
            Some(b) if b.distance <= entry.distance => {}
            _ => best = Some(entry),
        }
    }
    best.ok_or(SelectionError::EmptyFrontier)
}

/// Pick the launch root with the shortest tree path to `target`.
///
/// Returns the root and its path (root first, target last). Ties keep
/// the first root in `roots` order.
///
/// # Errors
///
/// - [`SelectionError::NoRoot`] if `roots` is empty.
/// - [`SelectionError::Graph`] if a root or the target is not a node.
pub fn closest_root(
    graph: &ExplorationGraph,
    target: CellPos,
    roots: &[CellPos],
) -> Result<(CellPos, Vec<CellPos>), SelectionError> {
    let mut best: Option<(CellPos, Vec<CellPos>)> = None;
    for &root in roots {
        let path = graph.shortest_path(root, target)?;
        match &best {
            Some((_, p)) if p.len() <= path.len() => {}
            _ => best = Some((root, path)),
        }
    }
    best.ok_or(SelectionError::NoRoot { target })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_core::GraphError;

    fn p(r: i32, c: i32) -> CellPos {
        CellPos::new(r, c)
    }

    fn e(r: i32, c: i32, distance: u32) -> FrontierEntry {
        FrontierEntry {
            pos: p(r, c),
            distance,
        }
    }

    #[test]
    fn leftmost_is_first_of_minimum() {
        let frontier = [e(0, 5, 3), e(4, 0, 2), e(0, 1, 2), e(1, 1, 4)];
        assert_eq!(closest_leftmost(&frontier), Ok(e(4, 0, 2)));
    }

    #[test]
    fn leftmost_ignores_column_order() {
        // Discovery order wins even when a later entry has a smaller column.
        let frontier = [e(2, 3, 1), e(2, 0, 1)];
        assert_eq!(closest_leftmost(&frontier).unwrap().pos, p(2, 3));
    }

    #[test]
    fn leftmost_empty_fails() {
        assert_eq!(closest_leftmost(&[]), Err(SelectionError::EmptyFrontier));
    }

    /// (0,0) ─ (0,1) ─ (0,2) ─ (0,3)
    ///   └── (1,0) ─ (2,0)
    fn chain() -> ExplorationGraph {
        let mut g = ExplorationGraph::new(p(0, 0));
        g.add_node(p(0, 1), 1, true, p(0, 0)).unwrap();
        g.add_node(p(1, 0), 1, true, p(0, 0)).unwrap();
        g.add_node(p(0, 2), 2, true, p(0, 1)).unwrap();
        g.add_node(p(2, 0), 2, true, p(1, 0)).unwrap();
        g.add_node(p(0, 3), 3, false, p(0, 2)).unwrap();
        g
    }

    #[test]
    fn closest_root_prefers_shorter_path() {
        let g = chain();
        let (root, path) = closest_root(&g, p(0, 3), &[p(2, 0), p(0, 2)]).unwrap();
        assert_eq!(root, p(0, 2));
        assert_eq!(path, vec![p(0, 2), p(0, 3)]);
    }

    #[test]
    fn closest_root_tie_keeps_first() {
        let g = chain();
        // Two distance-2 roots, equidistant from the station.
        let (root, path) = closest_root(&g, p(0, 0), &[p(2, 0), p(0, 2)]).unwrap();
        assert_eq!(root, p(2, 0));
        assert_eq!(path, vec![p(2, 0), p(1, 0), p(0, 0)]);
    }

    #[test]
    fn closest_root_station_only() {
        let g = chain();
        let (root, path) = closest_root(&g, p(0, 3), &[p(0, 0)]).unwrap();
        assert_eq!(root, p(0, 0));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn closest_root_without_roots_fails() {
        let g = chain();
        assert_eq!(
            closest_root(&g, p(0, 3), &[]),
            Err(SelectionError::NoRoot { target: p(0, 3) })
        );
    }

    #[test]
    fn closest_root_unknown_root_fails() {
        let g = chain();
        assert_eq!(
            closest_root(&g, p(0, 3), &[p(9, 9)]),
            Err(SelectionError::Graph(GraphError::UnknownNode { pos: p(9, 9) }))
        );
    }
}
