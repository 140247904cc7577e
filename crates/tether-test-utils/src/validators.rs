//! Graph-level checks shared by the test suites.
//!
//! Every function panics with a descriptive message on failure, so they
//! read naturally inside `#[test]` bodies and proptest closures.

use std::collections::VecDeque;

use indexmap::IndexSet;
use tether_core::{CellKind, CellPos, Environment};
use tether_graph::ExplorationGraph;

/// Assert the graph is a tree rooted at the station.
///
/// - the station is the only parentless node and has distance 0;
/// - every other parent is a node, 4-adjacent to its child;
/// - each node's distance is its parent's plus one;
/// - no node has more than four children;
/// - there are exactly `len - 1` edges.
pub fn assert_tree_invariant(graph: &ExplorationGraph) {
    let station = graph.station();
    let mut roots = 0;
    for node in graph.iter() {
        match node.parent() {
            None => {
                roots += 1;
                assert_eq!(node.pos(), station, "parentless node {} is not the station", node.pos());
                assert_eq!(node.distance(), 0, "station distance must be 0");
            }
            Some(parent_id) => {
                let parent = graph
                    .get(parent_id)
                    .unwrap_or_else(|| panic!("node {} has dangling parent", node.pos()));
                assert!(
                    parent.pos().is_adjacent(node.pos()),
                    "edge {} -> {} is not 4-adjacent",
                    parent.pos(),
                    node.pos()
                );
                assert_eq!(
                    node.distance(),
                    parent.distance() + 1,
                    "node {} distance is not parent + 1",
                    node.pos()
                );
            }
        }
        assert!(node.children().len() <= 4, "node {} has more than 4 children", node.pos());
    }
    assert_eq!(roots, 1, "expected exactly one parentless node");
    assert_eq!(graph.edges().count(), graph.len() - 1, "edge count");
}

/// Assert every node sits on the station or an empty cell.
pub fn assert_nodes_traversable(env: &dyn Environment, graph: &ExplorationGraph) {
    for node in graph.iter() {
        let kind = env.classify(node.pos());
        assert!(
            matches!(kind, Some(CellKind::Empty) | Some(CellKind::Station)),
            "node {} lies on {:?}",
            node.pos(),
            kind
        );
    }
}

/// Empty cells 4-connected to the station, in BFS order.
///
/// This is the ground truth a complete coverage must reach.
pub fn reachable_free_cells(env: &dyn Environment) -> IndexSet<CellPos> {
    let station = env.station();
    let mut seen: IndexSet<CellPos> = IndexSet::new();
    let mut queue = VecDeque::from([station]);
    while let Some(pos) = queue.pop_front() {
        for nb in env.free_neighbours(pos) {
            if seen.insert(nb) {
                queue.push_back(nb);
            }
        }
    }
    seen
}

/// Assert every reachable empty cell is a visited node.
pub fn assert_full_coverage(env: &dyn Environment, graph: &ExplorationGraph) {
    let reachable = reachable_free_cells(env);
    let missing: Vec<CellPos> = reachable
        .iter()
        .copied()
        .filter(|&pos| graph.is_visited(pos) != Ok(true))
        .collect();
    assert!(
        missing.is_empty(),
        "{} of {} reachable cells not visited: {:?}",
        missing.len(),
        reachable.len(),
        missing
    );
    assert_eq!(graph.len(), reachable.len() + 1, "graph holds cells outside reach");
}
