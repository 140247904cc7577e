//! Insertion-ordered index of unvisited nodes.

use indexmap::IndexSet;
use tether_core::{CellPos, NodeId};

/// One element of the unvisited snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrontierEntry {
    /// Node position.
    pub pos: CellPos,
    /// Discovery distance of the node.
    pub distance: u32,
}

/// Set of unvisited node ids, ordered by discovery.
///
/// Removal uses `shift_remove` so the remaining entries keep their
/// relative order; the leftmost tie-break depends on it.
#[derive(Clone, Debug, Default)]
pub struct UnvisitedIndex {
    ids: IndexSet<NodeId>,
}

impl UnvisitedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly discovered unvisited node.
    ///
    /// Returns `false` if it was already registered.
    pub fn insert(&mut self, id: NodeId) -> bool {
        self.ids.insert(id)
    }

    /// Remove a node that has just been visited.
    ///
    /// Returns `false` if it was not registered.
    pub fn remove(&mut self, id: NodeId) -> bool {
        self.ids.shift_remove(&id)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of unvisited nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }
}
