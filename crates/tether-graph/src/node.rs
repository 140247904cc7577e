//! Arena node records.

use smallvec::SmallVec;
use tether_core::{CellPos, NodeId};

/// A single discovered cell.
///
/// `distance` is the hop count recorded at discovery and never changes,
/// even if a shorter route is found later. `depth` is the node's depth
/// in the tree and is what path queries walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeRecord {
    pub(crate) pos: CellPos,
    pub(crate) distance: u32,
    pub(crate) depth: u32,
    pub(crate) visited: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec<[NodeId; 4]>,
}

impl NodeRecord {
    /// Cell position of this node.
    pub fn pos(&self) -> CellPos {
        self.pos
    }

    /// Discovery distance from the station.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Depth in the discovery tree (the station has depth 0).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether the agent has physically reached this node.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Parent node id, `None` for the station.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child node ids in discovery order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
