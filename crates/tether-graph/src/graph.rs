//! The exploration tree.

use std::collections::{BTreeMap, HashMap};

use smallvec::SmallVec;
use tether_core::{CellPos, GraphError, NodeId};

use crate::frontier::{FrontierEntry, UnvisitedIndex};
use crate::node::NodeRecord;

/// Tree of discovered cells rooted at the charging station.
///
/// Storage is arena-style: `nodes[id]` holds the record for
/// [`NodeId`] `id`, and `index` maps positions to ids. Two derived
/// indexes are maintained alongside:
///
/// - `unvisited`: every node whose visited flag is false, in discovery
///   order. Inserted by [`add_node`](Self::add_node), removed by
///   [`mark_visited`](Self::mark_visited).
/// - `levels`: node ids grouped by discovery distance, for root harvesting.
///
/// Nodes are never removed or re-parented.
#[derive(Clone, Debug)]
pub struct ExplorationGraph {
    nodes: Vec<NodeRecord>,
    index: HashMap<CellPos, NodeId>,
    unvisited: UnvisitedIndex,
    levels: BTreeMap<u32, Vec<NodeId>>,
}

impl ExplorationGraph {
    /// Create a graph holding only the station, already visited, at
    /// distance 0.
    pub fn new(station: CellPos) -> Self {
        let root = NodeRecord {
            pos: station,
            distance: 0,
            depth: 0,
            visited: true,
            parent: None,
            children: SmallVec::new(),
        };
        let mut index = HashMap::new();
        index.insert(station, NodeId::ROOT);
        let mut levels = BTreeMap::new();
        levels.insert(0, vec![NodeId::ROOT]);
        Self {
            nodes: vec![root],
            index,
            unvisited: UnvisitedIndex::new(),
            levels,
        }
    }

    /// Create a graph holding the visited station plus each position in
    /// `neighbours` as an unvisited child of the station at distance 1,
    /// in iteration order. Repeats and the station itself are skipped.
    pub fn seeded(station: CellPos, neighbours: impl IntoIterator<Item = CellPos>) -> Self {
        let mut graph = Self::new(station);
        for pos in neighbours {
            if graph.contains(pos) {
                continue;
            }
            // Parent is known and `pos` is new: only capacity can fail.
            if graph.add_node(pos, 1, false, station).is_err() {
                break;
            }
        }
        graph
    }

    /// Position of the station (tree root).
    pub fn station(&self) -> CellPos {
        self.nodes[NodeId::ROOT.index()].pos
    }

    /// Number of nodes, station included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `pos` has been discovered.
    pub fn contains(&self, pos: CellPos) -> bool {
        self.index.contains_key(&pos)
    }

    /// Arena id of the node at `pos`.
    pub fn node_id(&self, pos: CellPos) -> Option<NodeId> {
        self.index.get(&pos).copied()
    }

    /// Record of the node at `pos`.
    pub fn node(&self, pos: CellPos) -> Option<&NodeRecord> {
        self.node_id(pos).map(|id| &self.nodes[id.index()])
    }

    /// Record for an arena id.
    pub fn get(&self, id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(id.index())
    }

    fn require(&self, pos: CellPos) -> Result<NodeId, GraphError> {
        self.node_id(pos).ok_or(GraphError::UnknownNode { pos })
    }

    /// Insert a newly discovered node with a discovery edge from `parent`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateNode`] if `pos` is already a node.
    /// - [`GraphError::UnknownNode`] if `parent` is not a node.
    /// - [`GraphError::CapacityExceeded`] if ids overflow `u32`.
    pub fn add_node(
        &mut self,
        pos: CellPos,
        distance: u32,
        visited: bool,
        parent: CellPos,
    ) -> Result<NodeId, GraphError> {
        if self.contains(pos) {
            return Err(GraphError::DuplicateNode { pos });
        }
        let parent_id = self.require(parent)?;
        let id = NodeId(u32::try_from(self.nodes.len()).map_err(|_| GraphError::CapacityExceeded)?);

        let depth = self.nodes[parent_id.index()].depth + 1;
        self.nodes[parent_id.index()].children.push(id);
        self.nodes.push(NodeRecord {
            pos,
            distance,
            depth,
            visited,
            parent: Some(parent_id),
            children: SmallVec::new(),
        });
        self.index.insert(pos, id);
        self.levels.entry(distance).or_default().push(id);
        if !visited {
            self.unvisited.insert(id);
        }
        Ok(id)
    }

    /// Flip the node at `pos` to visited and drop it from the frontier.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownNode`] if `pos` is not a node.
    /// - [`GraphError::AlreadyVisited`] if the flag is already set; the
    ///   flag transitions at most once per node.
    pub fn mark_visited(&mut self, pos: CellPos) -> Result<(), GraphError> {
        let id = self.require(pos)?;
        let node = &mut self.nodes[id.index()];
        if node.visited {
            return Err(GraphError::AlreadyVisited { pos });
        }
        node.visited = true;
        self.unvisited.remove(id);
        Ok(())
    }

    /// Whether the node at `pos` has been visited.
    pub fn is_visited(&self, pos: CellPos) -> Result<bool, GraphError> {
        let id = self.require(pos)?;
        Ok(self.nodes[id.index()].visited)
    }

    /// Discovery distance of the node at `pos`.
    pub fn distance_of(&self, pos: CellPos) -> Result<u32, GraphError> {
        let id = self.require(pos)?;
        Ok(self.nodes[id.index()].distance)
    }

    /// Snapshot of the unvisited nodes in discovery order.
    ///
    /// The returned vector is owned; later mutation does not affect it.
    pub fn unvisited_nodes(&self) -> Vec<FrontierEntry> {
        self.unvisited
            .iter()
            .map(|id| {
                let n = &self.nodes[id.index()];
                FrontierEntry {
                    pos: n.pos,
                    distance: n.distance,
                }
            })
            .collect()
    }

    /// Number of unvisited nodes.
    pub fn unvisited_count(&self) -> usize {
        self.unvisited.len()
    }

    /// Number of visited nodes, station included.
    pub fn visited_count(&self) -> usize {
        self.nodes.len() - self.unvisited.len()
    }

    /// Whether any unvisited node has a distance in `[min, max]`.
    pub fn has_unvisited_within(&self, min: u32, max: u32) -> bool {
        self.unvisited.iter().any(|id| {
            let d = self.nodes[id.index()].distance;
            d >= min && d <= max
        })
    }

    /// The unique tree path from `source` to `target`, both inclusive.
    ///
    /// Walks parent pointers from the deeper endpoint up to the lowest
    /// common ancestor, so the cost is O(depth).
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if either endpoint is absent.
    pub fn shortest_path(&self, source: CellPos, target: CellPos) -> Result<Vec<CellPos>, GraphError> {
        let mut a = self.require(source)?;
        let mut b = self.require(target)?;

        let mut up: Vec<NodeId> = Vec::new();
        let mut down: Vec<NodeId> = Vec::new();
        while self.depth(a) > self.depth(b) {
            up.push(a);
            a = self.parent_id(a);
        }
        while self.depth(b) > self.depth(a) {
            down.push(b);
            b = self.parent_id(b);
        }
        while a != b {
            up.push(a);
            down.push(b);
            a = self.parent_id(a);
            b = self.parent_id(b);
        }
        up.push(a);
        up.extend(down.into_iter().rev());

        Ok(up.into_iter().map(|id| self.nodes[id.index()].pos).collect())
    }

    fn depth(&self, id: NodeId) -> u32 {
        self.nodes[id.index()].depth
    }

    /// Parent id, or the root itself for the root (depth 0 stops every walk).
    fn parent_id(&self, id: NodeId) -> NodeId {
        self.nodes[id.index()].parent.unwrap_or(NodeId::ROOT)
    }

    /// Position of the discovering parent, `None` for the station.
    pub fn parent_of(&self, pos: CellPos) -> Result<Option<CellPos>, GraphError> {
        let id = self.require(pos)?;
        Ok(self.nodes[id.index()]
            .parent
            .map(|p| self.nodes[p.index()].pos))
    }

    /// Positions of the nodes discovered from `pos`, in discovery order.
    pub fn children_of(&self, pos: CellPos) -> Result<Vec<CellPos>, GraphError> {
        let id = self.require(pos)?;
        Ok(self.nodes[id.index()]
            .children
            .iter()
            .map(|c| self.nodes[c.index()].pos)
            .collect())
    }

    /// Positions of all nodes discovered at distance `d`, in discovery order.
    pub fn nodes_at_distance(&self, d: u32) -> Vec<CellPos> {
        self.levels
            .get(&d)
            .map(|ids| ids.iter().map(|id| self.nodes[id.index()].pos).collect())
            .unwrap_or_default()
    }

    /// Largest recorded discovery distance.
    pub fn max_distance(&self) -> u32 {
        self.levels.keys().next_back().copied().unwrap_or(0)
    }

    /// All node records in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeRecord> + '_ {
        self.nodes.iter()
    }

    /// Discovery edges as `(parent, child)` pairs, in child discovery order.
    pub fn edges(&self) -> impl Iterator<Item = (CellPos, CellPos)> + '_ {
        self.nodes.iter().filter_map(|n| {
            n.parent
                .map(|p| (self.nodes[p.index()].pos, n.pos))
        })
    }
}
