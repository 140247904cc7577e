//! Strongly-typed identifiers: [`CellPos`], [`NodeId`] and [`Direction`].

use std::fmt;

/// A cell position as `(row, col)`.
///
/// Identifies both grid cells and exploration-graph nodes. Equality,
/// hashing and ordering are by value (row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    /// Row index, growing "south".
    pub row: i32,
    /// Column index, growing "east".
    pub col: i32,
}

impl CellPos {
    /// Create a position from `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `dir`.
    ///
    /// Pure arithmetic: the result may lie outside any grid.
    pub fn offset(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: CellPos) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is exactly one von-Neumann step away.
    pub fn is_adjacent(self, other: CellPos) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for CellPos {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four von-Neumann step directions.
///
/// [`Direction::PROBE_ORDER`] is the order in which neighbours are
/// examined everywhere in the planner. It fixes the depth-first
/// pre-order and therefore the discovery order that backs the
/// leftmost tie-break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `col + 1`.
    East,
    /// `row + 1`.
    South,
    /// `col - 1`.
    West,
    /// `row - 1`.
    North,
}

impl Direction {
    /// Neighbour probe order: east, south, west, north.
    pub const PROBE_ORDER: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// `(d_row, d_col)` offset for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
            Self::North => (-1, 0),
        }
    }
}

/// Dense index of a node in the exploration graph arena.
///
/// Assigned sequentially in discovery order. The station is always
/// `NodeId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The station (tree root).
    pub const ROOT: NodeId = NodeId(0);

    /// Arena slot for this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
