//! Error types shared by the exploration graph and frontier selection.
//!
//! Every variant here is an internal-consistency violation: the planner
//! never retries or degrades, it aborts the run and reports the error.

use std::error::Error;
use std::fmt;

use crate::id::CellPos;

/// Errors from exploration-graph mutation and queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A node for this position already exists. Callers must check
    /// membership before inserting.
    DuplicateNode {
        /// The position that was inserted twice.
        pos: CellPos,
    },
    /// The position is not a node of the graph.
    UnknownNode {
        /// The missing position.
        pos: CellPos,
    },
    /// `mark_visited` was called on a node that is already visited.
    AlreadyVisited {
        /// The node that was visited twice.
        pos: CellPos,
    },
    /// The graph outgrew `u32` node ids.
    CapacityExceeded,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode { pos } => write!(f, "node {pos} already exists"),
            Self::UnknownNode { pos } => write!(f, "no node at {pos}"),
            Self::AlreadyVisited { pos } => write!(f, "node {pos} is already visited"),
            Self::CapacityExceeded => write!(f, "exploration graph exceeds u32::MAX nodes"),
        }
    }
}

impl Error for GraphError {}

/// Errors from frontier target and launch-root selection.
///
/// Both selection failures mean a scheduling invariant was broken
/// upstream (the caller skipped the existence check, or a round began
/// with no launch roots).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// No unvisited node was offered to `closest_leftmost`.
    EmptyFrontier,
    /// No launch root can reach the target.
    NoRoot {
        /// The target that could not be routed to.
        target: CellPos,
    },
    /// A graph query failed while routing.
    Graph(GraphError),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFrontier => write!(f, "frontier is empty"),
            Self::NoRoot { target } => write!(f, "no launch root reaches {target}"),
            Self::Graph(e) => write!(f, "graph: {e}"),
        }
    }
}

impl Error for SelectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for SelectionError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}
