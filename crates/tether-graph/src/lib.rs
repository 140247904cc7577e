//! Incrementally grown exploration tree for the Tether coverage planner.
//!
//! [`ExplorationGraph`] stores every cell the agent has discovered as a
//! node in a tree rooted at the charging station. Nodes live in a dense
//! arena addressed by [`NodeId`](tether_core::NodeId); each carries its
//! discovery distance, visited flag and parent pointer. An
//! insertion-ordered [`UnvisitedIndex`] tracks the frontier.
//!
//! # Tree invariant
//!
//! A node is created at most once, at first discovery, with exactly one
//! parent. No other edge is ever added, so the structure is always a
//! tree and paths between nodes are unique.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod frontier;
pub mod graph;
pub mod node;

pub use frontier::{FrontierEntry, UnvisitedIndex};
pub use graph::ExplorationGraph;
pub use node::NodeRecord;
