//! Static grid environments for the Tether coverage planner.
//!
//! This crate provides [`GridEnvironment`], the rectangular EMPTY /
//! STATION / OBSTACLE map that implements the
//! [`Environment`](tether_core::Environment) trait. The map is immutable
//! after construction and answers free-neighbour queries for the explorer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use grid::GridEnvironment;
