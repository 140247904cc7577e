//! Core types and traits for the Tether coverage planner.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Tether workspace:
//! cell positions, node identifiers, cell classification, the
//! [`Environment`] trait, and the error types shared by the graph and
//! the frontier selector.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod traits;

pub use cell::CellKind;
pub use error::{GraphError, SelectionError};
pub use id::{CellPos, Direction, NodeId};
pub use traits::Environment;
