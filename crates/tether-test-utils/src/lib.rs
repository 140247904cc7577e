//! Map fixtures and coverage validators for Tether development.
//!
//! [`fixtures`] builds the small maps the test suites share;
//! [`validators`] checks graph-level properties that every finished or
//! partial run must satisfy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod validators;

pub use fixtures::{
    corridor, open_field, reference_environment, scattered_obstacles, walled_station,
};
pub use validators::{
    assert_full_coverage, assert_nodes_traversable, assert_tree_invariant, reachable_free_cells,
};
