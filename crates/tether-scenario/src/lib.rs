//! Scenario descriptions for Tether coverage runs.
//!
//! A [`Scenario`] names a grid, its station and obstacles, and the
//! energy budget. It can be read from TOML or from the older three-line
//! text format (see [`legacy`]), and turned into a
//! [`GridEnvironment`](tether_space::GridEnvironment) plus a validated
//! [`CoverageConfig`](tether_engine::CoverageConfig).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod legacy;
pub mod scenario;

pub use error::ScenarioError;
pub use scenario::{Scenario, ScheduleSection};
