//! Tether: energy-bounded coverage planning for a single tethered robot.
//!
//! An agent with a fixed energy budget must visit every reachable free
//! cell of a grid, returning to its charging station before the budget
//! runs out. Tether grows an exploration tree from the station and
//! sweeps it in geometric distance contours.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the Tether sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tether::prelude::*;
//!
//! let obstacles = [
//!     CellPos::new(2, 1),
//!     CellPos::new(3, 1),
//!     CellPos::new(2, 2),
//!     CellPos::new(3, 2),
//! ];
//! let env = GridEnvironment::new(4, 5, CellPos::new(0, 0), &obstacles).unwrap();
//! let mut session = CoverageSession::new(CoverageConfig::new(Box::new(env), 20)).unwrap();
//! let report = session.run().unwrap();
//!
//! assert_eq!(report.metrics.frontier_remaining, 0);
//! assert_eq!(session.graph().len(), 16);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tether-core` | Positions, cell kinds, node ids, errors, `Environment` |
//! | [`space`] | `tether-space` | `GridEnvironment` |
//! | [`graph`] | `tether-graph` | `ExplorationGraph` and the frontier index |
//! | [`engine`] | `tether-engine` | Scheduler, selection, explorer, `CoverageSession` |
//! | [`scenario`] | `tether-scenario` | TOML and legacy scenario files |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`tether-core`).
pub use tether_core as types;

/// Grid maps (`tether-space`).
pub use tether_space as space;

/// The exploration tree (`tether-graph`).
pub use tether_graph as graph;

/// Contour scheduling and excursions (`tether-engine`).
///
/// [`engine::CoverageSession`] drives a whole run; the explorer and the
/// selection functions are available for step-by-step use.
pub use tether_engine as engine;

/// Scenario files (`tether-scenario`).
pub use tether_scenario as scenario;

/// Common imports for typical Tether usage.
///
/// ```rust
/// use tether::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use tether_core::{CellKind, CellPos, Direction, Environment, NodeId};

    // Errors
    pub use tether_core::{GraphError, SelectionError};
    pub use tether_engine::{ConfigError, ExcursionError, RunError};
    pub use tether_scenario::ScenarioError;
    pub use tether_space::SpaceError;

    // Space and graph
    pub use tether_graph::{ExplorationGraph, FrontierEntry};
    pub use tether_space::GridEnvironment;

    // Engine
    pub use tether_engine::{
        CoverageConfig, CoverageSession, RoundReport, RunMetrics, RunReport, ScheduleParams,
        StepKind, StepRecord,
    };

    // Scenario
    pub use tether_scenario::Scenario;
}
