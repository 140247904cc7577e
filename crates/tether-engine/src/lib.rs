//! Coverage engine for the Tether planner.
//!
//! Drives a single energy-bounded agent over a static grid, growing an
//! exploration tree from the charging station in geometric contour
//! rounds. [`CoverageSession`] is the entry point; the scheduler, the
//! selection rules and the explorer are exposed for callers that want to
//! drive excursions themselves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod context;
pub mod explore;
pub mod metrics;
pub mod schedule;
pub mod select;
pub mod session;

pub use config::{ConfigError, CoverageConfig, ScheduleParams};
pub use context::{ExcursionContext, StepCounters, StepKind, StepRecord};
pub use explore::{CoverageExplorer, ExcursionError, ExcursionReport};
pub use metrics::RunMetrics;
pub use schedule::{round_cap, Contour, RoundBounds, RoundScheduler};
pub use select::{closest_leftmost, closest_root};
pub use session::{CoverageSession, RoundReport, RunError, RunReport};
