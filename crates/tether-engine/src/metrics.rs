//! Whole-run metrics for a coverage session.
//!
//! [`RunMetrics`] is refreshed after every round so callers can read
//! progress mid-run as well as at the end.

use crate::context::StepCounters;

/// Counters and timing for a coverage run.
///
/// Durations are in microseconds of wall-clock time spent inside
/// [`CoverageSession::step_round`](crate::CoverageSession::step_round).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Rounds completed.
    pub rounds_run: u32,
    /// Precomputed round cap.
    pub round_cap: u32,
    /// Excursions completed.
    pub excursions: u64,
    /// Steps and discoveries over the whole run.
    pub counters: StepCounters,
    /// Nodes in the exploration graph.
    pub nodes: usize,
    /// Unvisited nodes left in the graph.
    pub frontier_remaining: usize,
    /// Time spent in rounds so far, in microseconds.
    pub elapsed_us: u64,
}

impl RunMetrics {
    /// Fraction of graph nodes that are visited, in `[0, 1]`.
    pub fn visited_ratio(&self) -> f64 {
        if self.nodes == 0 {
            return 0.0;
        }
        (self.nodes - self.frontier_remaining) as f64 / self.nodes as f64
    }
}
