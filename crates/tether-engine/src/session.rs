//! Round-by-round coverage driver.
//!
//! [`CoverageSession`] owns everything a run needs: the environment, the
//! growing exploration graph, the round scheduler, the current launch
//! roots and the agent's [`ExcursionContext`]. Each
//! [`step_round()`](CoverageSession::step_round) runs one contour round
//! to completion:
//!
//! 1. compute the round's bounds;
//! 2. while an unvisited node lies inside `[Dcurr, Dcurr_]`, run one
//!    excursion from the station;
//! 3. replace the launch roots with every node at distance `Dnext`.
//!
//! Construction seeds the graph with the station's free neighbours at
//! distance 1, so the first frontier exists even when no round runs.
//!
//! # Failure
//!
//! Any excursion error aborts the run. The session keeps the error and
//! returns it again from every later `step_round()` call; the graph is
//! left exactly as it was when the error occurred, for inspection.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::{debug, info, warn};
use tether_core::{CellPos, Environment};
use tether_graph::ExplorationGraph;

use crate::config::{ConfigError, CoverageConfig};
use crate::context::{ExcursionContext, StepRecord};
use crate::explore::{CoverageExplorer, ExcursionError, ExcursionReport};
use crate::metrics::RunMetrics;
use crate::schedule::{RoundBounds, RoundScheduler};

// ── Reports ─────────────────────────────────────────────────────

/// Outcome of one completed round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// The round's schedule values.
    pub bounds: RoundBounds,
    /// Excursions run during the round, in order.
    pub excursions: Vec<ExcursionReport>,
    /// Launch roots harvested for the next round (nodes at `Dnext`).
    pub roots_after: Vec<CellPos>,
}

/// Outcome of a full run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Every round run by this call, in order.
    pub rounds: Vec<RoundReport>,
    /// Metrics at the end of the run.
    pub metrics: RunMetrics,
}

// ── RunError ────────────────────────────────────────────────────

/// Error returned when a round aborts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunError {
    /// Round during which the failure happened.
    pub round: u32,
    /// The underlying excursion error.
    pub kind: ExcursionError,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {}: {}", self.round, self.kind)
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

// ── CoverageSession ─────────────────────────────────────────────

/// A single coverage run over a static environment.
///
/// # Example
///
/// ```
/// use tether_core::CellPos;
/// use tether_engine::{CoverageConfig, CoverageSession};
/// use tether_space::GridEnvironment;
///
/// let env = GridEnvironment::new(3, 3, CellPos::new(0, 0), &[]).unwrap();
/// let mut session = CoverageSession::new(CoverageConfig::new(Box::new(env), 20)).unwrap();
/// let report = session.run().unwrap();
/// assert_eq!(report.metrics.frontier_remaining, 0);
/// assert_eq!(session.position(), CellPos::new(0, 0));
/// ```
pub struct CoverageSession {
    environment: Box<dyn Environment>,
    graph: ExplorationGraph,
    scheduler: RoundScheduler,
    ctx: ExcursionContext,
    roots: Vec<CellPos>,
    next_round: u32,
    metrics: RunMetrics,
    failure: Option<RunError>,
}

impl CoverageSession {
    /// Validate `config` and build a session ready for round 1.
    ///
    /// The graph starts with the (visited) station and its free
    /// neighbours, unvisited at distance 1. The station is the sole
    /// launch root.
    pub fn new(config: CoverageConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let station = config.environment.station();
        let scheduler = RoundScheduler::new(config.budget, config.schedule)?;
        let graph =
            ExplorationGraph::seeded(station, config.environment.free_neighbours(station));
        let mut ctx = ExcursionContext::new(station, config.budget, config.record_trace);
        ctx.counters.discovered = (graph.len() - 1) as u64;
        let metrics = RunMetrics {
            round_cap: scheduler.round_cap(),
            counters: ctx.counters(),
            nodes: graph.len(),
            frontier_remaining: graph.unvisited_count(),
            ..Default::default()
        };
        info!(
            "coverage session: {}x{} map, station {}, budget {}, {} rounds",
            config.environment.width(),
            config.environment.height(),
            station,
            config.budget,
            scheduler.round_cap()
        );
        Ok(Self {
            graph,
            ctx,
            environment: config.environment,
            scheduler,
            roots: vec![station],
            next_round: 1,
            metrics,
            failure: None,
        })
    }

    /// Run the next round.
    ///
    /// Returns `Ok(None)` once the round cap has been reached.
    ///
    /// # Errors
    ///
    /// [`RunError`] if an excursion fails. The failure is sticky.
    pub fn step_round(&mut self) -> Result<Option<RoundReport>, RunError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        if self.next_round > self.scheduler.round_cap() {
            return Ok(None);
        }
        let started = Instant::now();
        let round = self.next_round;
        let result = self.run_round(round);
        self.metrics.elapsed_us += started.elapsed().as_micros() as u64;

        match result {
            Ok(report) => {
                self.next_round = self.next_round.saturating_add(1);
                self.refresh_metrics(report.excursions.len());
                info!(
                    "round {round}/{}: contour [{}, {}], {} excursions, {} unvisited, {} roots",
                    self.scheduler.round_cap(),
                    report.bounds.d_curr,
                    report.bounds.d_curr_max,
                    report.excursions.len(),
                    self.graph.unvisited_count(),
                    self.roots.len()
                );
                Ok(Some(report))
            }
            Err(kind) => {
                let err = RunError { round, kind };
                warn!("coverage run aborted: {err}");
                self.refresh_metrics(0);
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Run every remaining round.
    pub fn run(&mut self) -> Result<RunReport, RunError> {
        let mut rounds = Vec::new();
        while let Some(report) = self.step_round()? {
            rounds.push(report);
        }
        info!(
            "coverage finished: {} nodes, {} unvisited, {} steps",
            self.graph.len(),
            self.graph.unvisited_count(),
            self.metrics.counters.steps()
        );
        Ok(RunReport {
            rounds,
            metrics: self.metrics.clone(),
        })
    }

    fn run_round(&mut self, round: u32) -> Result<RoundReport, ExcursionError> {
        let bounds = self.scheduler.bounds(round);
        self.ctx.begin_round(&bounds);
        let mut explorer = CoverageExplorer::new(self.environment.as_ref(), &mut self.graph);
        debug!(
            "round {round}: Dcurr={} Dnext={} Bcurr={} Bcurr_={} Dcurr_={}",
            bounds.d_curr, bounds.d_next, bounds.b_curr, bounds.b_curr_max, bounds.d_curr_max
        );

        let contour = bounds.contour();
        let mut excursions = Vec::new();
        while explorer.graph().has_unvisited_within(contour.min, contour.max) {
            excursions.push(explorer.cover(&mut self.ctx, &self.roots)?);
        }

        self.roots = self.graph.nodes_at_distance(bounds.d_next);
        Ok(RoundReport {
            bounds,
            excursions,
            roots_after: self.roots.clone(),
        })
    }

    fn refresh_metrics(&mut self, excursions: usize) {
        self.metrics.rounds_run = self.next_round - 1;
        self.metrics.excursions += excursions as u64;
        self.metrics.counters = self.ctx.counters();
        self.metrics.nodes = self.graph.len();
        self.metrics.frontier_remaining = self.graph.unvisited_count();
    }

    /// The exploration graph built so far.
    pub fn graph(&self) -> &ExplorationGraph {
        &self.graph
    }

    /// The environment being covered.
    pub fn environment(&self) -> &dyn Environment {
        self.environment.as_ref()
    }

    /// The round scheduler.
    pub fn scheduler(&self) -> &RoundScheduler {
        &self.scheduler
    }

    /// Agent position. Always the station between rounds.
    pub fn position(&self) -> CellPos {
        self.ctx.position()
    }

    /// Launch roots for the next round.
    pub fn roots(&self) -> &[CellPos] {
        &self.roots
    }

    /// Index of the next round to run (starts at 1).
    pub fn next_round(&self) -> u32 {
        self.next_round
    }

    /// Precomputed round cap.
    pub fn round_cap(&self) -> u32 {
        self.scheduler.round_cap()
    }

    /// Whether no further round will run, either because the cap was
    /// reached or because a round failed.
    pub fn is_finished(&self) -> bool {
        self.failure.is_some() || self.next_round > self.scheduler.round_cap()
    }

    /// Metrics as of the last completed round.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Recorded steps, if the session was configured to trace.
    pub fn trace(&self) -> Option<&[StepRecord]> {
        self.ctx.trace()
    }
}

impl fmt::Debug for CoverageSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverageSession")
            .field("station", &self.graph.station())
            .field("budget", &self.scheduler.budget())
            .field("next_round", &self.next_round)
            .field("round_cap", &self.scheduler.round_cap())
            .field("nodes", &self.graph.len())
            .field("position", &self.ctx.position())
            .finish()
    }
}
