//! Mutable excursion state threaded through every movement.
//!
//! [`ExcursionContext`] is the only place the agent's position lives.
//! The explorer receives it explicitly instead of keeping position,
//! budget and contour as fields of its own, so every state transition
//! of a run can be inspected (and tested) in isolation.

use std::fmt;

use tether_core::CellPos;

use crate::schedule::{Contour, RoundBounds};

/// Why the agent moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Along a tree path (station → root → target, or back home).
    Travel,
    /// Into a contour cell during depth-first exploration.
    Forward,
    /// Back to the parent frame's cell after a depth-first branch.
    Backtrack,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Travel => write!(f, "travel"),
            Self::Forward => write!(f, "forward"),
            Self::Backtrack => write!(f, "backtrack"),
        }
    }
}

/// One recorded agent step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepRecord {
    /// Round during which the step happened.
    pub round: u32,
    /// Cell the agent left.
    pub from: CellPos,
    /// Cell the agent entered.
    pub to: CellPos,
    /// Why it moved.
    pub kind: StepKind,
    /// Discovery distance of `to`.
    pub distance: u32,
    /// Depth-first budget of the frame taking the step: before charging
    /// for forward steps, after charging for backtracks. `None` for
    /// travel.
    pub budget: Option<u32>,
}

/// Cumulative step and discovery counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    /// Steps taken along tree paths.
    pub travel: u64,
    /// Forward depth-first steps.
    pub forward: u64,
    /// Backtrack depth-first steps.
    pub backtrack: u64,
    /// Nodes added to the graph.
    pub discovered: u64,
    /// Nodes whose visited flag was set.
    pub visited: u64,
}

impl StepCounters {
    /// Total physical steps.
    pub fn steps(&self) -> u64 {
        self.travel + self.forward + self.backtrack
    }

    /// Field-wise difference `self - earlier`.
    pub fn since(&self, earlier: &StepCounters) -> StepCounters {
        StepCounters {
            travel: self.travel - earlier.travel,
            forward: self.forward - earlier.forward,
            backtrack: self.backtrack - earlier.backtrack,
            discovered: self.discovered - earlier.discovered,
            visited: self.visited - earlier.visited,
        }
    }
}

/// Agent position, energy budget, active contour, counters and trace.
#[derive(Clone, Debug)]
pub struct ExcursionContext {
    pub(crate) position: CellPos,
    budget: u32,
    round: u32,
    contour: Contour,
    pub(crate) counters: StepCounters,
    trace: Option<Vec<StepRecord>>,
}

impl ExcursionContext {
    /// Agent parked at `station` with a full budget and an empty contour.
    pub fn new(station: CellPos, budget: u32, record_trace: bool) -> Self {
        Self {
            position: station,
            budget,
            round: 0,
            contour: Contour { min: 1, max: 0 },
            counters: StepCounters::default(),
            trace: record_trace.then(Vec::new),
        }
    }

    /// Activate the contour of a new round.
    pub fn begin_round(&mut self, bounds: &RoundBounds) {
        self.round = bounds.round;
        self.contour = bounds.contour();
    }

    /// Current agent position.
    pub fn position(&self) -> CellPos {
        self.position
    }

    /// Total energy budget `B`.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Active round index (0 before the first round).
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Active contour.
    pub fn contour(&self) -> Contour {
        self.contour
    }

    /// Counters accumulated so far.
    pub fn counters(&self) -> StepCounters {
        self.counters
    }

    /// Recorded steps, if tracing is on.
    pub fn trace(&self) -> Option<&[StepRecord]> {
        self.trace.as_deref()
    }

    pub(crate) fn record(&mut self, step: StepRecord) {
        if let Some(trace) = self.trace.as_mut() {
            trace.push(step);
        }
    }
}
