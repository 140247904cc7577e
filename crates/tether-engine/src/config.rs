//! Coverage configuration, validation, and error types.
//!
//! [`CoverageConfig`] is the builder-input for constructing a
//! [`CoverageSession`](crate::session::CoverageSession).
//! [`validate()`](CoverageConfig::validate) checks structural invariants
//! before any graph state is created.

use std::error::Error;
use std::fmt;

use tether_core::{CellKind, CellPos, Environment};

use crate::schedule::round_cap;

// ── ScheduleParams ─────────────────────────────────────────────────

/// Constants of the geometric contour schedule.
///
/// Round `i` explores the band `[Dcurr, Dcurr_]` where `Dcurr` grows as
/// `B - (1 - delta)^(i-1) * B` and the band width is governed by
/// `beta + delta`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduleParams {
    /// Exploration fraction `β`. Default: 0.75.
    pub beta: f64,
    /// Decay rate `δ`. Default: 0.10.
    pub delta: f64,
}

impl Default for ScheduleParams {
    fn default() -> Self {
        Self {
            beta: 0.75,
            delta: 0.10,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`CoverageConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The energy budget is below the minimum of 2 (one step out, one back).
    BudgetTooSmall {
        /// The configured budget.
        budget: u32,
    },
    /// A [`ScheduleParams`] invariant is violated.
    InvalidSchedule {
        /// Which invariant was violated.
        reason: String,
    },
    /// The environment does not classify its own station as a station.
    StationNotOnMap {
        /// The reported station position.
        station: CellPos,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetTooSmall { budget } => {
                write!(f, "energy budget {budget} is below minimum of 2")
            }
            Self::InvalidSchedule { reason } => write!(f, "invalid schedule: {reason}"),
            Self::StationNotOnMap { station } => {
                write!(f, "station {station} is not a station cell of the map")
            }
        }
    }
}

impl Error for ConfigError {}

// ── CoverageConfig ─────────────────────────────────────────────────

/// Complete configuration for one coverage run.
pub struct CoverageConfig {
    /// The static map to cover.
    pub environment: Box<dyn Environment>,
    /// Total energy budget `B`: steps the agent may take between charges.
    pub budget: u32,
    /// Contour schedule constants.
    pub schedule: ScheduleParams,
    /// Record every step in the session trace. Default off; traces grow
    /// linearly with the distance travelled.
    pub record_trace: bool,
}

impl CoverageConfig {
    /// Configuration with default schedule and tracing off.
    pub fn new(environment: Box<dyn Environment>, budget: u32) -> Self {
        Self {
            environment,
            budget,
            schedule: ScheduleParams::default(),
            record_trace: false,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Budget must allow at least one round trip.
        if self.budget < 2 {
            return Err(ConfigError::BudgetTooSmall {
                budget: self.budget,
            });
        }
        // 2. Schedule constants. delta in (0, 1) keeps the log base finite
        //    and above 1; beta + delta <= 1 keeps Dcurr_ >= Dcurr.
        let s = &self.schedule;
        if !s.delta.is_finite() || s.delta <= 0.0 || s.delta >= 1.0 {
            return Err(ConfigError::InvalidSchedule {
                reason: format!("delta must be in (0, 1), got {}", s.delta),
            });
        }
        if !s.beta.is_finite() || s.beta <= 0.0 {
            return Err(ConfigError::InvalidSchedule {
                reason: format!("beta must be finite and positive, got {}", s.beta),
            });
        }
        if s.beta + s.delta > 1.0 {
            return Err(ConfigError::InvalidSchedule {
                reason: format!(
                    "beta + delta must not exceed 1.0, got {}",
                    s.beta + s.delta
                ),
            });
        }
        // 3. The cap must be finite and fit a u32 round counter. A delta
        //    small enough to round 1/(1-delta) to 1.0 fails here.
        if round_cap(self.budget, s.delta).is_none() {
            return Err(ConfigError::InvalidSchedule {
                reason: format!(
                    "delta {} gives no finite round cap for budget {}",
                    s.delta, self.budget
                ),
            });
        }
        // 4. The map must agree about where the station is.
        let station = self.environment.station();
        if self.environment.classify(station) != Some(CellKind::Station) {
            return Err(ConfigError::StationNotOnMap { station });
        }
        Ok(())
    }
}

impl fmt::Debug for CoverageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverageConfig")
            .field("width", &self.environment.width())
            .field("height", &self.environment.height())
            .field("station", &self.environment.station())
            .field("budget", &self.budget)
            .field("schedule", &self.schedule)
            .field("record_trace", &self.record_trace)
            .finish()
    }
}
