//! Round scheduler: geometric contour bounds.
//!
//! For budget `B` and [`ScheduleParams`] `(β, δ)`, round `i` computes
//!
//! ```text
//! Dcurr  = floor(B − (1−δ)^(i−1) · B)
//! Dnext  = floor(B − (1−δ)^i · B)
//! Bcurr  = B − Dcurr
//! Bcurr_ = ceil((β+δ) · Bcurr)
//! Dcurr_ = B − Bcurr_
//! ```
//!
//! The round's contour is `[Dcurr, Dcurr_]`. After the round, nodes at
//! exactly `Dnext` become the next launch roots. The number of rounds is
//! capped once, up front, at `ceil(log_{1/(1−δ)}(B/2 − 1))`, floored at 0.

use crate::config::{ConfigError, ScheduleParams};

/// Inclusive band of discovery distances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contour {
    /// Lower bound (`Dcurr`).
    pub min: u32,
    /// Upper bound (`Dcurr_`).
    pub max: u32,
}

impl Contour {
    /// Whether `distance` lies in `[min, max]`.
    pub fn contains(&self, distance: u32) -> bool {
        distance >= self.min && distance <= self.max
    }

    /// Whether the band contains no distance at all.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// The derived values for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundBounds {
    /// Round index, starting at 1.
    pub round: u32,
    /// `Dcurr`: inner edge of the contour.
    pub d_curr: u32,
    /// `Dnext`: distance at which the next round's roots are harvested.
    pub d_next: u32,
    /// `Bcurr = B − Dcurr`.
    pub b_curr: u32,
    /// `Bcurr_ = ceil((β+δ) · Bcurr)`.
    pub b_curr_max: u32,
    /// `Dcurr_ = B − Bcurr_`: outer edge of the contour.
    pub d_curr_max: u32,
}

impl RoundBounds {
    /// The active contour `[Dcurr, Dcurr_]`.
    pub fn contour(&self) -> Contour {
        Contour {
            min: self.d_curr,
            max: self.d_curr_max,
        }
    }
}

/// Computes per-round bounds for a fixed budget.
#[derive(Clone, Debug)]
pub struct RoundScheduler {
    budget: u32,
    params: ScheduleParams,
    round_cap: u32,
}

impl RoundScheduler {
    /// Create a scheduler. The round cap is computed here, once.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSchedule`] if `params.delta` yields no finite
    /// round cap for `budget` (see [`round_cap`]).
    pub fn new(budget: u32, params: ScheduleParams) -> Result<Self, ConfigError> {
        let round_cap =
            round_cap(budget, params.delta).ok_or_else(|| ConfigError::InvalidSchedule {
                reason: format!(
                    "delta {} gives no finite round cap for budget {budget}",
                    params.delta
                ),
            })?;
        Ok(Self {
            budget,
            params,
            round_cap,
        })
    }

    /// The energy budget `B`.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Schedule constants.
    pub fn params(&self) -> ScheduleParams {
        self.params
    }

    /// Hard upper bound on the number of rounds.
    pub fn round_cap(&self) -> u32 {
        self.round_cap
    }

    /// Bounds for round `round` (1-based).
    pub fn bounds(&self, round: u32) -> RoundBounds {
        let b = self.budget;
        let bf = f64::from(b);
        let decay = 1.0 - self.params.delta;

        let d_curr = to_bounded(bf - decay.powf(f64::from(round.saturating_sub(1))) * bf, b);
        let d_next = to_bounded(bf - decay.powf(f64::from(round)) * bf, b);
        let b_curr = b - d_curr;
        let b_curr_max =
            to_bounded(((self.params.beta + self.params.delta) * f64::from(b_curr)).ceil(), b);
        let d_curr_max = b - b_curr_max;

        RoundBounds {
            round,
            d_curr,
            d_next,
            b_curr,
            b_curr_max,
            d_curr_max,
        }
    }

    /// Bounds for every round `1..=round_cap`, in order.
    pub fn rounds(&self) -> impl Iterator<Item = RoundBounds> + '_ {
        (1..=self.round_cap).map(|i| self.bounds(i))
    }
}

/// Floor `value` and clamp it into `[0, max]`.
fn to_bounded(value: f64, max: u32) -> u32 {
    let v = value.floor();
    if v <= 0.0 {
        0
    } else if v >= f64::from(max) {
        max
    } else {
        v as u32
    }
}

/// `max(0, ceil(log_{1/(1−δ)}(B/2 − 1)))`.
///
/// For `B <= 4` the logarithm's argument is at most 1, so no round runs
/// (`B = 2` leaves the logarithm undefined and is also 0).
///
/// Returns `None` when `1/(1−δ)` is not strictly above 1 after rounding,
/// or when the cap is not finite or does not fit below `u32::MAX`.
pub fn round_cap(budget: u32, delta: f64) -> Option<u32> {
    let log_base = (1.0 / (1.0 - delta)).ln();
    if !(log_base.is_finite() && log_base > 0.0) {
        return None;
    }
    let x = f64::from(budget) / 2.0 - 1.0;
    if x <= 0.0 {
        return Some(0);
    }
    let cap = (x.ln() / log_base).ceil();
    if !cap.is_finite() || cap >= f64::from(u32::MAX) {
        None
    } else if cap <= 0.0 {
        Some(0)
    } else {
        Some(cap as u32)
    }
}
