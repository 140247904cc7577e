//! The [`Scenario`] type and its conversions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tether_core::CellPos;
use tether_engine::{CoverageConfig, ScheduleParams};
use tether_space::GridEnvironment;

use crate::error::ScenarioError;
use crate::legacy;

/// Optional `[schedule]` table of a scenario file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleSection {
    /// Exploration fraction `β`.
    pub beta: f64,
    /// Decay rate `δ`.
    pub delta: f64,
}

impl Default for ScheduleSection {
    fn default() -> Self {
        let p = ScheduleParams::default();
        Self {
            beta: p.beta,
            delta: p.delta,
        }
    }
}

impl From<ScheduleSection> for ScheduleParams {
    fn from(s: ScheduleSection) -> Self {
        ScheduleParams {
            beta: s.beta,
            delta: s.delta,
        }
    }
}

/// A coverage problem: map, station, obstacles and budget.
///
/// Positions are `[row, col]`.
///
/// ```toml
/// width = 4
/// height = 5
/// budget = 20
/// station = [0, 0]
/// obstacles = [[2, 1], [3, 1], [2, 2], [3, 2]]
///
/// [schedule]
/// beta = 0.75
/// delta = 0.10
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Energy budget `B`.
    pub budget: u32,
    /// Charging station.
    pub station: [i32; 2],
    /// Obstacle cells.
    #[serde(default)]
    pub obstacles: Vec<[i32; 2]>,
    /// Contour schedule constants.
    #[serde(default)]
    pub schedule: ScheduleSection,
}

impl Scenario {
    /// Parse TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(text)?)
    }

    /// Serialise to TOML text.
    pub fn to_toml_string(&self) -> Result<String, ScenarioError> {
        Ok(toml::to_string(self)?)
    }

    /// Parse the legacy three-line text format.
    pub fn from_legacy_str(text: &str) -> Result<Self, ScenarioError> {
        legacy::parse(text)
    }

    /// Render in the legacy three-line text format.
    pub fn to_legacy_string(&self) -> String {
        legacy::render(self)
    }

    /// Load a scenario file: `.toml` files as TOML, anything else as the
    /// legacy text format.
    ///
    /// # Example
    /// ```no_run
    /// use tether_scenario::Scenario;
    ///
    /// let scenario = Scenario::load("maps/reference.toml")?;
    /// let config = scenario.into_config(false)?;
    /// # Ok::<(), tether_scenario::ScenarioError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&text),
            _ => Self::from_legacy_str(&text),
        }
    }

    /// Station as a [`CellPos`].
    pub fn station_pos(&self) -> CellPos {
        CellPos::new(self.station[0], self.station[1])
    }

    /// Obstacles as [`CellPos`] values, in file order.
    pub fn obstacle_positions(&self) -> Vec<CellPos> {
        self.obstacles
            .iter()
            .map(|&[r, c]| CellPos::new(r, c))
            .collect()
    }

    /// Build the grid.
    pub fn into_environment(self) -> Result<GridEnvironment, ScenarioError> {
        Ok(GridEnvironment::new(
            self.width,
            self.height,
            self.station_pos(),
            &self.obstacle_positions(),
        )?)
    }

    /// Build and validate a run configuration.
    pub fn into_config(self, record_trace: bool) -> Result<CoverageConfig, ScenarioError> {
        let budget = self.budget;
        let schedule = self.schedule.into();
        let mut config = CoverageConfig::new(Box::new(self.into_environment()?), budget);
        config.schedule = schedule;
        config.record_trace = record_trace;
        config.validate()?;
        Ok(config)
    }
}
