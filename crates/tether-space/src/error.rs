//! Error types for environment construction.

use std::fmt;
use tether_core::CellPos;

/// Errors arising from [`GridEnvironment`](crate::GridEnvironment) construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Width or height is zero.
    EmptyGrid,
    /// A dimension does not fit in an `i32` coordinate.
    DimensionTooLarge {
        /// Which dimension ("width" or "height").
        name: &'static str,
        /// The offending value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// The station lies outside the rectangle.
    StationOutOfBounds {
        /// The station position.
        station: CellPos,
    },
    /// The station is listed as an obstacle.
    StationIsObstacle {
        /// The station position.
        station: CellPos,
    },
    /// An obstacle lies outside the rectangle.
    ObstacleOutOfBounds {
        /// The offending obstacle.
        pos: CellPos,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::StationOutOfBounds { station } => {
                write!(f, "station {station} is outside the grid")
            }
            Self::StationIsObstacle { station } => {
                write!(f, "station {station} is listed as an obstacle")
            }
            Self::ObstacleOutOfBounds { pos } => {
                write!(f, "obstacle {pos} is outside the grid")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
