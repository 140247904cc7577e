//! Static cell classification.

use std::fmt;

/// Classification of a single grid cell.
///
/// Fixed at environment construction; the agent never changes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Free cell the agent may enter.
    Empty,
    /// The charging station. Exactly one per environment.
    Station,
    /// Blocked cell.
    Obstacle,
}

impl CellKind {
    /// Whether the agent may stand on this cell.
    pub fn is_traversable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }

    /// Single-character glyph used by console renderers.
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Station => 'S',
            Self::Obstacle => '#',
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "EMPTY"),
            Self::Station => write!(f, "STATION"),
            Self::Obstacle => write!(f, "OBSTACLE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_obstacles_block() {
        assert!(CellKind::Empty.is_traversable());
        assert!(CellKind::Station.is_traversable());
        assert!(!CellKind::Obstacle.is_traversable());
    }

    #[test]
    fn display_matches_map_legend() {
        assert_eq!(CellKind::Station.to_string(), "STATION");
        assert_eq!(CellKind::Obstacle.glyph(), '#');
    }
}
