//! Rectangular grid map with one charging station.

use indexmap::IndexSet;
use tether_core::{CellKind, CellPos, Environment};

use crate::error::SpaceError;

/// A `width × height` grid of [`CellKind`] cells.
///
/// Each cell has position `(row, col)` with `0 <= row < height` and
/// `0 <= col < width`. Exactly one cell is the station; the station is
/// never an obstacle. Neighbourhood is 4-connected with absorbing
/// edges: border cells simply have fewer neighbours.
///
/// Storage is a dense row-major `Vec<CellKind>`, so classification is
/// O(1). The obstacle list is kept (deduplicated, in input order) for
/// scenario export and rendering.
#[derive(Debug, Clone)]
pub struct GridEnvironment {
    width: u32,
    height: u32,
    station: CellPos,
    cells: Vec<CellKind>,
    obstacles: IndexSet<CellPos>,
}

impl GridEnvironment {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Build a grid from its dimensions, station and obstacle list.
    ///
    /// Duplicate obstacles are accepted and collapsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_core::{CellKind, CellPos, Environment};
    /// use tether_space::GridEnvironment;
    ///
    /// let env = GridEnvironment::new(4, 5, CellPos::new(0, 0), &[CellPos::new(2, 1)]).unwrap();
    /// assert_eq!(env.classify(CellPos::new(0, 0)), Some(CellKind::Station));
    /// assert_eq!(env.classify(CellPos::new(2, 1)), Some(CellKind::Obstacle));
    /// assert_eq!(env.classify(CellPos::new(5, 0)), None);
    /// ```
    pub fn new(
        width: u32,
        height: u32,
        station: CellPos,
        obstacles: &[CellPos],
    ) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        if !in_bounds(station, width, height) {
            return Err(SpaceError::StationOutOfBounds { station });
        }

        let mut cells = vec![CellKind::Empty; width as usize * height as usize];
        let mut set = IndexSet::with_capacity(obstacles.len());
        for &pos in obstacles {
            if pos == station {
                return Err(SpaceError::StationIsObstacle { station });
            }
            if !in_bounds(pos, width, height) {
                return Err(SpaceError::ObstacleOutOfBounds { pos });
            }
            cells[flat(pos, width)] = CellKind::Obstacle;
            set.insert(pos);
        }
        cells[flat(station, width)] = CellKind::Station;

        Ok(Self {
            width,
            height,
            station,
            cells,
            obstacles: set,
        })
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of distinct obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Number of EMPTY cells (everything except station and obstacles).
    pub fn free_cell_count(&self) -> usize {
        self.cells.len() - self.obstacles.len() - 1
    }

    /// Obstacles, deduplicated, in the order they were given.
    pub fn obstacles(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.obstacles.iter().copied()
    }
}

impl Environment for GridEnvironment {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn station(&self) -> CellPos {
        self.station
    }

    fn classify(&self, pos: CellPos) -> Option<CellKind> {
        if in_bounds(pos, self.width, self.height) {
            Some(self.cells[flat(pos, self.width)])
        } else {
            None
        }
    }
}

fn in_bounds(pos: CellPos, width: u32, height: u32) -> bool {
    pos.row >= 0 && pos.col >= 0 && (pos.row as u32) < height && (pos.col as u32) < width
}

/// Row-major index. Caller guarantees `pos` is in bounds.
fn flat(pos: CellPos, width: u32) -> usize {
    pos.row as usize * width as usize + pos.col as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn p(r: i32, c: i32) -> CellPos {
        CellPos::new(r, c)
    }

    fn reference() -> GridEnvironment {
        GridEnvironment::new(4, 5, p(0, 0), &[p(2, 1), p(3, 1), p(2, 2), p(3, 2)]).unwrap()
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn free_neighbours_interior_probe_order() {
        let env = GridEnvironment::new(5, 5, p(0, 0), &[]).unwrap();
        let n = env.free_neighbours(p(2, 2));
        assert_eq!(n.as_slice(), &[p(2, 3), p(3, 2), p(2, 1), p(1, 2)]);
    }

    #[test]
    fn free_neighbours_corner_absorbs() {
        let env = GridEnvironment::new(5, 5, p(2, 2), &[]).unwrap();
        let n = env.free_neighbours(p(4, 4));
        assert_eq!(n.as_slice(), &[p(4, 3), p(3, 4)]);
    }

    #[test]
    fn free_neighbours_skip_station_and_obstacles() {
        let env = reference();
        // (1,1): east (1,2) free, south (2,1) blocked, west (1,0) free, north (0,1) free.
        assert_eq!(
            env.free_neighbours(p(1, 1)).as_slice(),
            &[p(1, 2), p(1, 0), p(0, 1)]
        );
        // (0,1): west is the station.
        assert_eq!(env.free_neighbours(p(0, 1)).as_slice(), &[p(0, 2), p(1, 1)]);
    }

    #[test]
    fn station_neighbours_of_reference_map() {
        let env = reference();
        assert_eq!(env.free_neighbours(p(0, 0)).as_slice(), &[p(0, 1), p(1, 0)]);
    }

    // ── Classification tests ────────────────────────────────────

    #[test]
    fn classify_reference_map() {
        let env = reference();
        assert_eq!(env.classify(p(0, 0)), Some(CellKind::Station));
        assert_eq!(env.classify(p(3, 2)), Some(CellKind::Obstacle));
        assert_eq!(env.classify(p(4, 3)), Some(CellKind::Empty));
        assert_eq!(env.classify(p(4, 4)), None);
        assert_eq!(env.classify(p(-1, 0)), None);
        assert_eq!(env.free_cell_count(), 15);
        assert_eq!(env.free_cells().len(), 15);
    }

    #[test]
    fn duplicate_obstacles_collapse() {
        let env = GridEnvironment::new(3, 3, p(0, 0), &[p(1, 1), p(1, 1), p(2, 2)]).unwrap();
        assert_eq!(env.obstacle_count(), 2);
        assert_eq!(env.obstacles().collect::<Vec<_>>(), vec![p(1, 1), p(2, 2)]);
        assert_eq!(env.free_cell_count(), 6);
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_dims_returns_error() {
        assert_eq!(
            GridEnvironment::new(0, 5, p(0, 0), &[]).unwrap_err(),
            SpaceError::EmptyGrid
        );
        assert_eq!(
            GridEnvironment::new(5, 0, p(0, 0), &[]).unwrap_err(),
            SpaceError::EmptyGrid
        );
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            GridEnvironment::new(big, 1, p(0, 0), &[]),
            Err(SpaceError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            GridEnvironment::new(1, big, p(0, 0), &[]),
            Err(SpaceError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn new_rejects_station_problems() {
        assert_eq!(
            GridEnvironment::new(3, 3, p(3, 0), &[]).unwrap_err(),
            SpaceError::StationOutOfBounds { station: p(3, 0) }
        );
        assert_eq!(
            GridEnvironment::new(3, 3, p(1, 1), &[p(0, 0), p(1, 1)]).unwrap_err(),
            SpaceError::StationIsObstacle { station: p(1, 1) }
        );
    }

    #[test]
    fn new_rejects_obstacle_out_of_bounds() {
        assert_eq!(
            GridEnvironment::new(3, 3, p(0, 0), &[p(0, 3)]).unwrap_err(),
            SpaceError::ObstacleOutOfBounds { pos: p(0, 3) }
        );
    }

    // ── 1×1 edge case ──────────────────────────────────────────

    #[test]
    fn single_cell_is_station_only() {
        let env = GridEnvironment::new(1, 1, p(0, 0), &[]).unwrap();
        assert!(env.free_neighbours(p(0, 0)).is_empty());
        assert_eq!(env.free_cell_count(), 0);
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_open_field() {
        let env = GridEnvironment::new(7, 6, p(3, 3), &[]).unwrap();
        compliance::run_full_compliance(&env);
    }

    #[test]
    fn compliance_reference_map() {
        compliance::run_full_compliance(&reference());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn free_neighbours_symmetric_between_empty_cells(
            width in 1u32..9,
            height in 1u32..9,
            mask in proptest::collection::vec(any::<bool>(), 64),
        ) {
            let station = p(0, 0);
            let obstacles: Vec<CellPos> = (0..height as i32)
                .flat_map(|r| (0..width as i32).map(move |c| p(r, c)))
                .filter(|&pos| pos != station && mask[(pos.row * 8 + pos.col) as usize])
                .collect();
            let env = GridEnvironment::new(width, height, station, &obstacles).unwrap();
            compliance::assert_free_neighbours_symmetric(&env);
            compliance::assert_free_neighbours_bounded(&env);
        }
    }
}
