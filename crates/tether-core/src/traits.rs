//! The [`Environment`] trait: the read-only map the agent explores.

use smallvec::SmallVec;

use crate::cell::CellKind;
use crate::id::{CellPos, Direction};

/// Static map of a bounded rectangular area.
///
/// Implementations are immutable after construction, so `&dyn
/// Environment` may be shared freely. The agent's position is not
/// environment state; the explorer owns it.
///
/// # Thread Safety
///
/// `Sync` is required so a map can be analysed from several threads;
/// movement itself is strictly sequential.
pub trait Environment: Send + Sync {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// The charging station position.
    fn station(&self) -> CellPos;

    /// Classification of `pos`, or `None` outside the rectangle.
    fn classify(&self, pos: CellPos) -> Option<CellKind>;

    /// Whether `pos` lies inside the rectangle.
    fn contains(&self, pos: CellPos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as u32) < self.height()
            && (pos.col as u32) < self.width()
    }

    /// Adjacent [`CellKind::Empty`] cells of `pos`, in
    /// [`Direction::PROBE_ORDER`].
    ///
    /// The station and obstacles are never returned, nor are cells
    /// outside the rectangle.
    fn free_neighbours(&self, pos: CellPos) -> SmallVec<[CellPos; 4]> {
        Direction::PROBE_ORDER
            .iter()
            .map(|&d| pos.offset(d))
            .filter(|&nb| self.classify(nb) == Some(CellKind::Empty))
            .collect()
    }

    /// Every [`CellKind::Empty`] cell in row-major order.
    fn free_cells(&self) -> Vec<CellPos> {
        let mut cells = Vec::new();
        for row in 0..self.height() as i32 {
            for col in 0..self.width() as i32 {
                let pos = CellPos::new(row, col);
                if self.classify(pos) == Some(CellKind::Empty) {
                    cells.push(pos);
                }
            }
        }
        cells
    }
}
