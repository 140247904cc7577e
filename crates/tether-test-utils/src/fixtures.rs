//! Shared test maps.
//!
//! - [`reference_environment`]: 4 wide, 5 tall, station at the origin,
//!   a 2x2 obstacle block in the middle rows.
//! - [`walled_station`]: station boxed in by obstacles.
//! - [`open_field`]: no obstacles.
//! - [`corridor`]: one row.
//! - [`scattered_obstacles`]: deterministic pseudo-random obstacles.

use tether_core::CellPos;
use tether_space::GridEnvironment;

fn p(r: i32, c: i32) -> CellPos {
    CellPos::new(r, c)
}

/// The 4x5 reference map.
///
/// ```text
///   c0 c1 c2 c3
/// r0 S  .  .  .
/// r1 .  .  .  .
/// r2 .  #  #  .
/// r3 .  #  #  .
/// r4 .  .  .  .
/// ```
pub fn reference_environment() -> GridEnvironment {
    build(4, 5, p(0, 0), &reference_obstacles())
}

/// Obstacles of [`reference_environment`].
pub fn reference_obstacles() -> Vec<CellPos> {
    vec![p(2, 1), p(3, 1), p(2, 2), p(3, 2)]
}

/// 3x3 map whose centre station has obstacles on all four sides.
pub fn walled_station() -> GridEnvironment {
    build(3, 3, p(1, 1), &[p(0, 1), p(1, 0), p(1, 2), p(2, 1)])
}

/// Obstacle-free `width` x `height` map with the station at `station`.
pub fn open_field(width: u32, height: u32, station: CellPos) -> GridEnvironment {
    build(width, height, station, &[])
}

/// Single-row map of `length` cells with the station at column 0.
pub fn corridor(length: u32) -> GridEnvironment {
    build(length, 1, p(0, 0), &[])
}

/// `width` x `height` map with roughly `percent`% of cells blocked.
///
/// Deterministic in `seed`. The station sits at the origin and is never
/// blocked. Obstacles may cut off parts of the map; pair with
/// [`reachable_free_cells`](crate::reachable_free_cells) for coverage
/// checks.
pub fn scattered_obstacles(width: u32, height: u32, percent: u32, seed: u64) -> GridEnvironment {
    let mut obstacles = Vec::new();
    for row in 0..height as i32 {
        for col in 0..width as i32 {
            if row == 0 && col == 0 {
                continue;
            }
            let cell = (row as u64) * u64::from(width) + col as u64;
            let h = cell
                .wrapping_add(seed)
                .wrapping_mul(0x9E37_79B9_7F4A_7C15)
                .rotate_right(29)
                .wrapping_mul(0xBF58_476D_1CE4_E5B9);
            if (h >> 32) % 100 < u64::from(percent) {
                obstacles.push(p(row, col));
            }
        }
    }
    build(width, height, p(0, 0), &obstacles)
}

fn build(width: u32, height: u32, station: CellPos, obstacles: &[CellPos]) -> GridEnvironment {
    GridEnvironment::new(width, height, station, obstacles)
        .unwrap_or_else(|e| panic!("invalid fixture map: {e}"))
}
