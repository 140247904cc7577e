//! Benchmark profiles for the Tether coverage planner.
//!
//! Provides pre-built [`CoverageConfig`] profiles:
//!
//! - [`reference_profile`]: 64x64 grid, ~15% obstacles, budget large
//!   enough for full coverage
//! - [`stress_profile`]: 200x200 grid, same density
//! - [`obstacle_field`]: deterministic obstacle placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tether_core::CellPos;
use tether_engine::CoverageConfig;
use tether_space::{GridEnvironment, SpaceError};

/// Obstacle density of the standard profiles, in percent.
pub const OBSTACLE_PERCENT: u32 = 15;

/// 64x64 grid with the station in the centre and budget `2·w·h + 2`.
pub fn reference_profile(seed: u64) -> Result<CoverageConfig, SpaceError> {
    square_profile(64, seed)
}

/// 200x200 grid, same layout rules as [`reference_profile`].
pub fn stress_profile(seed: u64) -> Result<CoverageConfig, SpaceError> {
    square_profile(200, seed)
}

fn square_profile(side: u32, seed: u64) -> Result<CoverageConfig, SpaceError> {
    let station = CellPos::new(side as i32 / 2, side as i32 / 2);
    let obstacles = obstacle_field(side, side, OBSTACLE_PERCENT, seed, station);
    let env = GridEnvironment::new(side, side, station, &obstacles)?;
    Ok(CoverageConfig::new(Box::new(env), 2 * side * side + 2))
}

/// Generate deterministic obstacle cells.
///
/// Each cell is blocked when a hash of its flat index and `seed` falls
/// under `percent`. `keep_free` is never blocked. Returns positions in
/// row-major order.
pub fn obstacle_field(
    width: u32,
    height: u32,
    percent: u32,
    seed: u64,
    keep_free: CellPos,
) -> Vec<CellPos> {
    let mut obstacles = Vec::new();
    for row in 0..height as i32 {
        for col in 0..width as i32 {
            let pos = CellPos::new(row, col);
            if pos == keep_free {
                continue;
            }
            let flat = row as u64 * u64::from(width) + col as u64;
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(flat.wrapping_mul(1442695040888963407));
            if (h >> 33) % 100 < u64::from(percent) {
                obstacles.push(pos);
            }
        }
    }
    obstacles
}
