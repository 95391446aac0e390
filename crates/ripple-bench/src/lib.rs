//! Benchmark profiles for the Ripple wave-field simulator.
//!
//! - [`reference_profile`]: 200x150 grid (30K cells), the default window
//!   size, with a handful of sources and walls.
//! - [`stress_profile`]: 512x512 grid (~262K cells) with dense scatter.
//! - [`scatter`]: deterministic source and wall placement via seed.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ripple_core::{Command, GridCoord};
use ripple_engine::{ConfigError, WaveWorld, WorldConfig};

/// Build a reference world: 200x150 cells, 4 sources, 6 walls.
pub fn reference_profile(seed: u64) -> Result<WaveWorld, ConfigError> {
    let mut world = WaveWorld::new(WorldConfig::new(200, 150))?;
    for cmd in scatter(200, 150, 4, 6, seed) {
        world.apply(cmd)?;
    }
    Ok(world)
}

/// Build a stress world: 512x512 cells, 32 sources, 40 walls.
pub fn stress_profile(seed: u64) -> Result<WaveWorld, ConfigError> {
    let mut world = WaveWorld::new(WorldConfig::new(512, 512))?;
    for cmd in scatter(512, 512, 32, 40, seed) {
        world.apply(cmd)?;
    }
    Ok(world)
}

/// Deterministic `AddSource` and `DrawWall` commands for an `nx x ny` grid.
///
/// Sources land on interior cells; wall endpoints may fall up to 8 cells
/// off-grid, the same as a drag that leaves the window. Identical seeds
/// give identical commands.
pub fn scatter(nx: i32, ny: i32, sources: usize, walls: usize, seed: u64) -> Vec<Command> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cmds = Vec::with_capacity(sources + walls);
    for _ in 0..sources {
        let x = rng.random_range(1..(nx - 1).max(2));
        let y = rng.random_range(1..(ny - 1).max(2));
        cmds.push(Command::AddSource(GridCoord::new(x, y)));
    }
    for _ in 0..walls {
        let mut point = || GridCoord::new(rng.random_range(-8..nx + 8), rng.random_range(-8..ny + 8));
        let start = point();
        let end = point();
        cmds.push(Command::DrawWall { start, end });
    }
    cmds
}
