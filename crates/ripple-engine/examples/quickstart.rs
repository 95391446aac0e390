//! Drive a small world by hand, then run it on the realtime thread.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p ripple-engine --example quickstart
//! ```

use std::time::Duration;

use ripple_core::{Command, GridCoord, WaveParams};
use ripple_engine::{RealtimeConfig, RealtimeWorld, WaveWorld, WorldConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Lockstep: two sources behind a slit wall.
    let config = WorldConfig::new(160, 120)
        .with_params(WaveParams::new(0.5, 0.002))
        .with_diagnostics(true);
    let mut world = WaveWorld::new(config)?;
    world.add_source(30, 50);
    world.add_source(30, 70);
    world.draw_wall(GridCoord::new(80, 0), GridCoord::new(80, 55));
    world.draw_wall(GridCoord::new(80, 65), GridCoord::new(80, 119));

    for _ in 0..300 {
        world.tick();
    }
    let m = world.last_metrics();
    info!(
        tick = m.tick.0,
        energy = m.field_energy.unwrap_or_default(),
        peak = m.peak_amplitude.unwrap_or_default(),
        "lockstep run finished"
    );

    // Realtime: hand the same world to the tick thread and keep drawing.
    let mut rt = RealtimeWorld::spawn(world, RealtimeConfig::default())?;
    rt.send(Command::DrawWall {
        start: GridCoord::new(120, 20),
        end: GridCoord::new(140, 100),
    })?;
    let mut frames = 0;
    while frames < 60 {
        match rt.recv_frame_timeout(Duration::from_secs(1)) {
            Some(frame) => {
                frames += 1;
                if frames % 20 == 0 {
                    info!(tick = frame.tick.0, bytes = frame.pixels.len(), "frame");
                }
            }
            None => break,
        }
    }
    if let Some(world) = rt.shutdown() {
        info!(
            tick = world.current_tick().0,
            walls = world.wall_count(),
            "realtime run finished"
        );
    }
    Ok(())
}
