//! Single-threaded simulation world.
//!
//! [`WaveWorld`] owns everything a simulation needs: the grid state, the
//! source registry, the wave parameters, the integrator and a tick clock.
//!
//! # Ownership model
//!
//! All mutators take `&mut self` and [`snapshot()`](WaveWorld::snapshot)
//! borrows `&self`, so the borrow checker serializes input with stepping
//! and rendering: a wall cannot be drawn halfway through a step, and a
//! snapshot cannot be held across one. Input that arrives on other threads
//! goes through an [`IngressQueue`] and is applied by
//! [`frame()`](WaveWorld::frame) before the step.

use std::time::Instant;

use ripple_arena::{GridState, Snapshot};
use ripple_core::{Command, DriveConfig, GridCoord, GridError, SourceRegistry, TickId, WaveParams};
use ripple_propagators::{field_energy, first_non_finite, peak_amplitude, WaveIntegrator};
use ripple_space::Grid2D;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, WorldConfig};
use crate::ingress::IngressQueue;
use crate::metrics::StepMetrics;

// Compile-time assertion: the world can be moved onto a tick thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<WaveWorld>();
    }
};

/// A wave-field simulation.
///
/// # Examples
///
/// ```
/// use ripple_core::GridCoord;
/// use ripple_engine::{WaveWorld, WorldConfig};
///
/// let mut world = WaveWorld::new(WorldConfig::new(64, 64)).unwrap();
/// world.add_source(32, 32);
/// world.draw_wall(GridCoord::new(10, 5), GridCoord::new(10, 58));
///
/// for _ in 0..100 {
///     world.tick();
/// }
/// assert_eq!(world.current_tick().0, 100);
/// assert!(world.snapshot().current().iter().any(|&a| a != 0.0));
/// ```
#[derive(Debug)]
pub struct WaveWorld {
    state: GridState,
    sources: SourceRegistry,
    params: WaveParams,
    drive: DriveConfig,
    integrator: WaveIntegrator,
    tick: TickId,
    clock: f64,
    diagnostics: bool,
    non_finite_reported: bool,
    max_ingress_queue: usize,
    metrics: StepMetrics,
}

impl WaveWorld {
    /// Validate `config` and allocate a zeroed world.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        info!(
            nx = grid.nx(),
            ny = grid.ny(),
            wave_speed = config.params.wave_speed,
            damping = config.params.damping,
            "wave world created"
        );
        Ok(Self {
            state: GridState::with_grid(grid),
            sources: SourceRegistry::new(),
            params: config.params,
            drive: config.drive,
            integrator: WaveIntegrator::new(),
            tick: TickId(0),
            clock: 0.0,
            diagnostics: config.diagnostics,
            non_finite_reported: false,
            max_ingress_queue: config.max_ingress_queue,
            metrics: StepMetrics::default(),
        })
    }

    /// A queue sized by this world's configuration.
    pub fn ingress_queue(&self) -> Result<IngressQueue, ConfigError> {
        IngressQueue::new(self.max_ingress_queue)
    }

    // ── Grid lifecycle ──────────────────────────────────────────

    /// Reallocate the grid at `nx x ny`, discarding field and wall data.
    ///
    /// Sources, parameters and the tick clock are kept. On error nothing
    /// changes.
    pub fn initialize(&mut self, nx: i32, ny: i32) -> Result<(), GridError> {
        self.state.resize(nx, ny)?;
        self.non_finite_reported = false;
        Ok(())
    }

    /// Same as [`initialize`](WaveWorld::initialize): resizing never
    /// resamples the old field.
    pub fn resize(&mut self, nx: i32, ny: i32) -> Result<(), GridError> {
        self.initialize(nx, ny)
    }

    /// Zero the field, keeping walls and sources.
    pub fn reset_field(&mut self) {
        self.state.reset_field();
        self.non_finite_reported = false;
        debug!(tick = self.tick.0, "field reset");
    }

    // ── Sources and walls ───────────────────────────────────────

    /// Append a source. Off-grid and border positions are accepted and
    /// never inject.
    pub fn add_source(&mut self, x: i32, y: i32) {
        self.sources.add(x, y);
    }

    /// Remove every source.
    pub fn clear_sources(&mut self) {
        debug!(count = self.sources.len(), "sources cleared");
        self.sources.clear();
    }

    /// Draw a wall segment; returns the number of newly marked cells.
    pub fn draw_wall(&mut self, start: GridCoord, end: GridCoord) -> usize {
        self.state.draw_wall(start, end)
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        debug!(count = self.state.walls().count(), "walls cleared");
        self.state.clear_walls();
    }

    // ── Parameters ──────────────────────────────────────────────

    /// Set the Courant number. Not validated.
    pub fn set_wave_speed(&mut self, wave_speed: f32) {
        self.params.wave_speed = wave_speed;
    }

    /// Set the per-step damping fraction. Not validated.
    pub fn set_damping(&mut self, damping: f32) {
        self.params.damping = damping;
    }

    // ── Commands ────────────────────────────────────────────────

    /// Execute one command.
    ///
    /// Only [`Command::Resize`] can fail.
    pub fn apply(&mut self, cmd: Command) -> Result<(), GridError> {
        match cmd {
            Command::AddSource(c) => self.add_source(c.x, c.y),
            Command::ClearSources => self.clear_sources(),
            Command::DrawWall { start, end } => {
                self.draw_wall(start, end);
            }
            Command::ClearWalls => self.clear_walls(),
            Command::SetWaveSpeed(v) => self.set_wave_speed(v),
            Command::SetDamping(v) => self.set_damping(v),
            Command::Resize { nx, ny } => self.resize(nx, ny)?,
            Command::ResetField => self.reset_field(),
        }
        Ok(())
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Advance one tick with an explicit driving time.
    pub fn step(&mut self, time: f64) -> &StepMetrics {
        self.metrics = StepMetrics::default();
        self.advance(time, Instant::now());
        &self.metrics
    }

    /// Advance one tick on the internal clock.
    ///
    /// The clock moves forward by `drive.tick_duration` first, so the
    /// `n`-th tick is driven at time `n * tick_duration`.
    pub fn tick(&mut self) -> &StepMetrics {
        self.clock += self.drive.tick_duration;
        self.step(self.clock)
    }

    /// Apply every queued command, then [`tick`](WaveWorld::tick).
    pub fn frame(&mut self, queue: &mut IngressQueue) -> &StepMetrics {
        self.clock += self.drive.tick_duration;
        self.frame_at(queue, self.clock)
    }

    /// Apply every queued command, then [`step`](WaveWorld::step) at
    /// `time`.
    ///
    /// A command that fails (a resize to bad dimensions) is logged and
    /// skipped; the rest of the batch still applies.
    pub fn frame_at(&mut self, queue: &mut IngressQueue, time: f64) -> &StepMetrics {
        let start = Instant::now();
        let batch = queue.drain();
        let mut applied = 0;
        let mut rejected = 0;
        for cmd in batch {
            match self.apply(cmd) {
                Ok(()) => applied += 1,
                Err(e) => {
                    warn!(command = ?cmd, error = %e, "command rejected");
                    rejected += 1;
                }
            }
        }
        let command_processing_us = start.elapsed().as_micros() as u64;

        self.metrics = StepMetrics {
            commands_applied: applied,
            commands_rejected: rejected,
            command_processing_us,
            ..StepMetrics::default()
        };
        self.advance(time, start);
        &self.metrics
    }

    fn advance(&mut self, time: f64, start: Instant) {
        let integrate_start = Instant::now();
        let report = self.integrator.step(
            &mut self.state,
            &self.sources,
            &self.params,
            &self.drive,
            time,
        );
        let integrate_us = integrate_start.elapsed().as_micros() as u64;
        self.tick = TickId(self.tick.0 + 1);

        let m = &mut self.metrics;
        m.tick = self.tick;
        m.time = time;
        m.integrate_us = integrate_us;
        m.updated_cells = report.updated_cells;
        m.pinned_cells = report.pinned_cells;
        m.injected_terms = report.injected_terms;
        m.signal = report.signal;

        if self.diagnostics {
            let current = self.state.ring().current();
            m.field_energy = Some(field_energy(current));
            m.peak_amplitude = Some(peak_amplitude(current));
            m.non_finite_cell = first_non_finite(current);
            if let Some(idx) = m.non_finite_cell {
                if !self.non_finite_reported {
                    let coord = self.state.grid().coord_of(idx);
                    warn!(
                        tick = self.tick.0,
                        cell = %coord,
                        wave_speed = self.params.wave_speed,
                        "non-finite amplitude; the field has diverged"
                    );
                    self.non_finite_reported = true;
                }
            }
        }
        m.total_us = start.elapsed().as_micros() as u64;
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Read-only view of the present field and walls.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    /// Grid dimensions.
    pub fn grid(&self) -> Grid2D {
        self.state.grid()
    }

    /// Ticks completed since creation.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Time value of the internal clock.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Current wave parameters.
    pub fn params(&self) -> WaveParams {
        self.params
    }

    /// Driving signal shape.
    pub fn drive(&self) -> DriveConfig {
        self.drive
    }

    /// Active sources in insertion order.
    pub fn sources(&self) -> &SourceRegistry {
        &self.sources
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.state.walls().count()
    }

    /// Metrics of the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.metrics
    }
}
