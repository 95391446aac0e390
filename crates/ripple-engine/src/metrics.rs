//! Per-step metrics for the simulation engine.
//!
//! [`StepMetrics`] captures timing and integrator counters for a single
//! step. Field diagnostics are only filled in when the world was built
//! with [`WorldConfig::diagnostics`](crate::WorldConfig::diagnostics)
//! enabled, since they cost an extra pass over the grid.

use ripple_core::TickId;

/// Timing and counters collected during a single step.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Tick reached by this step.
    pub tick: TickId,
    /// Time value fed to the driving signal.
    pub time: f64,
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Time spent applying queued commands, in microseconds.
    pub command_processing_us: u64,
    /// Time spent in the stencil sweep and injection, in microseconds.
    pub integrate_us: u64,
    /// Commands applied before this step.
    pub commands_applied: usize,
    /// Commands drained but rejected (e.g. a resize to bad dimensions).
    pub commands_rejected: usize,
    /// Interior cells updated by the stencil.
    pub updated_cells: usize,
    /// Interior wall cells pinned to zero.
    pub pinned_cells: usize,
    /// Source terms injected.
    pub injected_terms: usize,
    /// Driving value added per source term.
    pub signal: f32,
    /// Sum of squared amplitudes after the step.
    pub field_energy: Option<f64>,
    /// Largest absolute amplitude after the step.
    pub peak_amplitude: Option<f32>,
    /// First cell holding NaN or infinity after the step.
    pub non_finite_cell: Option<usize>,
}
