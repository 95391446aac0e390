//! Second-order wave equation integrator.
//!
//! Explicit three-level scheme on the 5-point Laplacian:
//! ```text
//! lap[i]     = E + W + N + S - 4 * cur[i]          (wall neighbours read as 0)
//! scratch[i] = (2 * cur[i] - prev[i] + c² * lap[i]) * (1 - damping)
//! scratch[i] += sin(time / time_scale)             (once per source on i)
//! ```
//!
//! Only interior cells are updated; the one-cell border keeps whatever it
//! held, copied into the scratch buffer so rotation cannot change it. Wall
//! cells are pinned to zero in all three buffers and skip the stencil.
//! After the sweep the buffer roles rotate in O(1).
//!
//! There is no CFL guard: a wave speed too large for the grid diverges,
//! and NaN/Inf propagate like any other value.

use ripple_arena::{GridState, StepView};
use ripple_core::{DriveConfig, SourceRegistry, WaveParams};
use tracing::trace;

use crate::injection::InjectionPlan;

/// What a single step did, for metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Interior cells that went through the stencil.
    pub updated_cells: usize,
    /// Interior wall cells pinned to zero.
    pub pinned_cells: usize,
    /// Source terms added (co-located sources count individually).
    pub injected_terms: usize,
    /// Driving value added per source term this step.
    pub signal: f32,
}

/// Advances a [`GridState`] one tick at a time.
///
/// Keeps the compiled [`InjectionPlan`] between steps so steady-state
/// stepping does not allocate.
///
/// # Examples
///
/// ```
/// use ripple_arena::GridState;
/// use ripple_core::{DriveConfig, SourceRegistry, WaveParams};
/// use ripple_propagators::WaveIntegrator;
///
/// let mut state = GridState::new(16, 16).unwrap();
/// let mut sources = SourceRegistry::new();
/// sources.add(8, 8);
///
/// let mut integrator = WaveIntegrator::new();
/// let drive = DriveConfig::default();
/// for tick in 0..10 {
///     integrator.step(&mut state, &sources, &WaveParams::default(), &drive, tick as f64 * 16.0);
/// }
/// assert!(state.snapshot().current().iter().any(|&a| a != 0.0));
/// ```
#[derive(Debug, Default)]
pub struct WaveIntegrator {
    plan: InjectionPlan,
}

impl WaveIntegrator {
    /// Create an integrator with an empty injection plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance `state` by exactly one tick.
    ///
    /// `time` feeds the driving signal `drive.signal(time)`, evaluated once
    /// for the whole step.
    pub fn step(
        &mut self,
        state: &mut GridState,
        sources: &SourceRegistry,
        params: &WaveParams,
        drive: &DriveConfig,
        time: f64,
    ) -> StepReport {
        let signal = drive.signal(time);
        self.plan.rebuild(&state.grid(), sources);

        let plan = &self.plan;
        let report = state.integrate(|view| {
            let (updated_cells, pinned_cells) = sweep(view, params);
            let injected_terms = plan.apply(view.scratch, view.walls, signal);
            StepReport {
                updated_cells,
                pinned_cells,
                injected_terms,
                signal,
            }
        });

        trace!(
            updated = report.updated_cells,
            pinned = report.pinned_cells,
            injected = report.injected_terms,
            "wave step"
        );
        report
    }

    /// The injection plan compiled by the most recent step.
    pub fn plan(&self) -> &InjectionPlan {
        &self.plan
    }
}

/// Advance `state` by one tick with a throwaway integrator.
///
/// Convenience for one-off calls; loops should keep a [`WaveIntegrator`].
pub fn step(
    state: &mut GridState,
    sources: &SourceRegistry,
    params: &WaveParams,
    drive: &DriveConfig,
    time: f64,
) -> StepReport {
    WaveIntegrator::new().step(state, sources, params, drive, time)
}

/// Stencil pass over the interior. Returns `(updated, pinned)` counts.
fn sweep(view: &mut StepView<'_>, params: &WaveParams) -> (usize, usize) {
    let c2 = params.courant_squared();
    let keep = params.retention();
    let stride = view.grid.stride();
    let columns = view.grid.interior_columns();
    let walls = view.walls;
    let mut updated = 0;
    let mut pinned = 0;

    for y in view.grid.interior_rows() {
        let row = y * stride;
        for x in columns.clone() {
            let i = row + x;
            if walls[i] {
                view.current[i] = 0.0;
                view.previous[i] = 0.0;
                view.scratch[i] = 0.0;
                pinned += 1;
                continue;
            }

            let cur = view.current[i];
            let neighbour = |j: usize| if walls[j] { 0.0 } else { view.current[j] };
            let laplacian = neighbour(i + 1) + neighbour(i - 1) + neighbour(i + stride)
                + neighbour(i - stride)
                - 4.0 * cur;
            view.scratch[i] = (2.0 * cur - view.previous[i] + c2 * laplacian) * keep;
            updated += 1;
        }
    }
    // The border keeps its value through the rotation.
    let last_row = (view.grid.ny() as usize - 1) * stride;
    view.scratch[..stride].copy_from_slice(&view.current[..stride]);
    view.scratch[last_row..].copy_from_slice(&view.current[last_row..]);
    for y in view.grid.interior_rows() {
        let (left, right) = (y * stride, y * stride + stride - 1);
        view.scratch[left] = view.current[left];
        view.scratch[right] = view.current[right];
    }
    (updated, pinned)
}
