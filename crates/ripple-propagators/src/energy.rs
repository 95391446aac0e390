//! Field diagnostics.
//!
//! None of these are needed to step the simulation. The engine samples
//! them when diagnostics are enabled and tests use them to check decay.

use ripple_arena::Snapshot;
use ripple_core::WaveParams;

/// Sum of squared amplitudes, accumulated in `f64`.
pub fn field_energy(values: &[f32]) -> f64 {
    values.iter().map(|&v| f64::from(v) * f64::from(v)).sum()
}

/// Largest absolute amplitude. NaN cells are ignored.
pub fn peak_amplitude(values: &[f32]) -> f32 {
    values.iter().fold(0.0f32, |peak, &v| peak.max(v.abs()))
}

/// Index of the first NaN or infinite cell.
pub fn first_non_finite(values: &[f32]) -> Option<usize> {
    values.iter().position(|v| !v.is_finite())
}

/// Energy of the damped leapfrog scheme.
///
/// With `u1 = current`, `u0 = previous`, `r = 1 - damping` and `L` the
/// 5-point Laplacian the integrator uses (wall neighbours read as 0):
///
/// ```text
/// G = |u1|² - r <u1, (2 + c² L) u0> + r |u0|²
/// ```
///
/// summed over interior non-wall cells. Without sources and with a zero
/// border, one step maps `G` to `r * G` exactly (up to rounding), so `G`
/// never grows when `0 <= damping < 1`. The plain sum of squares does not
/// have that property step by step; it oscillates while decaying.
///
/// # Examples
///
/// ```
/// use ripple_arena::GridState;
/// use ripple_core::WaveParams;
/// use ripple_propagators::discrete_energy;
///
/// let state = GridState::new(8, 8).unwrap();
/// assert_eq!(discrete_energy(&state.snapshot(), &WaveParams::default()), 0.0);
/// ```
pub fn discrete_energy(snapshot: &Snapshot<'_>, params: &WaveParams) -> f64 {
    let grid = snapshot.grid();
    let stride = grid.stride();
    let u1 = snapshot.current();
    let u0 = snapshot.previous();
    let walls = snapshot.walls();
    let r = f64::from(params.retention());
    let c2 = f64::from(params.courant_squared());

    let at = |j: usize| if walls[j] { 0.0 } else { f64::from(u0[j]) };

    let mut kinetic = 0.0;
    let mut coupling = 0.0;
    let mut potential = 0.0;
    for y in grid.interior_rows() {
        for x in grid.interior_columns() {
            let i = y * stride + x;
            if walls[i] {
                continue;
            }
            let a = f64::from(u1[i]);
            let b = f64::from(u0[i]);
            let lap = at(i + 1) + at(i - 1) + at(i + stride) + at(i - stride) - 4.0 * b;
            kinetic += a * a;
            coupling += a * (2.0 * b + c2 * lap);
            potential += b * b;
        }
    }
    kinetic - r * coupling + r * potential
}
