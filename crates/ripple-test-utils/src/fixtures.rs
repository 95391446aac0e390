//! Reusable grid fixtures.
//!
//! - [`seed_impulse`]: a cell displaced at rest (`current == previous`).
//! - [`seed_pulse`]: a cell displaced in `current` only.
//! - [`gaussian_bump`]: a smooth standing bump, well resolved by the
//!   stencil.
//! - [`walled_box`]: a grid whose first interior ring is wall.
//! - [`driven_state`]: a grid with one source at its centre.

use ripple_arena::GridState;
use ripple_core::{GridCoord, SourceRegistry};

/// Set `current` and `previous` of an interior cell to `value`.
///
/// Returns `false` (and leaves the state untouched) for border or
/// off-grid coordinates.
pub fn seed_impulse(state: &mut GridState, coord: GridCoord, value: f32) -> bool {
    let Some(idx) = state.grid().interior_index(coord) else {
        return false;
    };
    let view = state.seed_view();
    view.current[idx] = value;
    view.previous[idx] = value;
    true
}

/// Set only `current` of an interior cell, giving it an initial velocity.
pub fn seed_pulse(state: &mut GridState, coord: GridCoord, value: f32) -> bool {
    let Some(idx) = state.grid().interior_index(coord) else {
        return false;
    };
    state.seed_view().current[idx] = value;
    true
}

/// Add a Gaussian bump at rest, interior cells only.
pub fn gaussian_bump(state: &mut GridState, center: GridCoord, radius: f32, peak: f32) {
    let grid = state.grid();
    let view = state.seed_view();
    for y in grid.interior_rows() {
        for x in grid.interior_columns() {
            let dx = x as f32 - center.x as f32;
            let dy = y as f32 - center.y as f32;
            let v = peak * (-(dx * dx + dy * dy) / (radius * radius)).exp();
            let i = y * grid.stride() + x;
            view.current[i] += v;
            view.previous[i] += v;
        }
    }
}

/// A zeroed `nx x ny` grid whose ring at distance 1 from the edge is wall.
///
/// Panics if the dimensions are not positive.
pub fn walled_box(nx: i32, ny: i32) -> GridState {
    let mut state = GridState::new(nx, ny).expect("walled_box: bad dimensions");
    let (x1, y1) = (nx - 2, ny - 2);
    let corners = [
        GridCoord::new(1, 1),
        GridCoord::new(x1, 1),
        GridCoord::new(x1, y1),
        GridCoord::new(1, y1),
    ];
    for k in 0..4 {
        state.draw_wall(corners[k], corners[(k + 1) % 4]);
    }
    state
}

/// A zeroed grid with one source at `(nx / 2, ny / 2)`.
pub fn driven_state(nx: i32, ny: i32) -> (GridState, SourceRegistry) {
    let state = GridState::new(nx, ny).expect("driven_state: bad dimensions");
    let mut sources = SourceRegistry::new();
    sources.add(nx / 2, ny / 2);
    (state, sources)
}

/// Largest absolute element-wise difference. Panics on length mismatch.
pub fn max_abs_diff(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "max_abs_diff: length mismatch");
    a.iter()
        .zip(b)
        .fold(0.0f32, |acc, (x, y)| acc.max((x - y).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_rejects_border() {
        let mut state = GridState::new(5, 5).unwrap();
        assert!(!seed_impulse(&mut state, GridCoord::new(0, 2), 1.0));
        assert!(seed_impulse(&mut state, GridCoord::new(2, 2), 1.0));
        assert_eq!(state.ring().previous()[12], 1.0);
    }

    #[test]
    fn walled_box_ring() {
        let state = walled_box(8, 6);
        // perimeter of the 6x4 ring at distance 1
        assert_eq!(state.walls().count(), 2 * 6 + 2 * 4 - 4);
        assert!(state.walls().is_wall(1 + 8));
        assert!(!state.walls().is_wall(3 + 3 * 8));
    }
}
