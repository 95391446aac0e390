//! Multi-step behaviour of the wave integrator.

use ripple_arena::GridState;
use ripple_core::{DriveConfig, GridCoord, SourceRegistry, WaveParams};
use ripple_propagators::{discrete_energy, field_energy, first_non_finite, WaveIntegrator};
use ripple_test_utils::{driven_state, gaussian_bump, seed_pulse, walled_box};

fn advance(state: &mut GridState, sources: &SourceRegistry, params: &WaveParams, steps: u32) {
    let mut integrator = WaveIntegrator::new();
    let drive = DriveConfig::default();
    for t in 0..steps {
        integrator.step(state, sources, params, &drive, f64::from(t));
    }
}

#[test]
fn damped_energy_never_increases() {
    let mut state = walled_box(40, 40);
    gaussian_bump(&mut state, GridCoord::new(20, 20), 4.0, 1.0);
    let params = WaveParams::new(0.5, 0.01);
    let sources = SourceRegistry::new();
    let mut integrator = WaveIntegrator::new();
    let drive = DriveConfig::default();

    let mut last = discrete_energy(&state.snapshot(), &params);
    assert!(last > 0.0);
    for t in 0..300 {
        integrator.step(&mut state, &sources, &params, &drive, f64::from(t));
        let g = discrete_energy(&state.snapshot(), &params);
        assert!(g <= last, "energy grew at step {t}: {last} -> {g}");
        let ratio = g / last;
        assert!((ratio - 0.99).abs() < 1e-3, "decay ratio {ratio} at step {t}");
        last = g;
    }
}

#[test]
fn undamped_energy_is_conserved() {
    let mut state = walled_box(32, 32);
    gaussian_bump(&mut state, GridCoord::new(12, 17), 3.0, 0.8);
    let params = WaveParams::new(0.5, 0.0);
    let g0 = discrete_energy(&state.snapshot(), &params);
    advance(&mut state, &SourceRegistry::new(), &params, 200);
    let g = discrete_energy(&state.snapshot(), &params);
    assert!((g - g0).abs() <= 1e-3 * g0, "{g0} -> {g}");
}

#[test]
fn damped_field_decays_over_long_runs() {
    let mut state = walled_box(40, 40);
    gaussian_bump(&mut state, GridCoord::new(20, 20), 4.0, 1.0);
    let params = WaveParams::new(0.5, 0.01);
    let initial = field_energy(state.snapshot().current());
    advance(&mut state, &SourceRegistry::new(), &params, 900);
    let later = field_energy(state.snapshot().current());
    assert!(later < 0.05 * initial, "{initial} -> {later}");
}

#[test]
fn disturbance_spreads_one_cell_per_step() {
    let mut state = GridState::new(41, 41).unwrap();
    let origin = GridCoord::new(20, 20);
    seed_pulse(&mut state, origin, 1.0);
    let steps = 10;
    advance(&mut state, &SourceRegistry::new(), &WaveParams::default(), steps);

    let snap = state.snapshot();
    let grid = snap.grid();
    for (i, &v) in snap.current().iter().enumerate() {
        let c = grid.coord_of(i);
        let reach = (c.x - origin.x).abs() + (c.y - origin.y).abs();
        if reach > steps as i32 {
            assert_eq!(v, 0.0, "amplitude outside light cone at {c}");
        }
    }
    assert!(snap.amplitude(GridCoord::new(20, 20 + steps as i32)).is_some_and(|a| a != 0.0));
}

#[test]
fn full_height_wall_blocks_transmission() {
    let mut state = GridState::new(40, 20).unwrap();
    state.draw_wall(GridCoord::new(20, 0), GridCoord::new(20, 19));
    let mut sources = SourceRegistry::new();
    sources.add(8, 10);
    advance(&mut state, &sources, &WaveParams::default(), 400);

    let snap = state.snapshot();
    let grid = snap.grid();
    let mut left = 0.0;
    for (i, &v) in snap.current().iter().enumerate() {
        let c = grid.coord_of(i);
        if c.x > 20 {
            assert_eq!(v, 0.0, "leak at {c}");
        } else {
            left += f64::from(v).abs();
        }
    }
    assert!(left > 0.0);
}

#[test]
fn mirrored_source_gives_mirrored_field() {
    let mut state = GridState::new(31, 24).unwrap();
    let mut sources = SourceRegistry::new();
    sources.add(15, 9);
    advance(&mut state, &sources, &WaveParams::default(), 60);

    let snap = state.snapshot();
    let nx = snap.grid().nx();
    for y in 0..snap.grid().ny() {
        for x in 0..nx {
            let a = snap.amplitude(GridCoord::new(x, y));
            let b = snap.amplitude(GridCoord::new(nx - 1 - x, y));
            assert_eq!(a, b, "asymmetry at ({x}, {y})");
        }
    }
}

#[test]
fn driven_source_stays_bounded() {
    let (mut state, sources) = driven_state(48, 48);
    advance(&mut state, &sources, &WaveParams::default(), 1_000);
    let snap = state.snapshot();
    assert_eq!(first_non_finite(snap.current()), None);
    assert!(snap.current().iter().any(|&v| v != 0.0));
}

#[test]
fn unstable_wave_speed_diverges_without_error() {
    let (mut state, sources) = driven_state(16, 16);
    let params = WaveParams::new(3.0, 0.0);
    advance(&mut state, &sources, &params, 400);
    let current = state.snapshot().current();
    let blown = first_non_finite(current).is_some()
        || current.iter().any(|v| v.abs() > 1e6);
    assert!(blown);
}
