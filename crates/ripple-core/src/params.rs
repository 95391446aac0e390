//! Simulation parameters read once per step by the integrator.

/// Wave propagation parameters.
///
/// Neither field is validated. Under the explicit scheme the field stays
/// bounded for roughly `0 < wave_speed <= 0.7` and `0 <= damping < 1`;
/// anything else is allowed to diverge and is the caller's choice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    /// Courant number `c` of the stencil (cells per tick).
    pub wave_speed: f32,
    /// Fraction of amplitude lost per step; `1 - damping` is retained.
    pub damping: f32,
}

impl WaveParams {
    /// Create a parameter set.
    pub const fn new(wave_speed: f32, damping: f32) -> Self {
        Self {
            wave_speed,
            damping,
        }
    }

    /// `wave_speed²`, the Laplacian coefficient.
    pub fn courant_squared(&self) -> f32 {
        self.wave_speed * self.wave_speed
    }

    /// Per-step amplitude retention `1 - damping`.
    pub fn retention(&self) -> f32 {
        1.0 - self.damping
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_speed: 0.5,
            damping: 0.005,
        }
    }
}

/// Shape of the continuous driving signal injected by sources.
///
/// Every source adds `amplitude * sin(time / time_scale)` to its cell each
/// tick. The time unit is whatever the driver feeds to `step`: a tick
/// counter, or elapsed milliseconds for a wall-clock driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriveConfig {
    /// Divisor applied to `time` before the sine. Default: 100.
    pub time_scale: f64,
    /// Peak injected amplitude per source. Default: 1.
    pub amplitude: f32,
    /// Time advanced by one internally clocked tick. Default: 1.
    pub tick_duration: f64,
}

impl DriveConfig {
    /// Driving value for a given time.
    pub fn signal(&self, time: f64) -> f32 {
        self.amplitude * (time / self.time_scale).sin() as f32
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            time_scale: 100.0,
            amplitude: 1.0,
            tick_duration: 1.0,
        }
    }
}
