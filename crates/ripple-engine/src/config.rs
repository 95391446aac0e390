//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the input for constructing a [`WaveWorld`](crate::WaveWorld);
//! [`RealtimeConfig`] adds the pacing of the background tick thread.
//! Both expose `validate()`, which the constructors call before
//! allocating anything.

use std::error::Error;
use std::fmt;

use ripple_core::{DriveConfig, GridError, WaveParams};
use ripple_space::Grid2D;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating configuration or starting a world.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions were rejected.
    Grid(GridError),
    /// tick_rate_hz is NaN, infinite, zero, or negative.
    InvalidTickRate {
        /// The invalid value.
        value: f64,
    },
    /// Ingress queue capacity is zero.
    IngressQueueZero,
    /// `DriveConfig::time_scale` is zero or not finite.
    InvalidTimeScale {
        /// The invalid value.
        value: f64,
    },
    /// The tick thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and positive, got {value}")
            }
            Self::IngressQueueZero => write!(f, "max_ingress_queue must be at least 1"),
            Self::InvalidTimeScale { value } => {
                write!(f, "time_scale must be finite and non-zero, got {value}")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a [`WaveWorld`](crate::WaveWorld).
///
/// # Examples
///
/// ```
/// use ripple_core::WaveParams;
/// use ripple_engine::WorldConfig;
///
/// let config = WorldConfig::new(64, 48)
///     .with_params(WaveParams::new(0.4, 0.01))
///     .with_diagnostics(true);
/// assert!(config.validate().is_ok());
/// assert!(WorldConfig::new(0, 48).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Grid columns. Default: 200.
    pub nx: i32,
    /// Grid rows. Default: 150.
    pub ny: i32,
    /// Initial wave parameters.
    pub params: WaveParams,
    /// Shape of the driving signal.
    pub drive: DriveConfig,
    /// Maximum commands buffered in the ingress queue. Default: 256.
    pub max_ingress_queue: usize,
    /// Compute field energy, peak and NaN detection after every step.
    /// Default: false.
    pub diagnostics: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            nx: 200,
            ny: 150,
            params: WaveParams::default(),
            drive: DriveConfig::default(),
            max_ingress_queue: 256,
            diagnostics: false,
        }
    }
}

impl WorldConfig {
    /// Default configuration with the given grid size.
    pub fn new(nx: i32, ny: i32) -> Self {
        Self {
            nx,
            ny,
            ..Self::default()
        }
    }

    /// Replace the wave parameters.
    pub fn with_params(mut self, params: WaveParams) -> Self {
        self.params = params;
        self
    }

    /// Replace the driving signal shape.
    pub fn with_drive(mut self, drive: DriveConfig) -> Self {
        self.drive = drive;
        self
    }

    /// Set the ingress queue capacity.
    pub fn with_ingress_capacity(mut self, capacity: usize) -> Self {
        self.max_ingress_queue = capacity;
        self
    }

    /// Enable or disable per-step field diagnostics.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// Validate all structural invariants and return the grid.
    ///
    /// Wave parameters are deliberately not checked: unstable values are
    /// allowed and simply diverge.
    pub fn validate(&self) -> Result<Grid2D, ConfigError> {
        let grid = Grid2D::new(self.nx, self.ny)?;
        if self.max_ingress_queue == 0 {
            return Err(ConfigError::IngressQueueZero);
        }
        let scale = self.drive.time_scale;
        if !scale.is_finite() || scale == 0.0 {
            return Err(ConfigError::InvalidTimeScale { value: scale });
        }
        Ok(grid)
    }
}

// ── RealtimeConfig ─────────────────────────────────────────────────

/// Pacing of [`RealtimeWorld`](crate::RealtimeWorld).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealtimeConfig {
    /// Target frames per second. Default: 60.
    pub tick_rate_hz: f64,
    /// Render an RGBA frame after every step. Default: true.
    pub render: bool,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60.0,
            render: true,
        }
    }
}

impl RealtimeConfig {
    /// Check that the tick rate yields a usable frame budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hz = self.tick_rate_hz;
        // The reciprocal must be finite too: subnormal rates overflow the
        // frame budget.
        if !hz.is_finite() || hz <= 0.0 || !(1.0 / hz).is_finite() {
            return Err(ConfigError::InvalidTickRate { value: hz });
        }
        Ok(())
    }
}
