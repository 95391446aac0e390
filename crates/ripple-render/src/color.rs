//! Per-cell colour mapping.

/// An 8-bit RGBA pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    /// Opaque grey of the given level.
    pub const fn gray(level: u8) -> Self {
        Self(level, level, level, 255)
    }

    /// The pixel as `[r, g, b, a]`.
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.0, self.1, self.2, self.3]
    }
}

/// Colour of wall cells.
pub const WALL_COLOR: Rgba = Rgba(50, 50, 50, 255);

/// Grey level for an amplitude: `clamp(a * 128 + 128, 0, 255)`.
///
/// Rounds to nearest with ties to even, so `0.0` maps to `128` and
/// `±1.0` saturate. NaN maps to `0`.
///
/// ```
/// use ripple_render::intensity;
///
/// assert_eq!(intensity(0.0), 128);
/// assert_eq!(intensity(1.0), 255);
/// assert_eq!(intensity(-1.0), 0);
/// assert_eq!(intensity(f32::NAN), 0);
/// ```
pub fn intensity(amplitude: f32) -> u8 {
    // `as` saturates and sends NaN to 0.
    (amplitude * 128.0 + 128.0).clamp(0.0, 255.0).round_ties_even() as u8
}

/// Colour of one cell.
pub fn cell_color(amplitude: f32, wall: bool) -> Rgba {
    if wall {
        WALL_COLOR
    } else {
        Rgba::gray(intensity(amplitude))
    }
}
