//! Strongly-typed identifiers and the [`GridCoord`] type.

use std::fmt;

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A cell coordinate on the simulation grid.
///
/// Signed so that gestures may start or end off-grid: consumers decide
/// whether an out-of-range coordinate is skipped or ignored, it is never
/// an error to construct one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Column, `0 <= x < nx` when in bounds.
    pub x: i32,
    /// Row, `0 <= y < ny` when in bounds.
    pub y: i32,
}

impl GridCoord {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_from_tuple() {
        let c: GridCoord = (3, -2).into();
        assert_eq!(c, GridCoord::new(3, -2));
        assert_eq!(c.to_string(), "(3, -2)");
    }

    #[test]
    fn tick_ordering() {
        assert!(TickId(1) < TickId(2));
        assert_eq!(TickId::default(), TickId(0));
    }
}
