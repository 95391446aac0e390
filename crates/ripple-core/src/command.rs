//! Mutation commands serialized with the step loop.

use crate::id::GridCoord;

/// A mutation of the simulation, applied between steps.
///
/// Mirrors the direct mutation API one-to-one. Drivers that accept input
/// on other threads queue commands and apply them at the start of a
/// frame, so no mutation can land while a step is in flight.
///
/// # Examples
///
/// ```
/// use ripple_core::{Command, GridCoord};
///
/// let cmd = Command::DrawWall {
///     start: GridCoord::new(2, 2),
///     end: GridCoord::new(10, 2),
/// };
/// assert!(cmd.touches_walls());
/// assert!(!Command::SetDamping(0.01).touches_walls());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Append a source at a coordinate.
    AddSource(GridCoord),
    /// Remove every source.
    ClearSources,
    /// Rasterize a wall segment between two coordinates (inclusive).
    DrawWall {
        /// First endpoint.
        start: GridCoord,
        /// Last endpoint.
        end: GridCoord,
    },
    /// Unmark every wall cell.
    ClearWalls,
    /// Set the Courant number.
    SetWaveSpeed(f32),
    /// Set the per-step damping fraction.
    SetDamping(f32),
    /// Reallocate the grid, discarding field and wall data.
    Resize {
        /// New column count.
        nx: i32,
        /// New row count.
        ny: i32,
    },
    /// Zero the field buffers, keeping walls and sources.
    ResetField,
}

impl Command {
    /// Whether applying this command changes the wall mask.
    pub fn touches_walls(&self) -> bool {
        matches!(
            self,
            Self::DrawWall { .. } | Self::ClearWalls | Self::Resize { .. }
        )
    }
}
