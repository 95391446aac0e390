//! Read-only snapshot of the grid for rendering and inspection.

use ripple_core::GridCoord;
use ripple_space::Grid2D;

/// Borrowed view of the present amplitude, the previous amplitude and the
/// wall mask.
///
/// Holding a `Snapshot` borrows the owning state immutably, so the grid
/// cannot be stepped or mutated until it is dropped.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    grid: Grid2D,
    current: &'a [f32],
    previous: &'a [f32],
    walls: &'a [bool],
}

impl<'a> Snapshot<'a> {
    /// Assemble a snapshot from parts sharing `grid`'s layout.
    pub fn new(grid: Grid2D, current: &'a [f32], previous: &'a [f32], walls: &'a [bool]) -> Self {
        debug_assert_eq!(current.len(), grid.cell_count());
        debug_assert_eq!(previous.len(), grid.cell_count());
        debug_assert_eq!(walls.len(), grid.cell_count());
        Self {
            grid,
            current,
            previous,
            walls,
        }
    }

    /// Grid dimensions.
    pub fn grid(&self) -> Grid2D {
        self.grid
    }

    /// Amplitude at time t, row-major.
    pub fn current(&self) -> &'a [f32] {
        self.current
    }

    /// Amplitude at time t-1, row-major.
    pub fn previous(&self) -> &'a [f32] {
        self.previous
    }

    /// Wall flags, row-major.
    pub fn walls(&self) -> &'a [bool] {
        self.walls
    }

    /// Amplitude of an on-grid cell.
    pub fn amplitude(&self, coord: GridCoord) -> Option<f32> {
        self.grid.index(coord).map(|i| self.current[i])
    }

    /// Whether an on-grid cell is a wall; `false` off-grid.
    pub fn is_wall(&self, coord: GridCoord) -> bool {
        self.grid.index(coord).is_some_and(|i| self.walls[i])
    }

    /// `(amplitude, is_wall)` for every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (f32, bool)> + 'a {
        self.current.iter().copied().zip(self.walls.iter().copied())
    }
}
