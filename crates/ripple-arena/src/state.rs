//! The grid state: dimensions, field ring and wall mask.

use ripple_core::{GridCoord, GridError};
use ripple_space::{rasterize_line, Grid2D};
use tracing::debug;

use crate::read::Snapshot;
use crate::ring::FieldRing;
use crate::walls::WallMask;

/// Owns every per-cell array of a simulation.
///
/// All buffers share the layout of [`Grid2D`]. Field data changes only
/// through [`integrate`](GridState::integrate); walls change only
/// through [`draw_wall`](GridState::draw_wall) and
/// [`clear_walls`](GridState::clear_walls).
#[derive(Clone, Debug)]
pub struct GridState {
    grid: Grid2D,
    ring: FieldRing,
    walls: WallMask,
}

/// Mutable access for one integration step.
///
/// Borrows the three field roles mutably and the wall mask immutably, all
/// from the same [`GridState`], so nothing else can observe the grid while
/// a step is half done.
pub struct StepView<'a> {
    /// Grid dimensions.
    pub grid: Grid2D,
    /// Amplitude at time t. Wall cells are pinned to zero during the step.
    pub current: &'a mut [f32],
    /// Amplitude at time t-1. Wall cells are pinned to zero during the step.
    pub previous: &'a mut [f32],
    /// Write target for time t+1.
    pub scratch: &'a mut [f32],
    /// Wall flags.
    pub walls: &'a [bool],
}

impl GridState {
    /// Allocate a zeroed grid of `nx x ny` cells with no walls.
    ///
    /// Returns `Err(GridError::InvalidDimensions)` when either dimension
    /// is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_arena::GridState;
    ///
    /// let state = GridState::new(32, 24).unwrap();
    /// assert_eq!(state.grid().cell_count(), 768);
    /// assert!(state.snapshot().current().iter().all(|&a| a == 0.0));
    /// assert!(GridState::new(-1, 24).is_err());
    /// ```
    pub fn new(nx: i32, ny: i32) -> Result<Self, GridError> {
        let grid = Grid2D::new(nx, ny)?;
        Ok(Self::with_grid(grid))
    }

    /// Allocate a zeroed state for already validated dimensions.
    pub fn with_grid(grid: Grid2D) -> Self {
        let cells = grid.cell_count();
        Self {
            grid,
            ring: FieldRing::zeroed(cells),
            walls: WallMask::empty(cells),
        }
    }

    /// Re-initialize with new dimensions, discarding field and wall data.
    ///
    /// Dimensions are validated before anything is dropped: on error the
    /// existing state is left untouched.
    pub fn resize(&mut self, nx: i32, ny: i32) -> Result<(), GridError> {
        let grid = Grid2D::new(nx, ny)?;
        debug!(
            from_nx = self.grid.nx(),
            from_ny = self.grid.ny(),
            nx,
            ny,
            "resizing grid"
        );
        *self = Self::with_grid(grid);
        Ok(())
    }

    /// Zero every field buffer, keeping walls.
    pub fn reset_field(&mut self) {
        self.ring.zero();
    }

    /// Grid dimensions.
    pub fn grid(&self) -> Grid2D {
        self.grid
    }

    /// The amplitude buffers.
    pub fn ring(&self) -> &FieldRing {
        &self.ring
    }

    /// The wall mask.
    pub fn walls(&self) -> &WallMask {
        &self.walls
    }

    /// Mark every on-grid cell of the line `start..=end` as a wall.
    ///
    /// Off-grid cells are skipped. Returns the number of cells that were
    /// newly marked.
    pub fn draw_wall(&mut self, start: GridCoord, end: GridCoord) -> usize {
        let mut added = 0;
        for idx in rasterize_line(&self.grid, start, end) {
            if self.walls.mark(idx) {
                added += 1;
            }
        }
        added
    }

    /// Unmark every wall cell.
    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    /// Run one integration step.
    ///
    /// `step` receives the three buffers and must fill the scratch buffer
    /// with the next field. The buffer roles rotate as soon as it returns,
    /// so the only way to change the field is to produce a whole new one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_arena::GridState;
    ///
    /// let mut state = GridState::new(4, 4).unwrap();
    /// state.integrate(|view| view.scratch.fill(0.5));
    /// assert!(state.snapshot().current().iter().all(|&a| a == 0.5));
    /// assert_eq!(state.ring().rotations(), 1);
    /// ```
    ///
    /// Buffer roles cannot be rotated on their own:
    ///
    /// ```compile_fail
    /// let mut state = ripple_arena::GridState::new(4, 4).unwrap();
    /// state.rotate();
    /// ```
    pub fn integrate<R>(&mut self, step: impl FnOnce(&mut StepView<'_>) -> R) -> R {
        let out = step(&mut self.view());
        self.ring.rotate();
        out
    }

    /// Write access to every buffer without stepping.
    ///
    /// Only for building test fixtures; not part of the stable API.
    #[cfg(any(test, feature = "test-support"))]
    #[doc(hidden)]
    pub fn seed_view(&mut self) -> StepView<'_> {
        self.view()
    }

    fn view(&mut self) -> StepView<'_> {
        let (current, previous, scratch) = self.ring.split_mut();
        StepView {
            grid: self.grid,
            current,
            previous,
            scratch,
            walls: self.walls.as_slice(),
        }
    }

    /// Read-only view of the present amplitude and walls.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(
            self.grid,
            self.ring.current(),
            self.ring.previous(),
            self.walls.as_slice(),
        )
    }
}
