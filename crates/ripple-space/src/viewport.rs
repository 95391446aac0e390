//! Mapping between a display surface and the simulation grid.
//!
//! The grid resolution is the display resolution divided by a cell size;
//! pointer positions are mapped back proportionally. Hosts use this to
//! size the grid on resize and to turn clicks and drags into
//! [`GridCoord`]s for sources and walls.

use ripple_core::{GridCoord, GridError};

use crate::grid2d::Grid2D;

/// A display surface of `width_px x height_px` pixels covered by square
/// cells of `cell_size` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    width_px: u32,
    height_px: u32,
    cell_size: u32,
    grid: Grid2D,
}

impl Viewport {
    /// Derive the grid for a display surface.
    ///
    /// `nx = floor(width_px / cell_size)`, `ny = floor(height_px / cell_size)`.
    /// Fails with `InvalidDimensions` when the surface is smaller than one
    /// cell or `cell_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_core::GridCoord;
    /// use ripple_space::Viewport;
    ///
    /// let vp = Viewport::new(800, 600, 4).unwrap();
    /// assert_eq!((vp.grid().nx(), vp.grid().ny()), (200, 150));
    /// assert_eq!(vp.to_grid(402.0, 301.0), GridCoord::new(100, 75));
    /// ```
    pub fn new(width_px: u32, height_px: u32, cell_size: u32) -> Result<Self, GridError> {
        if cell_size == 0 {
            return Err(GridError::InvalidDimensions {
                nx: width_px.into(),
                ny: height_px.into(),
            });
        }
        let nx = width_px / cell_size;
        let ny = height_px / cell_size;
        let too_large = GridError::DimensionTooLarge {
            nx: nx.into(),
            ny: ny.into(),
        };
        let nx = i32::try_from(nx).map_err(|_| too_large)?;
        let ny = i32::try_from(ny).map_err(|_| too_large)?;
        let grid = Grid2D::new(nx, ny)?;
        Ok(Self {
            width_px,
            height_px,
            cell_size,
            grid,
        })
    }

    /// The grid covering this surface.
    pub fn grid(&self) -> Grid2D {
        self.grid
    }

    /// Surface width in pixels.
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Surface height in pixels.
    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// Side of one cell in pixels.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Map a pointer position (pixels, relative to the surface origin) to
    /// a cell. Positions outside the surface map to off-grid coordinates.
    pub fn to_grid(&self, px: f64, py: f64) -> GridCoord {
        let x = (px / f64::from(self.width_px) * f64::from(self.grid.nx())).floor();
        let y = (py / f64::from(self.height_px) * f64::from(self.grid.ny())).floor();
        // `as` saturates, so far-away pointers stay far away.
        GridCoord::new(x as i32, y as i32)
    }
}
