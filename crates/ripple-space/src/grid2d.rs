//! 2D grid dimensions with row-major flat indexing.

use std::ops::Range;

use ripple_core::{GridCoord, GridError};

/// Dimensions of a rectangular grid.
///
/// Cell `(x, y)` lives at flat index `x + y * nx`. The one-cell border
/// (`x ∈ {0, nx-1}` or `y ∈ {0, ny-1}`) is never updated by the
/// integrator; everything else is the interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid2D {
    nx: i32,
    ny: i32,
}

impl Grid2D {
    /// Create grid dimensions.
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if either dimension is
    /// zero or negative, and `Err(GridError::DimensionTooLarge)` if the
    /// cell count does not fit in an `i32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_core::GridCoord;
    /// use ripple_space::Grid2D;
    ///
    /// let grid = Grid2D::new(8, 4).unwrap();
    /// assert_eq!(grid.cell_count(), 32);
    /// assert_eq!(grid.index(GridCoord::new(3, 2)), Some(19));
    /// assert_eq!(grid.index(GridCoord::new(8, 0)), None);
    /// assert!(Grid2D::new(0, 4).is_err());
    /// ```
    pub fn new(nx: i32, ny: i32) -> Result<Self, GridError> {
        if nx <= 0 || ny <= 0 {
            return Err(GridError::InvalidDimensions {
                nx: nx.into(),
                ny: ny.into(),
            });
        }
        if i64::from(nx) * i64::from(ny) > i64::from(i32::MAX) {
            return Err(GridError::DimensionTooLarge {
                nx: nx.into(),
                ny: ny.into(),
            });
        }
        Ok(Self { nx, ny })
    }

    /// Number of columns.
    pub fn nx(&self) -> i32 {
        self.nx
    }

    /// Number of rows.
    pub fn ny(&self) -> i32 {
        self.ny
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.nx as usize * self.ny as usize
    }

    /// Row stride of the flat layout.
    pub fn stride(&self) -> usize {
        self.nx as usize
    }

    /// Whether `coord` lies on the grid.
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0 && coord.x < self.nx && coord.y >= 0 && coord.y < self.ny
    }

    /// Whether `coord` lies strictly inside the one-cell border.
    pub fn is_interior(&self, coord: GridCoord) -> bool {
        coord.x >= 1 && coord.x < self.nx - 1 && coord.y >= 1 && coord.y < self.ny - 1
    }

    /// Flat index of an in-bounds coordinate, `None` off-grid.
    pub fn index(&self, coord: GridCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.x as usize + coord.y as usize * self.nx as usize)
        } else {
            None
        }
    }

    /// Flat index of an interior coordinate, `None` on the border or off-grid.
    pub fn interior_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_interior(coord) {
            self.index(coord)
        } else {
            None
        }
    }

    /// Coordinate of a flat index. `idx` must be below [`cell_count`](Self::cell_count).
    pub fn coord_of(&self, idx: usize) -> GridCoord {
        let stride = self.nx as usize;
        GridCoord::new((idx % stride) as i32, (idx / stride) as i32)
    }

    /// Interior column range `1..nx-1` (empty when `nx < 3`).
    pub fn interior_columns(&self) -> Range<usize> {
        1..(self.nx as usize).saturating_sub(1).max(1)
    }

    /// Interior row range `1..ny-1` (empty when `ny < 3`).
    pub fn interior_rows(&self) -> Range<usize> {
        1..(self.ny as usize).saturating_sub(1).max(1)
    }

    /// Flat indices of every border cell, row-major.
    pub fn border_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cell_count()).filter(move |&i| !self.is_interior(self.coord_of(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> GridCoord {
        GridCoord::new(x, y)
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(
            Grid2D::new(0, 5),
            Err(GridError::InvalidDimensions { nx: 0, ny: 5 })
        );
        assert_eq!(
            Grid2D::new(5, -1),
            Err(GridError::InvalidDimensions { nx: 5, ny: -1 })
        );
    }

    #[test]
    fn rejects_oversized() {
        assert!(matches!(
            Grid2D::new(i32::MAX, 2),
            Err(GridError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn index_round_trips_corners() {
        let g = Grid2D::new(7, 5).unwrap();
        for coord in [c(0, 0), c(6, 0), c(0, 4), c(6, 4)] {
            let idx = g.index(coord).unwrap();
            assert_eq!(g.coord_of(idx), coord);
        }
    }

    #[test]
    fn off_grid_has_no_index() {
        let g = Grid2D::new(4, 4).unwrap();
        assert_eq!(g.index(c(-1, 0)), None);
        assert_eq!(g.index(c(0, 4)), None);
    }

    #[test]
    fn interior_excludes_border() {
        let g = Grid2D::new(5, 4).unwrap();
        assert!(g.is_interior(c(1, 1)));
        assert!(g.is_interior(c(3, 2)));
        assert!(!g.is_interior(c(0, 2)));
        assert!(!g.is_interior(c(4, 2)));
        assert!(!g.is_interior(c(2, 3)));
        assert_eq!(g.interior_columns(), 1..4);
        assert_eq!(g.interior_rows(), 1..3);
        assert_eq!(g.interior_index(c(2, 0)), None);
    }

    #[test]
    fn tiny_grids_have_empty_interior() {
        for (nx, ny) in [(1, 1), (2, 9), (9, 2)] {
            let g = Grid2D::new(nx, ny).unwrap();
            let interior = g.interior_rows().len() * g.interior_columns().len();
            assert_eq!(interior, 0, "{nx}x{ny} should have no interior");
            assert_eq!(g.border_indices().count(), g.cell_count());
        }
    }

    #[test]
    fn border_count() {
        let g = Grid2D::new(6, 5).unwrap();
        // 6*5 cells minus a 4x3 interior.
        assert_eq!(g.border_indices().count(), 30 - 12);
    }
}
