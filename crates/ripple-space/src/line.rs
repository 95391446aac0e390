//! Discrete line traversal for wall drawing.
//!
//! [`BresenhamLine`] walks every cell between two endpoints with the
//! all-octant integer Bresenham algorithm. Both axis steps may fire in the
//! same iteration, so the path is 8-connected and includes both endpoints.
//! [`rasterize_line`] restricts the walk to the grid: it jumps straight to
//! the first on-grid cell and stops after the last one, so the cost depends
//! on the visible part of the segment, not on how far off-grid its
//! endpoints lie.

use ripple_core::GridCoord;

use crate::grid2d::Grid2D;

/// Iterator over the cells of a discrete line, endpoints inclusive.
///
/// Internally uses `i64` so the error accumulator cannot overflow for any
/// pair of `i32` endpoints.
///
/// # Examples
///
/// ```
/// use ripple_core::GridCoord;
/// use ripple_space::BresenhamLine;
///
/// let cells: Vec<_> = BresenhamLine::new(GridCoord::new(0, 0), GridCoord::new(3, 3)).collect();
/// assert_eq!(
///     cells,
///     vec![
///         GridCoord::new(0, 0),
///         GridCoord::new(1, 1),
///         GridCoord::new(2, 2),
///         GridCoord::new(3, 3),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    x: i64,
    y: i64,
    start_x: i64,
    start_y: i64,
    end_x: i64,
    end_y: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    /// Start a traversal from `start` to `end`.
    pub fn new(start: GridCoord, end: GridCoord) -> Self {
        let (x0, y0) = (i64::from(start.x), i64::from(start.y));
        let (x1, y1) = (i64::from(end.x), i64::from(end.y));
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            start_x: x0,
            start_y: y0,
            end_x: x1,
            end_y: y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }

    /// Number of cells the traversal visits: `max(|dx|, |dy|) + 1`.
    pub fn cell_count(&self) -> u64 {
        self.steps() as u64 + 1
    }

    fn steps(&self) -> i64 {
        self.dx.max(-self.dy)
    }

    /// Axis steps `(x, y)` taken after `k` iterations from the start.
    ///
    /// The major axis steps every iteration. The minor axis has stepped
    /// `floor((2 * minor * k + major) / (2 * major))` times, which is the
    /// count the error accumulator produces, ties included.
    fn steps_after(&self, k: i64) -> (i64, i64) {
        let (a, b) = (self.dx, -self.dy);
        let (major, minor) = (a.max(b), a.min(b));
        if major == 0 {
            return (0, 0);
        }
        let (major, minor) = (i128::from(major), i128::from(minor));
        let m = ((2 * minor * i128::from(k) + major) / (2 * major)) as i64;
        if a >= b {
            (k, m)
        } else {
            (m, k)
        }
    }

    /// Jump to the state after `k` iterations from the start, without
    /// walking the cells in between. `k` must not exceed the step count.
    fn seek(&mut self, k: i64) {
        let (xs, ys) = self.steps_after(k);
        self.x = self.start_x + self.sx * xs;
        self.y = self.start_y + self.sy * ys;
        // Bounded by 2 * max(|dx|, |dy|) once the terms cancel.
        let err = i128::from(self.dx + self.dy)
            + i128::from(xs) * i128::from(self.dy)
            + i128::from(ys) * i128::from(self.dx);
        self.err = err as i64;
        self.done = false;
    }

    /// Iteration range `[first, last]` whose cells lie on `grid`, or `None`
    /// if the segment misses the grid entirely.
    fn clip(&self, grid: &Grid2D) -> Option<(i64, i64)> {
        let steps = self.steps();
        let (mut first, mut last) = (0, steps);
        let axes = [
            (0, self.start_x, self.sx, i64::from(grid.nx())),
            (1, self.start_y, self.sy, i64::from(grid.ny())),
        ];
        for (axis, origin, sign, len) in axes {
            let taken = |k: i64| {
                let (xs, ys) = self.steps_after(k);
                if axis == 0 {
                    xs
                } else {
                    ys
                }
            };
            // `origin + sign * taken(k)` must land in `[0, len)`; `taken` is
            // non-decreasing in `k`, so this is a contiguous range of `k`.
            let (lo, hi) = if sign > 0 {
                (-origin, len - 1 - origin)
            } else {
                (origin - (len - 1), origin)
            };
            first = first.max(partition_point(steps, |k| taken(k) >= lo));
            last = last.min(partition_point(steps, |k| taken(k) > hi) - 1);
        }
        (first <= last).then_some((first, last))
    }
}

/// Smallest `k` in `0..=steps` for which `pred` holds, or `steps + 1`.
/// `pred` must be monotone: false up to some `k`, true from there on.
fn partition_point(steps: i64, pred: impl Fn(i64) -> bool) -> i64 {
    let (mut lo, mut hi) = (0, steps + 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

impl Iterator for BresenhamLine {
    type Item = GridCoord;

    fn next(&mut self) -> Option<GridCoord> {
        if self.done {
            return None;
        }
        // Every visited cell lies between the two i32 endpoints.
        let cell = GridCoord::new(self.x as i32, self.y as i32);
        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
            return Some(cell);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(cell)
    }
}

impl std::iter::FusedIterator for BresenhamLine {}

/// In-bounds flat indices along a line on a specific grid.
///
/// Created by [`rasterize_line`].
#[derive(Clone, Debug)]
pub struct LineCells<'g> {
    grid: &'g Grid2D,
    line: BresenhamLine,
    remaining: u64,
}

impl Iterator for LineCells<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.remaining > 0 {
            self.remaining -= 1;
            let coord = self.line.next()?;
            if let Some(idx) = self.grid.index(coord) {
                return Some(idx);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.remaining).ok())
    }
}

impl std::iter::FusedIterator for LineCells<'_> {}

/// Rasterize the segment `start..=end` onto `grid`.
///
/// Yields the flat index of every on-grid cell of the Bresenham path in
/// traversal order. Cells outside `[0, nx) x [0, ny)` are skipped, so a
/// gesture that starts or ends off-grid still marks its visible part. The
/// off-grid stretches are never walked: even endpoints at the `i32`
/// extremes cost only the on-grid cells plus a few binary searches.
///
/// # Examples
///
/// ```
/// use ripple_core::GridCoord;
/// use ripple_space::{rasterize_line, Grid2D};
///
/// let grid = Grid2D::new(4, 4).unwrap();
/// let cells: Vec<usize> =
///     rasterize_line(&grid, GridCoord::new(-5, -5), GridCoord::new(2, 2)).collect();
/// // Only (0,0), (1,1) and (2,2) are on the grid.
/// assert_eq!(cells, vec![0, 5, 10]);
/// ```
pub fn rasterize_line(grid: &Grid2D, start: GridCoord, end: GridCoord) -> LineCells<'_> {
    let mut line = BresenhamLine::new(start, end);
    let remaining = match line.clip(grid) {
        Some((first, last)) => {
            line.seek(first);
            (last - first) as u64 + 1
        }
        None => 0,
    };
    LineCells {
        grid,
        line,
        remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> GridCoord {
        GridCoord::new(x, y)
    }

    fn walk(a: GridCoord, b: GridCoord) -> Vec<GridCoord> {
        BresenhamLine::new(a, b).collect()
    }

    #[test]
    fn single_point() {
        assert_eq!(walk(c(2, 2), c(2, 2)), vec![c(2, 2)]);
    }

    #[test]
    fn horizontal_run() {
        assert_eq!(
            walk(c(0, 0), c(3, 0)),
            vec![c(0, 0), c(1, 0), c(2, 0), c(3, 0)]
        );
    }

    #[test]
    fn vertical_run_upwards() {
        assert_eq!(walk(c(1, 3), c(1, 0)), vec![c(1, 3), c(1, 2), c(1, 1), c(1, 0)]);
    }

    #[test]
    fn diagonal_steps_both_axes() {
        assert_eq!(
            walk(c(0, 0), c(3, 3)),
            vec![c(0, 0), c(1, 1), c(2, 2), c(3, 3)]
        );
    }

    #[test]
    fn shallow_slope() {
        let cells = walk(c(0, 0), c(4, 2));
        assert_eq!(cells.len(), 5);
        assert_eq!(cells.first(), Some(&c(0, 0)));
        assert_eq!(cells.last(), Some(&c(4, 2)));
        let xs: Vec<i32> = cells.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn cell_count_matches_walk() {
        let line = BresenhamLine::new(c(-3, 7), c(5, -1));
        let expected = line.cell_count() as usize;
        assert_eq!(line.count(), expected);
    }

    #[test]
    fn fused_after_end() {
        let mut line = BresenhamLine::new(c(0, 0), c(1, 0));
        assert!(line.next().is_some());
        assert!(line.next().is_some());
        assert!(line.next().is_none());
        assert!(line.next().is_none());
    }

    #[test]
    fn rasterize_skips_off_grid() {
        let grid = Grid2D::new(5, 5).unwrap();
        let cells: Vec<usize> = rasterize_line(&grid, c(-5, -5), c(2, 2)).collect();
        assert_eq!(cells, vec![0, 6, 12]);
    }

    #[test]
    fn rasterize_fully_off_grid_is_empty() {
        let grid = Grid2D::new(5, 5).unwrap();
        assert_eq!(rasterize_line(&grid, c(-3, -1), c(-1, -3)).count(), 0);
        assert_eq!(rasterize_line(&grid, c(9, 9), c(9, 9)).count(), 0);
    }

    #[test]
    fn extreme_endpoints_do_not_overflow() {
        let line = BresenhamLine::new(c(i32::MIN, 0), c(i32::MAX, 0));
        assert_eq!(line.cell_count(), u32::MAX as u64 + 1);
        let first: Vec<_> = line.take(2).collect();
        assert_eq!(first, vec![c(i32::MIN, 0), c(i32::MIN + 1, 0)]);
    }

    #[test]
    fn far_endpoints_clip_to_visible_row() {
        let grid = Grid2D::new(8, 8).unwrap();
        let cells: Vec<usize> =
            rasterize_line(&grid, c(-1_000_000_000, 3), c(1_000_000_000, 3)).collect();
        assert_eq!(cells, (24..32).collect::<Vec<_>>());
    }

    #[test]
    fn extreme_diagonal_is_clipped() {
        let grid = Grid2D::new(8, 8).unwrap();
        let cells: Vec<usize> =
            rasterize_line(&grid, c(i32::MIN, i32::MIN), c(i32::MAX, i32::MAX)).collect();
        // The exact diagonal through the origin.
        assert_eq!(cells, (0..8).map(|i| i * 9).collect::<Vec<_>>());
    }

    #[test]
    fn far_line_missing_the_grid_is_empty() {
        let grid = Grid2D::new(8, 8).unwrap();
        let cells = rasterize_line(&grid, c(-2_000_000_000, 20), c(2_000_000_000, 21));
        assert_eq!(cells.count(), 0);
    }

    #[test]
    fn seek_lands_on_walked_cell() {
        let line = BresenhamLine::new(c(-7, 2), c(11, -3));
        let walked: Vec<_> = line.clone().collect();
        for k in 0..walked.len() {
            let mut jumped = line.clone();
            jumped.seek(k as i64);
            assert_eq!(jumped.collect::<Vec<_>>(), walked[k..].to_vec(), "k={k}");
        }
    }

    proptest! {
        #[test]
        fn seek_resumes_the_same_walk(
            x0 in -40i32..40, y0 in -40i32..40,
            x1 in -40i32..40, y1 in -40i32..40,
            frac in 0.0f64..1.0,
        ) {
            let line = BresenhamLine::new(c(x0, y0), c(x1, y1));
            let walked: Vec<_> = line.clone().collect();
            let k = ((walked.len() - 1) as f64 * frac) as usize;
            let mut jumped = line;
            jumped.seek(k as i64);
            prop_assert_eq!(jumped.collect::<Vec<_>>(), walked[k..].to_vec());
        }

        #[test]
        fn clipped_walk_matches_filtered_walk(
            x0 in -40i32..40, y0 in -40i32..40,
            x1 in -40i32..40, y1 in -40i32..40,
            nx in 1i32..14, ny in 1i32..14,
        ) {
            let grid = Grid2D::new(nx, ny).unwrap();
            let filtered: Vec<usize> = walk(c(x0, y0), c(x1, y1))
                .into_iter()
                .filter_map(|p| grid.index(p))
                .collect();
            let clipped: Vec<usize> = rasterize_line(&grid, c(x0, y0), c(x1, y1)).collect();
            prop_assert_eq!(clipped, filtered);
        }

        #[test]
        fn path_is_eight_connected(
            x0 in -20i32..20, y0 in -20i32..20,
            x1 in -20i32..20, y1 in -20i32..20,
        ) {
            let cells = walk(c(x0, y0), c(x1, y1));
            prop_assert_eq!(cells.first().copied(), Some(c(x0, y0)));
            prop_assert_eq!(cells.last().copied(), Some(c(x1, y1)));
            for pair in cells.windows(2) {
                let ddx = (pair[1].x - pair[0].x).abs();
                let ddy = (pair[1].y - pair[0].y).abs();
                prop_assert!(ddx <= 1 && ddy <= 1 && (ddx + ddy) > 0,
                    "gap between {:?} and {:?}", pair[0], pair[1]);
            }
            let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            prop_assert_eq!(cells.len(), expected);
        }

        #[test]
        fn reversed_line_covers_same_length(
            x0 in -20i32..20, y0 in -20i32..20,
            x1 in -20i32..20, y1 in -20i32..20,
        ) {
            let fwd = walk(c(x0, y0), c(x1, y1));
            let back = walk(c(x1, y1), c(x0, y0));
            prop_assert_eq!(fwd.len(), back.len());
        }

        #[test]
        fn rasterized_cells_are_in_bounds(
            x0 in -10i32..20, y0 in -10i32..20,
            x1 in -10i32..20, y1 in -10i32..20,
        ) {
            let grid = Grid2D::new(12, 9).unwrap();
            let on_grid = walk(c(x0, y0), c(x1, y1))
                .into_iter()
                .filter(|&p| grid.contains(p))
                .count();
            let cells: Vec<usize> = rasterize_line(&grid, c(x0, y0), c(x1, y1)).collect();
            prop_assert_eq!(cells.len(), on_grid);
            prop_assert!(cells.iter().all(|&i| i < grid.cell_count()));
        }
    }
}
