//! Per-cell obstacle flags.

/// One flag per cell; `true` marks a reflecting wall.
///
/// Lives independently of the field buffers: a step never clears it, and
/// resetting the field keeps it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallMask {
    cells: Vec<bool>,
}

impl WallMask {
    /// A mask of `len` unmarked cells.
    pub fn empty(len: usize) -> Self {
        Self {
            cells: vec![false; len],
        }
    }

    /// Whether cell `idx` is a wall. Out-of-range indices are not walls.
    pub fn is_wall(&self, idx: usize) -> bool {
        self.cells.get(idx).copied().unwrap_or(false)
    }

    /// Mark cell `idx`. Returns `true` if it was not already a wall.
    pub(crate) fn mark(&mut self, idx: usize) -> bool {
        match self.cells.get_mut(idx) {
            Some(cell) if !*cell => {
                *cell = true;
                true
            }
            _ => false,
        }
    }

    /// Unmark every cell.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of marked cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&w| w).count()
    }

    /// Raw flags, indexed like the field buffers.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Cells in the mask.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the mask covers no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_reports_new_cells_only() {
        let mut m = WallMask::empty(4);
        assert!(m.mark(2));
        assert!(!m.mark(2));
        assert!(!m.mark(9));
        assert_eq!(m.count(), 1);
        assert!(m.is_wall(2));
        assert!(!m.is_wall(9));
    }

    #[test]
    fn clear_unmarks_all() {
        let mut m = WallMask::empty(3);
        m.mark(0);
        m.mark(1);
        m.clear();
        assert_eq!(m.count(), 0);
        assert_eq!(m.len(), 3);
    }
}
