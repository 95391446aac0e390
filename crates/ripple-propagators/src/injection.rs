//! Sources compiled into per-cell injection counts.
//!
//! Matching every source against every interior cell costs
//! `O(cells * sources)`. The plan folds the registry into an
//! insertion-ordered map from flat index to multiplicity once per step, so
//! injection costs `O(distinct source cells)`.

use indexmap::IndexMap;
use ripple_core::SourceRegistry;
use ripple_space::Grid2D;

/// Interior cells that receive the driving signal, with how many sources
/// sit on each.
#[derive(Clone, Debug, Default)]
pub struct InjectionPlan {
    cells: IndexMap<usize, u32>,
}

impl InjectionPlan {
    /// Compile `sources` against `grid`.
    ///
    /// Sources on the border or off-grid are dropped: they never match an
    /// interior cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_core::SourceRegistry;
    /// use ripple_propagators::InjectionPlan;
    /// use ripple_space::Grid2D;
    ///
    /// let grid = Grid2D::new(8, 8).unwrap();
    /// let mut sources = SourceRegistry::new();
    /// sources.add(3, 3);
    /// sources.add(3, 3);
    /// sources.add(0, 3); // border
    /// sources.add(20, 3); // off-grid
    ///
    /// let plan = InjectionPlan::compile(&grid, &sources);
    /// assert_eq!(plan.len(), 1);
    /// assert_eq!(plan.multiplicity(3 + 3 * 8), 2);
    /// ```
    pub fn compile(grid: &Grid2D, sources: &SourceRegistry) -> Self {
        let mut plan = Self::default();
        plan.rebuild(grid, sources);
        plan
    }

    /// Recompile in place, reusing the map's allocation.
    pub fn rebuild(&mut self, grid: &Grid2D, sources: &SourceRegistry) {
        self.cells.clear();
        for source in sources {
            if let Some(idx) = grid.interior_index(source.coord) {
                *self.cells.entry(idx).or_insert(0) += 1;
            }
        }
    }

    /// Number of sources on cell `idx` (0 if none).
    pub fn multiplicity(&self, idx: usize) -> u32 {
        self.cells.get(&idx).copied().unwrap_or(0)
    }

    /// `(cell, multiplicity)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.cells.iter().map(|(&idx, &n)| (idx, n))
    }

    /// Number of distinct cells receiving injection.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no interior cell receives injection.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Add `signal` to `scratch` once per source, skipping wall cells.
    ///
    /// Co-located sources add sequentially, the same arithmetic as
    /// injecting them one at a time. Returns the number of terms added.
    pub fn apply(&self, scratch: &mut [f32], walls: &[bool], signal: f32) -> usize {
        let mut applied = 0;
        for (idx, n) in self.iter() {
            if walls[idx] {
                continue;
            }
            for _ in 0..n {
                scratch[idx] += signal;
            }
            applied += n as usize;
        }
        applied
    }
}
