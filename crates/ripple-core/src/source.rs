//! Point sources and the ordered registry the integrator injects from.

use crate::id::GridCoord;

/// A point source: a grid cell that continuously injects the driving signal.
///
/// Sources are not bounds-checked. A source outside the grid interior
/// simply never matches a cell during injection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Source {
    /// Location of the source.
    pub coord: GridCoord,
}

impl Source {
    /// Create a source at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            coord: GridCoord::new(x, y),
        }
    }
}

/// Ordered collection of active sources.
///
/// Append-only with bulk clear. Duplicates are kept: two sources at the
/// same cell inject twice.
///
/// # Examples
///
/// ```
/// use ripple_core::SourceRegistry;
///
/// let mut sources = SourceRegistry::new();
/// sources.add(4, 4);
/// sources.add(4, 4);
/// sources.add(-1, 9);
/// assert_eq!(sources.len(), 3);
///
/// sources.clear();
/// assert!(sources.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceRegistry {
    sources: Vec<Source>,
}

impl SourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source at `(x, y)`.
    pub fn add(&mut self, x: i32, y: i32) {
        self.sources.push(Source::new(x, y));
    }

    /// Remove every source.
    pub fn clear(&mut self) {
        self.sources.clear();
    }

    /// Sources in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Source> {
        self.sources.iter()
    }

    /// Sources as a slice, in insertion order.
    pub fn as_slice(&self) -> &[Source] {
        &self.sources
    }

    /// Number of sources, duplicates included.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the registry holds no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<'a> IntoIterator for &'a SourceRegistry {
    type Item = &'a Source;
    type IntoIter = std::slice::Iter<'a, Source>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Source> for SourceRegistry {
    fn extend<T: IntoIterator<Item = Source>>(&mut self, iter: T) {
        self.sources.extend(iter);
    }
}
