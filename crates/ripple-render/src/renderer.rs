//! Snapshot to RGBA8 frame.

use ripple_arena::Snapshot;

use crate::color::cell_color;
use crate::error::RenderError;

/// Fills RGBA8 frames from snapshots.
///
/// Stateless; one pixel per cell, row-major, so a frame is
/// `4 * nx * ny` bytes.
///
/// # Examples
///
/// ```
/// use ripple_arena::GridState;
/// use ripple_core::GridCoord;
/// use ripple_render::Renderer;
///
/// let mut state = GridState::new(4, 2).unwrap();
/// state.draw_wall(GridCoord::new(0, 0), GridCoord::new(0, 0));
///
/// let pixels = Renderer::new().render(&state.snapshot());
/// assert_eq!(pixels.len(), 32);
/// assert_eq!(&pixels[..8], &[50, 50, 50, 255, 128, 128, 128, 255]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer;

impl Renderer {
    /// Create a renderer.
    pub fn new() -> Self {
        Self
    }

    /// Bytes needed for a frame of `snapshot`.
    pub fn frame_len(&self, snapshot: &Snapshot<'_>) -> usize {
        snapshot.grid().cell_count() * 4
    }

    /// Fill `out` with the frame for `snapshot`.
    ///
    /// Returns [`RenderError::BufferSize`] when `out` is not exactly
    /// [`frame_len`](Renderer::frame_len) bytes; `out` is left untouched.
    pub fn render_into(&self, snapshot: &Snapshot<'_>, out: &mut [u8]) -> Result<(), RenderError> {
        let expected = self.frame_len(snapshot);
        if out.len() != expected {
            return Err(RenderError::BufferSize {
                expected,
                actual: out.len(),
            });
        }
        fill(snapshot, out);
        Ok(())
    }

    /// Allocate and fill a frame for `snapshot`.
    pub fn render(&self, snapshot: &Snapshot<'_>) -> Vec<u8> {
        let mut out = vec![0; self.frame_len(snapshot)];
        fill(snapshot, &mut out);
        out
    }
}

fn fill(snapshot: &Snapshot<'_>, out: &mut [u8]) {
    for (px, (amplitude, wall)) in out.chunks_exact_mut(4).zip(snapshot.cells()) {
        px.copy_from_slice(&cell_color(amplitude, wall).to_bytes());
    }
}
