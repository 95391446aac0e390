//! Three-buffer ring with O(1) rotation.

/// The three amplitude buffers of a grid, addressed by role.
///
/// Roles move, data does not: [`rotate`](FieldRing::rotate) exchanges the
/// `Vec` headers (pointer, length, capacity) so a step never copies cells
/// between buffers.
#[derive(Clone, Debug)]
pub struct FieldRing {
    current: Vec<f32>,
    previous: Vec<f32>,
    scratch: Vec<f32>,
    rotations: u64,
}

impl FieldRing {
    /// Allocate three zero-filled buffers of `len` cells.
    pub fn zeroed(len: usize) -> Self {
        Self {
            current: vec![0.0; len],
            previous: vec![0.0; len],
            scratch: vec![0.0; len],
            rotations: 0,
        }
    }

    /// Cells per buffer.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Whether the buffers hold no cells.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Amplitude at time t.
    pub fn current(&self) -> &[f32] {
        &self.current
    }

    /// Amplitude at time t-1.
    pub fn previous(&self) -> &[f32] {
        &self.previous
    }

    /// Write target for time t+1. Contents are stale between steps.
    pub fn scratch(&self) -> &[f32] {
        &self.scratch
    }

    /// Disjoint mutable access to all three roles: `(current, previous, scratch)`.
    pub fn split_mut(&mut self) -> (&mut [f32], &mut [f32], &mut [f32]) {
        (&mut self.current, &mut self.previous, &mut self.scratch)
    }

    /// Promote the freshly written scratch buffer.
    ///
    /// `previous ← current`, `current ← scratch`, `scratch ← previous`.
    /// Constant time regardless of grid size.
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.previous, &mut self.current);
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.rotations += 1;
    }

    /// Number of rotations since allocation or the last [`zero`](Self::zero).
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    /// Zero-fill all three buffers in place.
    pub fn zero(&mut self) {
        self.current.fill(0.0);
        self.previous.fill(0.0);
        self.scratch.fill(0.0);
        self.rotations = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_buffers() {
        let ring = FieldRing::zeroed(12);
        assert_eq!(ring.len(), 12);
        assert!(ring.current().iter().all(|&v| v == 0.0));
        assert!(ring.previous().iter().all(|&v| v == 0.0));
        assert!(ring.scratch().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn rotation_moves_roles_not_data() {
        let mut ring = FieldRing::zeroed(4);
        let cur = ring.current().as_ptr();
        let prev = ring.previous().as_ptr();
        let scratch = ring.scratch().as_ptr();

        ring.rotate();

        assert_eq!(ring.previous().as_ptr(), cur);
        assert_eq!(ring.current().as_ptr(), scratch);
        assert_eq!(ring.scratch().as_ptr(), prev);
        assert_eq!(ring.rotations(), 1);
    }

    #[test]
    fn three_rotations_restore_roles() {
        let mut ring = FieldRing::zeroed(4);
        let cur = ring.current().as_ptr();
        for _ in 0..3 {
            ring.rotate();
        }
        assert_eq!(ring.current().as_ptr(), cur);
    }

    #[test]
    fn values_follow_their_buffer() {
        let mut ring = FieldRing::zeroed(2);
        {
            let (cur, prev, scratch) = ring.split_mut();
            cur.fill(1.0);
            prev.fill(2.0);
            scratch.fill(3.0);
        }
        ring.rotate();
        assert_eq!(ring.current(), &[3.0f32, 3.0]);
        assert_eq!(ring.previous(), &[1.0f32, 1.0]);
        assert_eq!(ring.scratch(), &[2.0f32, 2.0]);
    }

    #[test]
    fn zero_resets_values_and_counter() {
        let mut ring = FieldRing::zeroed(3);
        ring.split_mut().0.fill(5.0);
        ring.rotate();
        ring.zero();
        assert_eq!(ring.rotations(), 0);
        assert!(ring.current().iter().all(|&v| v == 0.0));
        assert!(ring.previous().iter().all(|&v| v == 0.0));
    }
}
