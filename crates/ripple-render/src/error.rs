//! Render errors.

use std::error::Error;
use std::fmt;

/// Errors from filling a caller-provided pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The buffer is not exactly `4 * cell_count` bytes.
    BufferSize {
        /// Required length in bytes.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferSize { expected, actual } => {
                write!(f, "pixel buffer is {actual} bytes, expected {expected}")
            }
        }
    }
}

impl Error for RenderError {}
