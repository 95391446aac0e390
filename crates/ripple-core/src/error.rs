//! Error types for the Ripple simulator.
//!
//! The core only fails on malformed geometry. Out-of-range coordinates and
//! numerically unstable parameters are accepted and have no error variants.

use std::error::Error;
use std::fmt;

/// Errors from grid construction and resizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// One or both dimensions are zero or negative.
    InvalidDimensions {
        /// Requested column count.
        nx: i64,
        /// Requested row count.
        ny: i64,
    },
    /// The cell count `nx * ny` does not fit the index type.
    DimensionTooLarge {
        /// Requested column count.
        nx: i64,
        /// Requested row count.
        ny: i64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { nx, ny } => {
                write!(f, "grid dimensions must be positive (nx={nx}, ny={ny})")
            }
            Self::DimensionTooLarge { nx, ny } => {
                write!(f, "grid of {nx}x{ny} cells exceeds the addressable size")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from the command ingress queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IngressError {
    /// The command queue is at capacity.
    QueueFull,
    /// The receiving side of the queue has been dropped.
    Disconnected,
}

impl fmt::Display for IngressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueFull => write!(f, "command queue full"),
            Self::Disconnected => write!(f, "command queue disconnected"),
        }
    }
}

impl Error for IngressError {}
