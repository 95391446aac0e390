//! Grid geometry for the Ripple simulator.
//!
//! - [`Grid2D`]: validated `(nx, ny)` dimensions, flat indexing and the
//!   interior/border split the integrator relies on.
//! - [`BresenhamLine`] and [`rasterize_line`]: the symmetric integer line
//!   traversal used to turn a drag gesture into wall cells.
//! - [`Viewport`]: mapping between a display surface and grid cells.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid2d;
pub mod line;
pub mod viewport;

pub use grid2d::Grid2D;
pub use line::{rasterize_line, BresenhamLine, LineCells};
pub use viewport::Viewport;
