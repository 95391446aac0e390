//! Colour contract for the Ripple simulator.
//!
//! Maps a [`Snapshot`](ripple_arena::Snapshot) to row-major RGBA8 pixels,
//! one pixel per cell. Scaling the image to a display surface is left to
//! the host.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod renderer;

pub use color::{cell_color, intensity, Rgba, WALL_COLOR};
pub use error::RenderError;
pub use renderer::Renderer;
