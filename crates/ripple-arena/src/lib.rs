//! Storage for the Ripple simulator.
//!
//! [`GridState`] exclusively owns the three amplitude buffers (held in a
//! [`FieldRing`]) and the [`WallMask`]. Nothing outside this crate can
//! write a cell directly: the integrator fills a [`StepView`] inside
//! [`GridState::integrate`], which rotates the buffers afterwards, and
//! walls change only through line rasterization.
//!
//! # Buffer layout
//!
//! ```text
//! current:  amplitude at t      ←─── read by the stencil, shown by snapshots
//! previous: amplitude at t-1    ←─── read by the stencil
//! scratch:  amplitude at t+1    ←─── written by the stencil
//! rotate(): previous ← current, current ← scratch, scratch ← previous
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod read;
pub mod ring;
pub mod state;
pub mod walls;

pub use read::Snapshot;
pub use ring::FieldRing;
pub use state::{GridState, StepView};
pub use walls::WallMask;
