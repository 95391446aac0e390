//! Core types for the Ripple wave-field simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: tick ids and grid
//! coordinates, the error taxonomy, simulation parameters, point sources
//! and the command type used to serialize mutations with the step loop.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod id;
pub mod params;
pub mod source;

pub use command::Command;
pub use error::{GridError, IngressError};
pub use id::{GridCoord, TickId};
pub use params::{DriveConfig, WaveParams};
pub use source::{Source, SourceRegistry};
