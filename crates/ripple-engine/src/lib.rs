//! Simulation engine for the Ripple wave-field simulator.
//!
//! Ties the grid state, source registry and integrator into a
//! [`WaveWorld`] with a serialized mutation API, a bounded command
//! [`IngressQueue`] for input arriving on other threads, and a
//! [`RealtimeWorld`] that steps and renders on a background thread at a
//! fixed cadence.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod ingress;
pub mod metrics;
pub mod realtime;
pub mod world;

pub use config::{ConfigError, RealtimeConfig, WorldConfig};
pub use ingress::{CommandBatch, CommandSender, IngressQueue};
pub use metrics::StepMetrics;
pub use realtime::{Frame, RealtimeWorld};
pub use world::WaveWorld;
