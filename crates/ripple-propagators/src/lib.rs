//! Field integration for the Ripple simulator.
//!
//! - [`WaveIntegrator`]: one explicit step of the damped 2D wave equation
//!   with wall pinning and continuous source injection.
//! - [`InjectionPlan`]: sources compiled to `(cell, multiplicity)` pairs.
//! - [`energy`]: diagnostics over a field (sum of squares, the damped
//!   leapfrog energy, non-finite detection).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod energy;
pub mod injection;
pub mod wave_propagation;

pub use energy::{discrete_energy, field_energy, first_non_finite, peak_amplitude};
pub use injection::InjectionPlan;
pub use wave_propagation::{step, StepReport, WaveIntegrator};
