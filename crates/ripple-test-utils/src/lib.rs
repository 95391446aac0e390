//! Test fixtures for Ripple development.
//!
//! Grid states with seeded amplitude, walled enclosures and small
//! comparison helpers shared by the integration tests of every crate.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    driven_state, gaussian_bump, max_abs_diff, seed_impulse, seed_pulse, walled_box,
};
