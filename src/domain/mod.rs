//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - unit newtypes (`Nanometers`, `Kelvin`, `SpectralRadiance`)
//! - sampled spectra (`Spectrum`)
//! - color triples (`Xyz`, `LinearRgb`)
//! - the run configuration and the JSON export schema (`RunConfig`, `ColorFile`)

pub mod types;

pub use types::*;
