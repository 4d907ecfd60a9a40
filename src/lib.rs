//! `blackbody-color` library crate.
//!
//! The binary (`blackbody`) is a thin wrapper around this library so that:
//!
//! - the numeric pipeline (Planck → CIE XYZ → linear RGB) is testable without
//!   spawning processes
//! - other tools can reuse the spectra and color conversions directly

pub mod app;
pub mod cli;
pub mod color;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
