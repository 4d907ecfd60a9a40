//! Reporting utilities: formatted terminal output for spectra and colors.

pub mod format;

pub use format::*;
