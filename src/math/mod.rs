//! Black-body physics: Planck spectra and the Wien peak.

pub mod planck;
pub mod wien;

pub use planck::*;
pub use wien::*;
