//! Colorimetry: the CIE 1931 table, spectrum integration and the RGB transform.

pub mod cie;
pub mod integrate;
pub mod transform;

pub use cie::*;
pub use integrate::*;
pub use transform::*;
