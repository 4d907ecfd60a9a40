//! Input/output helpers.
//!
//! - spectrum samples to CSV (`export`)
//! - color JSON read/write (`color_json`)

pub mod color_json;
pub mod export;

pub use color_json::*;
pub use export::*;
