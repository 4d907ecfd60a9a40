//! Spectrum → CIE XYZ reduction.
//!
//! Each channel is a Riemann sum of the spectrum weighted by its
//! color-matching function:
//!
//! ```text
//! C = Σ c̄ᵢ · Sᵢ · (λ_end − λ_start) / (Y_INTEGRAL · N)
//! ```
//!
//! The scale only depends on table constants, so a flat unit spectrum lands
//! close to the reference white regardless of the input.

use crate::color::cie::{CIE_LAMBDA_END, CIE_LAMBDA_START, CIE_SAMPLES, CIE_X, CIE_Y, CIE_Z, Y_INTEGRAL};
use crate::domain::{SpectralRadiance, Xyz};
use crate::error::ColorError;

/// Constant factor applied to every channel sum.
pub fn integration_scale() -> f64 {
    (CIE_LAMBDA_END.value() - CIE_LAMBDA_START.value()) / (Y_INTEGRAL * CIE_SAMPLES as f64)
}

/// Integrate a spectrum sampled on the CIE domain into XYZ.
///
/// `samples` must hold exactly [`CIE_SAMPLES`] values, one per table entry.
/// Whether they were actually taken at the matching wavelengths is up to the
/// caller.
pub fn to_xyz(samples: &[SpectralRadiance]) -> Result<Xyz, ColorError> {
    if samples.len() != CIE_SAMPLES {
        return Err(ColorError::LengthMismatch {
            expected: CIE_SAMPLES,
            actual: samples.len(),
        });
    }

    let mut xyz = Xyz::default();
    for (i, s) in samples.iter().enumerate() {
        let s = s.value();
        xyz.x += CIE_X[i] * s;
        xyz.y += CIE_Y[i] * s;
        xyz.z += CIE_Z[i] * s;
    }

    let scale = integration_scale();
    Ok(Xyz {
        x: xyz.x * scale,
        y: xyz.y * scale,
        z: xyz.z * scale,
    })
}
