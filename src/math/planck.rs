//! Planck's law for an ideal black body.
//!
//! Spectral radiance per unit wavelength:
//!
//! - `S(λ, T) = 2hc² / (λ⁵ · (exp(hc / (λkT)) − 1))`
//!
//! Numerical notes:
//! - The SI constants are stored without their decimal exponents. The
//!   exponents are folded back in as `1e6` inside the exponential and `1e27` on
//!   the result, which keeps intermediates well scaled with λ in nanometers.
//! - `exp(x) − 1` is evaluated literally rather than with `exp_m1`; the
//!   reference radiances are defined by that rounding.
//! - For `T → 0` the exponent diverges and the quotient goes to exactly `0.0`
//!   in floating point; there is no dedicated branch for it.

use rayon::prelude::*;

use crate::domain::{Kelvin, Nanometers, SpectralRadiance, Spectrum};

/// Planck constant, mantissa of 6.62607015e-34 J·s.
pub const PLANCK: f64 = 6.62607015;

/// Boltzmann constant, mantissa of 1.380649e-23 J/K.
pub const BOLTZMANN: f64 = 1.380649;

/// Speed of light, mantissa of 2.99792458e8 m/s.
pub const SPEED_OF_LIGHT: f64 = 2.99792458;

/// Exponent correction inside `exp(hc / (λkT))` for λ in nanometers.
const EXPONENT_SCALE: f64 = 1.0e6;

/// Exponent correction on the final radiance for λ in nanometers.
const RADIANCE_SCALE: f64 = 1.0e27;

/// Spectral radiance of a black body at temperature `t` and wavelength `lambda`.
///
/// Negative (or NaN) wavelengths and temperatures are outside the physical
/// domain and yield zero radiance.
pub fn sample(lambda: Nanometers, t: Kelvin) -> SpectralRadiance {
    let lambda = lambda.value();
    let t = t.value();
    if !(lambda >= 0.0 && t >= 0.0) {
        return SpectralRadiance::ZERO;
    }

    let exponent = PLANCK * SPEED_OF_LIGHT / (lambda * BOLTZMANN * t) * EXPONENT_SCALE;
    let numerator = 2.0 * PLANCK * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
    let denominator = (lambda * lambda) * (lambda * lambda) * lambda * (exponent.exp() - 1.0);

    // λ → 0 gives 0 · ∞ (NaN) or, for -0.0, a signed zero; the radiance vanishes there.
    if denominator.is_nan() || denominator == 0.0 {
        return SpectralRadiance::ZERO;
    }

    SpectralRadiance(numerator * RADIANCE_SCALE / denominator)
}

/// Sample `count` evenly spaced wavelengths over `[start, end]` (inclusive).
///
/// The first and last samples are taken exactly at `start` and `end`. With
/// `count == 1` the single sample is taken at `start`.
///
/// If the range is inverted, either bound is negative, or the temperature is
/// negative, the whole result is zero; there are no partial results.
pub fn sample_range(
    start: Nanometers,
    end: Nanometers,
    count: usize,
    t: Kelvin,
) -> Vec<SpectralRadiance> {
    let (lo, hi) = (start.value(), end.value());
    let valid = lo >= 0.0 && hi >= 0.0 && lo <= hi && t.value() >= 0.0;
    if !valid {
        return vec![SpectralRadiance::ZERO; count];
    }
    if count == 1 {
        return vec![sample(start, t)];
    }

    let step_den = count.saturating_sub(1) as f64;
    (0..count)
        .into_par_iter()
        .map(|i| {
            let lambda = if i + 1 == count {
                hi
            } else {
                lo + (hi - lo) * i as f64 / step_den
            };
            sample(Nanometers(lambda), t)
        })
        .collect()
}

/// Like [`sample_range`], but keeps the sampling grid with the samples.
pub fn sample_spectrum(start: Nanometers, end: Nanometers, count: usize, t: Kelvin) -> Spectrum {
    Spectrum {
        start,
        end,
        samples: sample_range(start, end, count, t),
    }
}
