//! Shared domain types.
//!
//! Physical quantities are wrapped in distinct newtypes so a temperature can
//! never be passed where a wavelength is expected. They are `Copy`, cheap, and
//! serializable so they can be:
//!
//! - used in-memory by the numeric core
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A wavelength in nanometers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nanometers(pub f64);

/// A thermodynamic temperature in kelvin.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(pub f64);

/// Spectral radiance in W·sr⁻¹·m⁻³.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpectralRadiance(pub f64);

impl Nanometers {
    pub const ZERO: Self = Self(0.0);

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Kelvin {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl SpectralRadiance {
    pub const ZERO: Self = Self(0.0);

    pub fn value(self) -> f64 {
        self.0
    }
}

/// A uniformly sampled spectrum over the closed interval `[start, end]`.
///
/// Sample `i` belongs to `start + (end - start) * i / (n - 1)`; a single sample
/// sits at `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    pub start: Nanometers,
    pub end: Nanometers,
    pub samples: Vec<SpectralRadiance>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Wavelength of sample `index` on the sampling grid.
    ///
    /// The last sample is labelled with `end` exactly, like the sampler takes it.
    pub fn wavelength_at(&self, index: usize) -> Nanometers {
        let n = self.samples.len();
        if n < 2 {
            return self.start;
        }
        if index + 1 == n {
            return self.end;
        }
        let (start, end) = (self.start.value(), self.end.value());
        Nanometers(start + (end - start) * index as f64 / (n - 1) as f64)
    }

    /// `(wavelength, radiance)` pairs in sampling order.
    pub fn points(&self) -> impl Iterator<Item = (Nanometers, SpectralRadiance)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &s)| (self.wavelength_at(i), s))
    }

    /// Largest sample value, or `None` for an empty spectrum.
    pub fn max_radiance(&self) -> Option<SpectralRadiance> {
        self.samples
            .iter()
            .copied()
            .reduce(|a, b| if a.value() >= b.value() { a } else { b })
    }

    /// Samples divided by the largest sample.
    ///
    /// An all-zero spectrum (for example one produced from invalid inputs) stays
    /// all-zero instead of turning into NaNs.
    pub fn normalized(&self) -> Vec<f64> {
        let max = self.max_radiance().map(SpectralRadiance::value).unwrap_or(0.0);
        if !(max.is_finite() && max > 0.0) {
            return vec![0.0; self.samples.len()];
        }
        self.samples.iter().map(|s| s.value() / max).collect()
    }
}

/// CIE 1931 XYZ tristimulus values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Linear (non gamma-encoded) RGB with BT.709 primaries.
///
/// Channels are unbounded: colors outside the gamut have negative components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    pub fn max_channel(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus environment defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub temperature: Kelvin,

    /// Display range; color is always integrated over the CIE domain.
    pub start: Nanometers,
    pub end: Nanometers,
    pub sample_count: usize,

    pub print_samples: bool,
    pub print_normalized: bool,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// A saved color file (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorFile {
    pub tool: String,
    pub temperature: Kelvin,
    pub peak_wavelength: Nanometers,
    pub peak_radiance: SpectralRadiance,
    pub xyz: Xyz,
    pub rgb: LinearRgb,
    pub rgb_normalized: LinearRgb,
    pub spectrum: Spectrum,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spectrum(values: &[f64]) -> Spectrum {
        Spectrum {
            start: Nanometers(400.0),
            end: Nanometers(500.0),
            samples: values.iter().copied().map(SpectralRadiance).collect(),
        }
    }

    #[test]
    fn wavelength_grid_hits_both_endpoints() {
        let s = spectrum(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(s.wavelength_at(0), Nanometers(400.0));
        assert_eq!(s.wavelength_at(2), Nanometers(450.0));
        assert_eq!(s.wavelength_at(4), Nanometers(500.0));
    }

    #[test]
    fn last_label_is_exactly_end() {
        // Interpolating to the last index gives 830.3000000000001 here.
        let s = Spectrum {
            start: Nanometers(0.1),
            end: Nanometers(830.3),
            samples: vec![SpectralRadiance::ZERO; 11],
        };
        assert_eq!(s.wavelength_at(10), Nanometers(830.3));
        assert_eq!(s.points().last().map(|(l, _)| l), Some(Nanometers(830.3)));
    }

    #[test]
    fn single_sample_sits_at_start() {
        let s = spectrum(&[7.0]);
        assert_eq!(s.wavelength_at(0), Nanometers(400.0));
        assert_eq!(s.points().count(), 1);
    }

    #[test]
    fn normalized_peaks_at_one() {
        let s = spectrum(&[1.0, 4.0, 2.0]);
        assert_eq!(s.max_radiance(), Some(SpectralRadiance(4.0)));
        assert_eq!(s.normalized(), vec![0.25, 1.0, 0.5]);
    }

    #[test]
    fn normalized_all_zero_stays_zero() {
        let s = spectrum(&[0.0, 0.0, 0.0]);
        assert_eq!(s.normalized(), vec![0.0, 0.0, 0.0]);
        assert!(spectrum(&[]).max_radiance().is_none());
    }

    #[test]
    fn unit_newtypes_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&Kelvin(6500.0)).unwrap();
        assert_eq!(json, "6500.0");
    }
}
