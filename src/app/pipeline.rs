//! Shared "color pipeline" logic used by the CLI commands and by exports.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! Planck sampling -> CIE XYZ integration -> linear RGB -> normalization
//!
//! The commands can then focus on presentation (printing, plotting, exporting).

use crate::color::{CIE_LAMBDA_END, CIE_LAMBDA_START, CIE_SAMPLES, normalize_rgb, to_xyz, xyz_to_rgb};
use crate::domain::{
    ColorFile, Kelvin, LinearRgb, Nanometers, RunConfig, SpectralRadiance, Spectrum, Xyz,
};
use crate::error::AppError;
use crate::math::{peak_radiance, peak_wavelength, sample_spectrum};

/// All computed outputs of a single `blackbody color` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub temperature: Kelvin,
    /// Spectrum over the requested display range.
    pub spectrum: Spectrum,
    pub xyz: Xyz,
    pub rgb: LinearRgb,
    pub rgb_normalized: LinearRgb,
    pub peak_wavelength: Nanometers,
    pub peak_radiance: SpectralRadiance,
}

impl RunOutput {
    /// Serializable snapshot for the JSON export.
    pub fn to_color_file(&self) -> ColorFile {
        ColorFile {
            tool: "blackbody".to_string(),
            temperature: self.temperature,
            peak_wavelength: self.peak_wavelength,
            peak_radiance: self.peak_radiance,
            xyz: self.xyz,
            rgb: self.rgb,
            rgb_normalized: self.rgb_normalized,
            spectrum: self.spectrum.clone(),
        }
    }
}

/// Execute the full pipeline and return the computed outputs.
pub fn run(config: &RunConfig) -> Result<RunOutput, AppError> {
    let t = config.temperature;

    // 1) Spectrum for display.
    let spectrum = sample_spectrum(config.start, config.end, config.sample_count, t);
    tracing::debug!(
        start = config.start.value(),
        end = config.end.value(),
        samples = spectrum.len(),
        "sampled display spectrum"
    );

    // 2) Spectrum on the CIE domain (reused when the display range already is).
    let xyz = if is_cie_domain(&spectrum) {
        to_xyz(&spectrum.samples)?
    } else {
        let cie = sample_spectrum(CIE_LAMBDA_START, CIE_LAMBDA_END, CIE_SAMPLES, t);
        to_xyz(&cie.samples)?
    };

    // 3) Color space transform.
    let rgb = xyz_to_rgb(xyz);
    let rgb_normalized = normalize_rgb(rgb);
    tracing::debug!(?xyz, ?rgb, "integrated color");

    Ok(RunOutput {
        temperature: t,
        spectrum,
        xyz,
        rgb,
        rgb_normalized,
        peak_wavelength: peak_wavelength(t),
        peak_radiance: peak_radiance(t),
    })
}

fn is_cie_domain(spectrum: &Spectrum) -> bool {
    spectrum.start == CIE_LAMBDA_START
        && spectrum.end == CIE_LAMBDA_END
        && spectrum.len() == CIE_SAMPLES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(t: f64) -> RunConfig {
        RunConfig {
            temperature: Kelvin(t),
            start: CIE_LAMBDA_START,
            end: CIE_LAMBDA_END,
            sample_count: CIE_SAMPLES,
            print_samples: false,
            print_normalized: false,
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export_csv: None,
            export_json: None,
        }
    }

    #[test]
    fn candle_is_red_dominant() {
        let out = run(&config(1500.0)).unwrap();
        assert_eq!(out.rgb_normalized.r, 1.0);
        assert!(out.rgb.r > out.rgb.g && out.rgb.g > out.rgb.b);
        assert!(out.rgb.b < 0.0, "1500K lies outside the sRGB gamut");
    }

    #[test]
    fn hot_body_is_blue_dominant() {
        let out = run(&config(10000.0)).unwrap();
        assert_eq!(out.rgb_normalized.b, 1.0);
        assert!(out.rgb_normalized.r < out.rgb_normalized.g);
    }

    #[test]
    fn daylight_is_nearly_white() {
        let out = run(&config(6500.0)).unwrap();
        let n = out.rgb_normalized;
        assert!(n.r > 0.95 && n.g > 0.9 && n.b > 0.95, "{n:?}");
        assert!((out.peak_wavelength.value() - 445.81107).abs() < 1e-4);
    }

    #[test]
    fn display_range_does_not_change_color() {
        let full = run(&config(3000.0)).unwrap();
        let mut narrow = config(3000.0);
        narrow.start = Nanometers(500.0);
        narrow.end = Nanometers(600.0);
        narrow.sample_count = 11;
        let out = run(&narrow).unwrap();

        assert_eq!(out.spectrum.len(), 11);
        assert_eq!(out.spectrum.wavelength_at(10), Nanometers(600.0));
        assert_eq!(out.xyz, full.xyz);
        assert_eq!(out.rgb, full.rgb);
    }

    #[test]
    fn invalid_display_range_yields_zero_samples() {
        let mut inverted = config(3000.0);
        inverted.start = Nanometers(700.0);
        inverted.end = Nanometers(400.0);
        inverted.sample_count = 5;
        let out = run(&inverted).unwrap();
        assert!(out.spectrum.samples.iter().all(|s| s.value() == 0.0));
        assert!(out.xyz.y > 0.0);
    }

    #[test]
    fn color_file_mirrors_output() {
        let out = run(&config(2700.0)).unwrap();
        let file = out.to_color_file();
        assert_eq!(file.tool, "blackbody");
        assert_eq!(file.xyz, out.xyz);
        assert_eq!(file.spectrum, out.spectrum);
    }
}
