//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the physics/colorimetry code stays clean and testable
//! - the output layout is fixed and covered by golden tests

use crate::app::pipeline::RunOutput;
use crate::domain::{Kelvin, LinearRgb, Nanometers, SpectralRadiance, Spectrum, Xyz};

/// One `"{λ}nm: {S}"` line per raw sample.
pub fn format_samples(spectrum: &Spectrum) -> String {
    let mut out = String::new();
    for (lambda, s) in spectrum.points() {
        out.push_str(&format!("{:.6}nm: {:.6}\n", lambda.value(), s.value()));
    }
    out
}

/// One `"{λ}nm: {S / max}"` line per sample.
pub fn format_normalized_samples(spectrum: &Spectrum) -> String {
    let mut out = String::new();
    for (i, n) in spectrum.normalized().into_iter().enumerate() {
        out.push_str(&format!("{:.6}nm: {n:.6}\n", spectrum.wavelength_at(i).value()));
    }
    out
}

/// Format the color block: XYZ, RGB, normalized RGB and the Wien peak.
pub fn format_color_summary(run: &RunOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("Black-body color for {:.6}K:\n", run.temperature.value()));
    out.push_str(&format!("XYZ:\t\t\t{}\n", fmt_xyz(run.xyz)));
    out.push_str(&format!("RGB:\t\t\t{}\n", fmt_rgb(run.rgb)));
    out.push_str(&format!("RGB(normalized):\t{}\n", fmt_rgb(run.rgb_normalized)));
    out.push_str(&format_peak_line(run.peak_wavelength, run.peak_radiance));
    out
}

/// Format the output of `blackbody peak`.
pub fn format_peak(t: Kelvin, wavelength: Nanometers, radiance: SpectralRadiance) -> String {
    let mut out = format!("Black-body peak for {:.6}K:\n", t.value());
    out.push_str(&format_peak_line(wavelength, radiance));
    out
}

fn format_peak_line(wavelength: Nanometers, radiance: SpectralRadiance) -> String {
    format!(
        "Peak:\t\t\t{:.6}nm ({:.6} W/(sr*m^3))\n",
        wavelength.value(),
        radiance.value()
    )
}

fn fmt_xyz(xyz: Xyz) -> String {
    fmt_triple(xyz.x, xyz.y, xyz.z)
}

fn fmt_rgb(rgb: LinearRgb) -> String {
    fmt_triple(rgb.r, rgb.g, rgb.b)
}

fn fmt_triple(a: f64, b: f64, c: f64) -> String {
    format!("[ {a:.6}, {b:.6}, {c:.6} ]")
}
