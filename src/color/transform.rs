//! CIE XYZ (D65) → linear RGB with ITU-R BT.709 / sRGB primaries.
//!
//! No gamma encoding and no clamping: out-of-gamut colors keep their negative
//! channels. Normalization for display is a separate, explicit step.

use nalgebra::{Matrix3, Vector3};

use crate::domain::{LinearRgb, Xyz};

/// Row-major XYZ → linear RGB matrix.
#[rustfmt::skip]
const XYZ_TO_RGB: [f64; 9] = [
     3.2404542, -1.5371385, -0.4985314,
    -0.9692660,  1.8760108,  0.0415560,
     0.0556434, -0.2040259,  1.0572252,
];

fn xyz_to_rgb_matrix() -> Matrix3<f64> {
    Matrix3::from_row_slice(&XYZ_TO_RGB)
}

/// Convert XYZ to linear RGB.
pub fn xyz_to_rgb(xyz: Xyz) -> LinearRgb {
    let rgb = xyz_to_rgb_matrix() * Vector3::new(xyz.x, xyz.y, xyz.z);
    LinearRgb {
        r: rgb[0],
        g: rgb[1],
        b: rgb[2],
    }
}

/// Scale `rgb` so its largest channel is `1.0`.
///
/// Returns black when the largest channel is not a positive finite number, so
/// zero spectra never turn into NaNs.
pub fn normalize_rgb(rgb: LinearRgb) -> LinearRgb {
    let max = rgb.max_channel();
    if !(max.is_finite() && max > 0.0) {
        return LinearRgb::default();
    }
    LinearRgb {
        r: rgb.r / max,
        g: rgb.g / max,
        b: rgb.b / max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRECISION: f64 = 1e-4;

    fn assert_rgb(got: LinearRgb, r: f64, g: f64, b: f64) {
        assert!((got.r - r).abs() < PRECISION, "r: expected {r}, got {}", got.r);
        assert!((got.g - g).abs() < PRECISION, "g: expected {g}, got {}", got.g);
        assert!((got.b - b).abs() < PRECISION, "b: expected {b}, got {}", got.b);
    }

    fn xyz(x: f64, y: f64, z: f64) -> Xyz {
        Xyz { x, y, z }
    }

    #[test]
    fn converts_zero() {
        assert_rgb(xyz_to_rgb(xyz(0.0, 0.0, 0.0)), 0.0, 0.0, 0.0);
    }

    #[test]
    fn converts_one_and_half() {
        assert_rgb(xyz_to_rgb(xyz(1.0, 1.0, 1.0)), 1.20478, 0.9483, 0.90884);
        assert_rgb(xyz_to_rgb(xyz(0.5, 0.5, 0.5)), 0.60239, 0.47415, 0.45442);
    }

    #[test]
    fn converts_unit_axes() {
        assert_rgb(xyz_to_rgb(xyz(1.0, 0.0, 0.0)), 3.240454, -0.969266, 0.055643);
        assert_rgb(xyz_to_rgb(xyz(0.0, 1.0, 0.0)), -1.53714, 1.87601, -0.20403);
        assert_rgb(xyz_to_rgb(xyz(0.0, 0.0, 1.0)), -0.498531, 0.041556, 1.057225);
    }

    #[test]
    fn normalize_scales_max_channel_to_one() {
        let n = normalize_rgb(LinearRgb { r: 4.0, g: 2.0, b: -1.0 });
        assert_eq!(n, LinearRgb { r: 1.0, g: 0.5, b: -0.25 });
    }

    #[test]
    fn normalize_black_stays_black() {
        assert_eq!(normalize_rgb(LinearRgb::default()), LinearRgb::default());
        let negative = LinearRgb { r: -1.0, g: -2.0, b: -3.0 };
        assert_eq!(normalize_rgb(negative), LinearRgb::default());
    }
}
