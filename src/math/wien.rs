//! Wien's displacement law: `λ_peak = b / T`.

use crate::domain::{Kelvin, Nanometers, SpectralRadiance};
use crate::math::planck::sample;

/// Wien's displacement constant, mantissa of 2.897771955e-3 m·K.
pub const WIEN_DISPLACEMENT: f64 = 2.897771955;

/// Converts `b / T` from the mantissa above to nanometers.
const NANOMETER_SCALE: f64 = 1.0e6;

/// Wavelength of maximum spectral radiance at temperature `t`.
///
/// `t <= 0` has no peak; like the radiance functions this degrades to a zero
/// wavelength rather than an error or an infinity.
pub fn peak_wavelength(t: Kelvin) -> Nanometers {
    let t = t.value();
    if !(t > 0.0) {
        return Nanometers::ZERO;
    }
    Nanometers(NANOMETER_SCALE * WIEN_DISPLACEMENT / t)
}

/// Spectral radiance at the Wien peak.
pub fn peak_radiance(t: Kelvin) -> SpectralRadiance {
    sample(peak_wavelength(t), t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRECISION: f64 = 1e-4;

    #[test]
    fn reference_peaks() {
        // Candle, sodium lamp, 40W and 200W bulbs, fluorescent, D50, D65, blue sky.
        let cases = [
            (1500.0, 1931.847970),
            (2000.0, 1448.885978),
            (2600.0, 1114.527675),
            (3000.0, 965.923985),
            (4000.0, 724.442989),
            (5000.0, 579.554391),
            (6500.0, 445.811070),
            (10000.0, 289.777196),
        ];
        for (t, expected) in cases {
            let got = peak_wavelength(Kelvin(t)).value();
            assert!((got - expected).abs() < PRECISION, "T={t}: expected {expected}, got {got}");
        }
    }

    #[test]
    fn non_positive_temperature_has_zero_peak() {
        assert_eq!(peak_wavelength(Kelvin(-500.0)), Nanometers::ZERO);
        assert_eq!(peak_wavelength(Kelvin(0.0)), Nanometers::ZERO);
        assert_eq!(peak_radiance(Kelvin(0.0)), SpectralRadiance::ZERO);
    }

    #[test]
    fn peak_is_a_local_maximum() {
        for t in [1500.0, 2600.0, 4000.0, 6500.0, 10000.0] {
            let t = Kelvin(t);
            let peak = peak_wavelength(t).value();
            let at_peak = peak_radiance(t).value();
            let below = sample(Nanometers(peak * 0.99), t).value();
            let above = sample(Nanometers(peak * 1.01), t).value();
            assert!(at_peak > below && at_peak > above, "{t:?}: {below} / {at_peak} / {above}");
        }
    }

    #[test]
    fn radiance_rises_then_falls_around_peak() {
        let t = Kelvin(3000.0);
        let peak = peak_wavelength(t).value();
        let mut prev = 0.0;
        for i in 1..=10 {
            let s = sample(Nanometers(peak * i as f64 / 10.0), t).value();
            assert!(s > prev, "not rising at step {i}");
            prev = s;
        }
        for i in 11..=30 {
            let s = sample(Nanometers(peak * i as f64 / 10.0), t).value();
            assert!(s < prev, "not falling at step {i}");
            prev = s;
        }
    }

    #[test]
    fn reference_peak_radiances() {
        let cases = [
            (1500.0, 31_101_529_569.608_772),
            (2000.0, 131_061_589_626.664_22),
            (2600.0, 486_622_507_972.530_33),
            (3000.0, 995_248_946_227.480_71),
            (4000.0, 4_193_970_868_053.254_9),
            (5000.0, 12_798_983_361_978.928),
            (6500.0, 47_521_729_294_192.414),
            (10000.0, 409_567_467_583_325.69),
        ];
        for (t, expected) in cases {
            let got = peak_radiance(Kelvin(t)).value();
            assert!((got - expected).abs() < PRECISION, "T={t}: expected {expected}, got {got}");
        }
    }
}
