//! Second-order band-pass filter

use crate::error::FilterResult;
use crate::filters::{band_edges, canonical_denominator, validate_parameters};
use crate::system::SecondOrder;

/// Band-pass filter
///
/// ```text
/// H(s) = (2m Tm / w0) s / (s^2/w0^2 + 2m/w0 s + 1)
/// ```
///
/// Single zero at the origin; `Tm` is the gain at the center frequency `w0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bandpass {
    tm: f64,
    m: f64,
    w0: f64,
}

impl Bandpass {
    /// Create a band-pass filter from mid-band gain `Tm`, damping `m` and
    /// center angular frequency `w0`
    pub fn new(tm: f64, m: f64, w0: f64) -> FilterResult<Self> {
        validate_parameters(tm, m, w0)?;
        Ok(Self { tm, m, w0 })
    }

    /// Mid-band gain `Tm`
    pub fn gain(&self) -> f64 {
        self.tm
    }

    /// Lower and upper -3 dB edges of the pass band, ordered `[lo, hi]`
    pub fn band_edges(&self) -> [f64; 2] {
        band_edges(self.m, self.w0)
    }

    /// Pass-band width `2m * w0`
    pub fn bandwidth(&self) -> f64 {
        2.0 * self.m * self.w0
    }
}

impl SecondOrder for Bandpass {
    fn damping(&self) -> f64 {
        self.m
    }

    fn natural_frequency(&self) -> f64 {
        self.w0
    }

    fn numerator(&self) -> Vec<f64> {
        vec![2.0 * self.m * self.tm / self.w0, 0.0]
    }

    fn denominator(&self) -> [f64; 3] {
        canonical_denominator(self.m, self.w0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coefficients() {
        let bp = Bandpass::new(1.1, 0.2, 6000.0).unwrap();
        let num = bp.numerator();
        assert_eq!(num.len(), 2);
        assert_relative_eq!(num[0], 2.0 * 0.2 * 1.1 / 6000.0, epsilon = 1e-15);
        assert_eq!(num[1], 0.0);
        assert_eq!(bp.denominator(), canonical_denominator(0.2, 6000.0));
    }

    #[test]
    fn test_band_edges_and_bandwidth() {
        let bp = Bandpass::new(1.1, 0.2, 6000.0).unwrap();
        let [lo, hi] = bp.band_edges();
        assert!(lo < hi);
        assert_relative_eq!(hi - lo, bp.bandwidth(), epsilon = 1e-9);
        assert_relative_eq!(bp.bandwidth(), 2400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_center_frequency_gain() {
        // |H(j w0)| = Tm exactly
        let bp = Bandpass::new(1.1, 0.2, 6000.0).unwrap();
        let (_, h) = bp.frequency_response(Some(&[6000.0]), None).unwrap();
        assert_relative_eq!(h[0].re, 1.1, epsilon = 1e-9);
        assert_relative_eq!(h[0].im, 0.0, epsilon = 1e-9);
    }
}
