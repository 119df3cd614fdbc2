//! Second-order notch (band-reject) filter

use crate::error::FilterResult;
use crate::filters::{band_edges, canonical_denominator, validate_parameters};
use crate::system::SecondOrder;

/// Notch filter
///
/// ```text
/// H(s) = T0 (s^2/w0^2 + 1) / (s^2/w0^2 + 2m/w0 s + 1)
/// ```
///
/// Complex-conjugate zero pair on the imaginary axis at +/- j*w0: the
/// response is exactly zero at the center frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Notch {
    t0: f64,
    m: f64,
    w0: f64,
}

impl Notch {
    /// Create a notch filter from gain `T0`, damping `m` and center angular
    /// frequency `w0`
    pub fn new(t0: f64, m: f64, w0: f64) -> FilterResult<Self> {
        validate_parameters(t0, m, w0)?;
        Ok(Self { t0, m, w0 })
    }

    /// Out-of-band gain `T0`
    pub fn gain(&self) -> f64 {
        self.t0
    }

    /// Lower and upper edges of the rejected band, ordered `[lo, hi]`
    ///
    /// Same geometry as the band-pass pass band.
    pub fn band_edges(&self) -> [f64; 2] {
        band_edges(self.m, self.w0)
    }

    /// Rejected-band width `2m * w0`
    pub fn bandwidth(&self) -> f64 {
        2.0 * self.m * self.w0
    }
}

impl SecondOrder for Notch {
    fn damping(&self) -> f64 {
        self.m
    }

    fn natural_frequency(&self) -> f64 {
        self.w0
    }

    fn numerator(&self) -> Vec<f64> {
        vec![self.t0 / (self.w0 * self.w0), 0.0, self.t0]
    }

    fn denominator(&self) -> [f64; 3] {
        canonical_denominator(self.m, self.w0)
    }
}
