//! Second-order low-pass filter

use crate::error::FilterResult;
use crate::filters::{canonical_denominator, resonance_factor, validate_parameters};
use crate::system::SecondOrder;

/// Low-pass filter
///
/// ```text
/// H(s) = T0 / (s^2/w0^2 + 2m/w0 s + 1)
/// ```
///
/// # Example
///
/// ```
/// use secord::{Lowpass, SecondOrder};
///
/// let lp = Lowpass::new(0.8, 0.2, 6000.0).unwrap();
/// assert_eq!(lp.numerator(), vec![0.8]);
/// assert!(lp.resonant_frequency().is_some()); // m < 1/sqrt(2)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lowpass {
    t0: f64,
    m: f64,
    w0: f64,
}

impl Lowpass {
    /// Create a low-pass filter from static gain `T0`, damping `m` and
    /// cut-off angular frequency `w0`
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidParameter`](crate::FilterError::InvalidParameter)
    /// when `m <= 0`, `w0 <= 0`, or any parameter is non-finite.
    pub fn new(t0: f64, m: f64, w0: f64) -> FilterResult<Self> {
        validate_parameters(t0, m, w0)?;
        Ok(Self { t0, m, w0 })
    }

    /// Static (DC) gain `T0`
    pub fn gain(&self) -> f64 {
        self.t0
    }

    /// Resonant frequency `wr = w0 * sqrt(1 - 2m^2)`
    ///
    /// `None` for `m >= 1/sqrt(2)`: the magnitude response is monotonic and
    /// has no resonance.
    pub fn resonant_frequency(&self) -> Option<f64> {
        resonance_factor(self.m).map(|f| self.w0 * f)
    }

    /// Resonance peak magnitude ratio, `1 / (2m^2)`
    ///
    /// Diverges as `m` approaches zero.
    pub fn resonance_peak(&self) -> f64 {
        1.0 / (2.0 * self.m * self.m)
    }
}

impl SecondOrder for Lowpass {
    fn damping(&self) -> f64 {
        self.m
    }

    fn natural_frequency(&self) -> f64 {
        self.w0
    }

    fn numerator(&self) -> Vec<f64> {
        vec![self.t0]
    }

    fn denominator(&self) -> [f64; 3] {
        canonical_denominator(self.m, self.w0)
    }
}
