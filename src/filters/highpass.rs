//! Second-order high-pass filter

use crate::error::FilterResult;
use crate::filters::{canonical_denominator, resonance_factor, validate_parameters};
use crate::system::SecondOrder;

/// High-pass filter
///
/// ```text
/// H(s) = (Too/w0^2) s^2 / (s^2/w0^2 + 2m/w0 s + 1)
/// ```
///
/// Double zero at the origin; `Too` is the gain as the frequency grows
/// without bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highpass {
    t_inf: f64,
    m: f64,
    w0: f64,
}

impl Highpass {
    /// Create a high-pass filter from high-frequency gain `Too`, damping `m`
    /// and cut-off angular frequency `w0`
    pub fn new(t_inf: f64, m: f64, w0: f64) -> FilterResult<Self> {
        validate_parameters(t_inf, m, w0)?;
        Ok(Self { t_inf, m, w0 })
    }

    /// High-frequency gain `Too`
    pub fn gain(&self) -> f64 {
        self.t_inf
    }

    /// Resonant frequency `wr = w0 / sqrt(1 - 2m^2)`
    ///
    /// Same validity domain as the low-pass: `None` for `m >= 1/sqrt(2)`.
    pub fn resonant_frequency(&self) -> Option<f64> {
        resonance_factor(self.m).map(|f| self.w0 / f)
    }

    /// Resonance peak magnitude ratio, `1 / (2m^2)`
    pub fn resonance_peak(&self) -> f64 {
        1.0 / (2.0 * self.m * self.m)
    }
}

impl SecondOrder for Highpass {
    fn damping(&self) -> f64 {
        self.m
    }

    fn natural_frequency(&self) -> f64 {
        self.w0
    }

    fn numerator(&self) -> Vec<f64> {
        vec![self.t_inf / (self.w0 * self.w0), 0.0, 0.0]
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
        let hp = Highpass::new(1.1, 0.2, 6000.0).unwrap();
        let num = hp.numerator();
        assert_eq!(num.len(), 3);
        assert_relative_eq!(num[0], 1.1 / 36_000_000.0, epsilon = 1e-18);
        assert_eq!(num[1], 0.0);
        assert_eq!(num[2], 0.0);

        assert_eq!(hp.denominator(), canonical_denominator(0.2, 6000.0));
    }

    #[test]
    fn test_resonant_frequency_above_cutoff() {
        let hp = Highpass::new(1.1, 0.2, 6000.0).unwrap();
        let wr = hp.resonant_frequency().unwrap();
        // The high-pass resonance sits above the cut-off
        assert!(wr > 6000.0);
        assert_relative_eq!(wr, 6000.0 / (1.0 - 0.08_f64).sqrt(), epsilon = 1e-9);

        let damped = Highpass::new(1.1, 1.0, 6000.0).unwrap();
        assert!(damped.resonant_frequency().is_none());
    }

    #[test]
    fn test_double_zero_at_origin() {
        use crate::system::SecondOrder;
        let hp = Highpass::new(1.1, 0.2, 6000.0).unwrap();
        let (_, zeros) = hp.pole_zero_map().unwrap();
        assert_eq!(zeros.len(), 2);
        for z in &zeros {
            assert_relative_eq!(z.norm(), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_step_discontinuity_passes_through() {
        // An input step reaches the output instantly, scaled by Too
        let hp = Highpass::new(1.1, 0.2, 6000.0).unwrap();
        let jump = hp.predict_discontinuity(1.0, 0.0);
        assert_relative_eq!(jump[0], 1.1, epsilon = 1e-12);
    }
}
