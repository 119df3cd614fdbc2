//! Generic normalized second-order form

use crate::error::{check_finite, check_positive, FilterError, FilterResult};
use crate::system::SecondOrder;

/// Second-order system given directly by its coefficients
///
/// Inverse of the named topologies: instead of deriving coefficients from
/// `(m, w0)`, the caller supplies raw numerator/denominator sequences and the
/// physical parameters are recovered from them. Both sequences are divided by
/// the denominator's constant coefficient once at construction, bringing the
/// denominator to the canonical `[1/w0^2, 2m/w0, 1]` shape, after which the
/// instance is immutable.
///
/// # Example
///
/// ```
/// use secord::{General, SecondOrder};
///
/// // 3 / (2 s^2 + 2 s + 4), normalized to [0.5, 0.5, 1] / 0.75
/// let sys = General::new(&[3.0], &[2.0, 2.0, 4.0]).unwrap();
/// assert!((sys.natural_frequency() - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct General {
    num: Vec<f64>,
    den: [f64; 3],
    m: f64,
    w0: f64,
}

impl General {
    /// Create a system from raw coefficient sequences in descending powers
    ///
    /// # Errors
    ///
    /// - [`FilterError::EmptyCoefficients`] for an empty sequence
    /// - [`FilterError::NotSecondOrder`] unless the denominator has exactly 3
    ///   coefficients
    /// - [`FilterError::ImproperSystem`] for a numerator of degree > 2
    /// - [`FilterError::ZeroNormalizer`] when the denominator constant term is
    ///   zero
    /// - [`FilterError::InvalidParameter`] when the derived `w0` or `m` is not
    ///   positive and finite
    pub fn new(num: &[f64], den: &[f64]) -> FilterResult<Self> {
        if num.is_empty() || den.is_empty() {
            return Err(FilterError::EmptyCoefficients);
        }
        check_finite("num", num)?;
        check_finite("den", den)?;
        if den.len() != 3 {
            return Err(FilterError::NotSecondOrder { len: den.len() });
        }
        if num.len() > 3 {
            return Err(FilterError::ImproperSystem {
                num_degree: num.len() - 1,
                den_degree: 2,
            });
        }

        // One-time normalization by the constant denominator coefficient.
        let a0 = den[2];
        if a0 == 0.0 {
            return Err(FilterError::ZeroNormalizer { value: a0 });
        }
        let den_norm = [den[0] / a0, den[1] / a0, 1.0];
        let num_norm: Vec<f64> = num.iter().map(|&x| x / a0).collect();

        // den_norm[0] = 1/w0^2, den_norm[1] = 2m/w0
        if den_norm[0] <= 0.0 {
            return Err(FilterError::InvalidParameter {
                name: "den",
                value: den_norm[0],
            });
        }
        let w0 = check_positive("w0", 1.0 / den_norm[0].sqrt())?;
        let m = check_positive("m", den_norm[1] * w0 / 2.0)?;

        Ok(Self {
            num: num_norm,
            den: den_norm,
            m,
            w0,
        })
    }
}

impl SecondOrder for General {
    fn damping(&self) -> f64 {
        self.m
    }

    fn natural_frequency(&self) -> f64 {
        self.w0
    }

    fn numerator(&self) -> Vec<f64> {
        self.num.clone()
    }

    fn denominator(&self) -> [f64; 3] {
        self.den
    }
}
