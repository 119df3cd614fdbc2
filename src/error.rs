//! Error types for filter construction and response computation

use thiserror::Error;

/// Errors produced by filter constructors and the LTI solver
///
/// Every failure is a deterministic function of the inputs and is reported
/// synchronously; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A physical parameter is outside its domain (e.g. `m <= 0`, `w0 <= 0`,
    /// or a non-finite coefficient).
    #[error("parameter `{name}` must be positive and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A coefficient sequence was empty.
    #[error("coefficient sequence cannot be empty")]
    EmptyCoefficients,

    /// The denominator cannot be normalized because the scaling coefficient
    /// is zero (all-zero denominator, or zero constant term for the general
    /// normalized form).
    #[error("denominator cannot be normalized: scaling coefficient is {value}")]
    ZeroNormalizer { value: f64 },

    /// The general form was given a denominator that is not degree 2.
    #[error("denominator must have 3 coefficients for a second-order system, got {len}")]
    NotSecondOrder { len: usize },

    /// Numerator degree exceeds denominator degree.
    #[error("improper system: numerator degree {num_degree} exceeds denominator degree {den_degree}")]
    ImproperSystem { num_degree: usize, den_degree: usize },

    /// A response time grid is not strictly increasing.
    #[error("time grid must be strictly increasing (violation at index {index})")]
    TimeGridNotIncreasing { index: usize },

    /// The step response is only defined for non-negative time.
    #[error("time grid for the step response must be non-negative, got {value}")]
    NegativeTime { value: f64 },

    /// Forced-response input and time vectors differ in length.
    #[error("input length {input} does not match time grid length {time}")]
    LengthMismatch { input: usize, time: usize },

    /// An initial state vector has the wrong dimension.
    #[error("initial state must have {expected} entries, got {got}")]
    StateDimension { expected: usize, got: usize },
}

/// Result alias used throughout the crate
pub type FilterResult<T> = Result<T, FilterError>;

/// Check that a physical parameter is strictly positive and finite
pub(crate) fn check_positive(name: &'static str, value: f64) -> FilterResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FilterError::InvalidParameter { name, value })
    }
}

/// Check that every coefficient in a sequence is finite
pub(crate) fn check_finite(name: &'static str, coeffs: &[f64]) -> FilterResult<()> {
    for &c in coeffs {
        if !c.is_finite() {
            return Err(FilterError::InvalidParameter { name, value: c });
        }
    }
    Ok(())
}
