//! Second-order filter topologies
//!
//! One module per topology. The four named topologies share the canonical
//! denominator `[1/w0^2, 2m/w0, 1]` and differ only in their numerator; the
//! general form goes the other way and derives `m`/`w0` from caller-supplied
//! coefficients.

mod bandpass;
mod general;
mod highpass;
mod lowpass;
mod notch;

pub use bandpass::Bandpass;
pub use general::General;
pub use highpass::Highpass;
pub use lowpass::Lowpass;
pub use notch::Notch;

use crate::error::{check_positive, FilterResult};

/// Canonical second-order denominator `[1/w0^2, 2m/w0, 1]`
pub(crate) fn canonical_denominator(m: f64, w0: f64) -> [f64; 3] {
    [1.0 / (w0 * w0), 2.0 * m / w0, 1.0]
}

/// Validate the shared physical parameters of the named topologies
pub(crate) fn validate_parameters(gain: f64, m: f64, w0: f64) -> FilterResult<()> {
    if !gain.is_finite() {
        return Err(crate::error::FilterError::InvalidParameter {
            name: "gain",
            value: gain,
        });
    }
    check_positive("m", m)?;
    check_positive("w0", w0)?;
    Ok(())
}

/// Resonant frequency scaling factor `sqrt(1 - 2m^2)`, when it exists
///
/// Real and positive only below `m = 1/sqrt(2)`; beyond that threshold the
/// magnitude response is monotonic and there is no resonance.
pub(crate) fn resonance_factor(m: f64) -> Option<f64> {
    let arg = 1.0 - 2.0 * m * m;
    if arg > 0.0 {
        Some(arg.sqrt())
    } else {
        None
    }
}

/// Shared band-edge formula for band-pass and notch geometries
///
/// `[w0*(-m + sqrt(1 + m^2)), w0*(m + sqrt(1 + m^2))]`; the first edge is
/// below the second for every valid `m`, `w0`.
pub(crate) fn band_edges(m: f64, w0: f64) -> [f64; 2] {
    let root = (1.0 + m * m).sqrt();
    [w0 * (-m + root), w0 * (m + root)]
}
