//! secord - Second-order continuous-time LTI filter models
//!
//! Models the standard second-order analog filter topologies (low-pass,
//! high-pass, band-pass, notch, and a generic normalized form), mapping their
//! physical parameters (gain, damping coefficient `m`, natural frequency `w0`)
//! to transfer-function coefficients, and exposing the characteristic
//! quantities (overshoot, quality factor, resonance and peak frequencies,
//! bandwidth) together with the usual analysis responses (impulse, step,
//! forced output, frequency response, pole-zero map).
//!
//! # Architecture
//!
//! - [`SecondOrder`]: shared derived quantities and response delegation
//! - [`filters`]: one immutable value struct per topology
//! - [`Lti`]: the analysis backend (state-space realization, RK4 time
//!   responses, companion-matrix pole/zero extraction, frequency response)
//! - [`export`] / [`plot`]: CSV columns and bitmap rendering of results
//!
//! # Example
//!
//! ```
//! use secord::{Bandpass, SecondOrder};
//!
//! let bp = Bandpass::new(1.1, 0.2, 6000.0).unwrap();
//!
//! // Characteristic quantities are recomputed from the stored parameters
//! let [lo, hi] = bp.band_edges();
//! assert!(lo < hi);
//! assert!((hi - lo - bp.bandwidth()).abs() < 1e-9);
//!
//! // Numeric analysis is delegated to the LTI backend
//! let (t, y) = bp.step_response(None, None, None).unwrap();
//! assert_eq!(t.len(), y.len());
//! ```

pub mod error;
pub mod export;
pub mod filters;
pub mod lti;
pub mod plot;
pub mod polynomial;
pub mod system;

pub use error::{FilterError, FilterResult};
pub use filters::{Bandpass, General, Highpass, Lowpass, Notch};
pub use lti::Lti;
pub use system::SecondOrder;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{FilterError, FilterResult};
    pub use crate::filters::{Bandpass, General, Highpass, Lowpass, Notch};
    pub use crate::lti::Lti;
    pub use crate::system::SecondOrder;
}
