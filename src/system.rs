//! Shared behavior of second-order continuous-time systems
//!
//! Every filter topology stores its physical parameters (damping `m`, natural
//! frequency `w0`, a gain) and derives coefficients and characteristic
//! quantities on demand; nothing is cached. The trait supplies the derived
//! quantities common to all topologies and delegates numeric analysis to
//! [`Lti`].

use nalgebra::{Matrix2, Vector2};
use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::FilterResult;
use crate::lti::Lti;

/// A second-order continuous-time system in transfer-function form
///
/// Implementors provide the stored parameters and the topology-specific
/// coefficients; the characteristic quantities and response delegation come
/// for free.
///
/// # Coefficient Convention
///
/// Descending powers of s. The denominator of every named topology is the
/// canonical `[1/w0^2, 2m/w0, 1]`; only the numerator encodes where the zeros
/// sit.
///
/// # Example
///
/// ```
/// use secord::{Lowpass, SecondOrder};
///
/// let lp = Lowpass::new(0.8, 0.2, 6000.0).unwrap();
/// assert!((lp.quality_factor() - 2.5).abs() < 1e-12);
/// assert!(lp.peak_frequency().is_some()); // underdamped
/// ```
pub trait SecondOrder {
    /// Damping coefficient `m` (dimensionless, > 0)
    fn damping(&self) -> f64;

    /// Natural (characteristic) angular frequency `w0` in rad/s (> 0)
    fn natural_frequency(&self) -> f64;

    /// Numerator coefficients, descending powers
    fn numerator(&self) -> Vec<f64>;

    /// Denominator coefficients, descending powers (always degree 2)
    fn denominator(&self) -> [f64; 3];

    /// Decay ratio between consecutive step-response overshoots
    ///
    /// `exp(-2*pi*m / sqrt(1 - m^2))` for `m < 1`; `0` at or beyond critical
    /// damping, where the response no longer overshoots. Strictly decreasing
    /// in `m` on the underdamped range and continuous at `m = 1`.
    fn overshoot(&self) -> f64 {
        let m = self.damping();
        if m < 1.0 {
            (-2.0 * PI * m / (1.0 - m * m).sqrt()).exp()
        } else {
            0.0
        }
    }

    /// Damped (peak) angular frequency `wp = w0 * sqrt(1 - m^2)`
    ///
    /// `None` at or beyond critical damping: there is no oscillatory peak.
    fn peak_frequency(&self) -> Option<f64> {
        let m = self.damping();
        if m < 1.0 {
            Some(self.natural_frequency() * (1.0 - m * m).sqrt())
        } else {
            None
        }
    }

    /// Pseudo-period of the damped oscillation, `2*pi / wp`
    ///
    /// Undefined whenever [`peak_frequency`](Self::peak_frequency) is.
    fn peak_period(&self) -> Option<f64> {
        self.peak_frequency().map(|wp| 2.0 * PI / wp)
    }

    /// Quality factor `Q = 1 / (2m)`
    ///
    /// Defined for every valid system; grows without bound as `m` approaches
    /// zero.
    fn quality_factor(&self) -> f64 {
        1.0 / (2.0 * self.damping())
    }

    /// Build the LTI solver for the current coefficients
    fn lti(&self) -> FilterResult<Lti> {
        Lti::new(&self.numerator(), &self.denominator())
    }

    /// Poles and zeros of the transfer function
    fn pole_zero_map(&self) -> FilterResult<(Vec<Complex64>, Vec<Complex64>)> {
        let sys = self.lti()?;
        Ok((sys.poles(), sys.zeros()))
    }

    /// Impulse response; see [`Lti::impulse`]
    fn impulse_response(
        &self,
        x0: Option<&[f64]>,
        t: Option<&[f64]>,
        n: Option<usize>,
    ) -> FilterResult<(Vec<f64>, Vec<f64>)> {
        self.lti()?.impulse(x0, t, n)
    }

    /// Unit-step response; see [`Lti::step`]
    fn step_response(
        &self,
        x0: Option<&[f64]>,
        t: Option<&[f64]>,
        n: Option<usize>,
    ) -> FilterResult<(Vec<f64>, Vec<f64>)> {
        self.lti()?.step(x0, t, n)
    }

    /// Forced response to a sampled input; see [`Lti::output`]
    fn forced_response(
        &self,
        u: &[f64],
        t: &[f64],
        x0: Option<&[f64]>,
    ) -> FilterResult<(Vec<f64>, Vec<f64>, Vec<Vec<f64>>)> {
        self.lti()?.output(u, t, x0)
    }

    /// Frequency response; see [`Lti::freqresp`]
    fn frequency_response(
        &self,
        w: Option<&[f64]>,
        n: Option<usize>,
    ) -> FilterResult<(Vec<f64>, Vec<Complex64>)> {
        Ok(self.lti()?.freqresp(w, n))
    }

    /// State jump caused by an instantaneous input discontinuity
    ///
    /// For an input step `u` with derivative jump `du` applied at one instant,
    /// the new state values follow from the numerator `(b2, b1, _)` (zero-padded
    /// to degree 2) and denominator `(a2, a1, _)`:
    ///
    /// ```text
    /// H = 1/a2^2 * [ a2*b2            0     ]
    ///              [ a2*b1 - a1*b2    a2*b2 ]
    /// ```
    ///
    /// Returns `H * [u, du]^T`: the jump of the output and of its derivative.
    /// A strictly proper system of relative degree 2 (e.g. a low-pass) cannot
    /// jump, so both entries are zero.
    fn predict_discontinuity(&self, u: f64, du: f64) -> [f64; 2] {
        let num = self.numerator();
        let mut b = [0.0; 3];
        let offset = 3 - num.len().min(3);
        for (i, &v) in num.iter().take(3).enumerate() {
            b[offset + i] = v;
        }

        let den = self.denominator();
        let (a2, a1) = (den[0], den[1]);

        let h = Matrix2::new(a2 * b[0], 0.0, a2 * b[1] - a1 * b[0], a2 * b[0]) / (a2 * a2);
        let jump = h * Vector2::new(u, du);
        [jump.x, jump.y]
    }
}
