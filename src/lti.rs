//! Continuous-time LTI solver: SISO system in numerator/denominator polynomial form
//!
//! Implements the analysis backend the filter models delegate to:
//!
//! ```text
//! H(s) = B(s) / A(s) = (b_n s^n + ... + b_0) / (a_m s^m + ... + a_0)
//! ```
//!
//! The transfer function is converted to state-space form using the observable
//! canonical form, then time responses are integrated with RK4. Pole and zero
//! extraction goes through companion-matrix eigenvalues, and the frequency
//! response is evaluated directly on the polynomials.
//!
//! # Polynomial Convention
//!
//! Coefficients are specified in **descending powers** of s:
//! - `num = [b_n, ..., b_1, b_0]` represents `b_n*s^n + ... + b_0`
//! - `den = [a_m, ..., a_1, a_0]` represents `a_m*s^m + ... + a_0`
//!
//! The leading coefficient of the denominator is normalized to 1 at
//! construction.
//!
//! # Example
//!
//! ```
//! use secord::Lti;
//!
//! // H(s) = 1/(s + 1)
//! let sys = Lti::new(&[1.0], &[1.0, 1.0]).unwrap();
//! let (t, y) = sys.step(None, None, Some(200)).unwrap();
//!
//! // Step response settles at the DC gain H(0) = 1
//! assert!((y[t.len() - 1] - 1.0).abs() < 1e-2);
//! ```

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

use crate::error::{check_finite, FilterError, FilterResult};
use crate::polynomial;

/// Default number of points for an auto-computed time grid
pub const DEFAULT_TIME_POINTS: usize = 100;

/// Default number of points for an auto-computed frequency grid
pub const DEFAULT_FREQ_POINTS: usize = 10000;

/// RK4 accuracy budget: largest allowed |pole| * substep product
const MAX_POLE_STEP: f64 = 0.1;

/// Continuous-time SISO LTI system
///
/// Immutable once constructed; every response method is a pure function of the
/// stored coefficients and its arguments.
#[derive(Debug, Clone)]
pub struct Lti {
    /// Normalized numerator, zero-padded to the denominator length
    num: Vec<f64>,
    /// Normalized denominator (leading coefficient 1)
    den: Vec<f64>,
    /// State matrix (order x order), observable canonical form
    a: DMatrix<f64>,
    /// Input vector (order)
    b: DVector<f64>,
    /// Output vector (order)
    c: DVector<f64>,
    /// Direct feedthrough
    d: f64,
}

impl Lti {
    /// Build a system from numerator/denominator coefficients
    ///
    /// # Errors
    ///
    /// - [`FilterError::EmptyCoefficients`] for an empty denominator
    /// - [`FilterError::ZeroNormalizer`] for an all-zero denominator
    /// - [`FilterError::ImproperSystem`] when the numerator degree exceeds the
    ///   denominator degree
    /// - [`FilterError::InvalidParameter`] for non-finite coefficients
    pub fn new(num: &[f64], den: &[f64]) -> FilterResult<Self> {
        if den.is_empty() {
            return Err(FilterError::EmptyCoefficients);
        }
        check_finite("num", num)?;
        check_finite("den", den)?;

        let den_trim = polynomial::trim_leading(den);
        if den_trim.is_empty() {
            return Err(FilterError::ZeroNormalizer { value: 0.0 });
        }
        let num_trim = polynomial::trim_leading(num);
        if num_trim.len() > den_trim.len() {
            return Err(FilterError::ImproperSystem {
                num_degree: num_trim.len() - 1,
                den_degree: den_trim.len() - 1,
            });
        }

        // Normalize by the leading denominator coefficient, then pad the
        // numerator with leading zeros to equal length.
        let lead = den_trim[0];
        let den_norm: Vec<f64> = den_trim.iter().map(|&x| x / lead).collect();
        let mut num_norm: Vec<f64> = num_trim.iter().map(|&x| x / lead).collect();
        while num_norm.len() < den_norm.len() {
            num_norm.insert(0, 0.0);
        }

        let order = den_norm.len() - 1;

        // Direct feedthrough is the (padded) leading numerator coefficient.
        let d = num_norm[0];

        // Observable canonical form:
        //   A = [-a_{n-1} ... -a_0; I 0]   B = e_1
        //   C = strictly proper numerator coefficients (num - d*den)
        let a = DMatrix::from_fn(order, order, |i, j| {
            if i == 0 {
                -den_norm[j + 1]
            } else if i == j + 1 {
                1.0
            } else {
                0.0
            }
        });
        let mut b = DVector::zeros(order);
        if order > 0 {
            b[0] = 1.0;
        }
        let c = DVector::from_fn(order, |i, _| num_norm[i + 1] - d * den_norm[i + 1]);

        Ok(Self {
            num: num_norm,
            den: den_norm,
            a,
            b,
            c,
            d,
        })
    }

    /// System order (number of states)
    pub fn order(&self) -> usize {
        self.den.len() - 1
    }

    /// Normalized numerator coefficients (padded to denominator length)
    pub fn num(&self) -> &[f64] {
        &self.num
    }

    /// Normalized denominator coefficients (monic)
    pub fn den(&self) -> &[f64] {
        &self.den
    }

    /// Direct feedthrough term
    pub fn feedthrough(&self) -> f64 {
        self.d
    }

    /// Poles: roots of the denominator polynomial
    pub fn poles(&self) -> Vec<Complex64> {
        polynomial::roots(&self.den)
    }

    /// Zeros: roots of the numerator polynomial
    pub fn zeros(&self) -> Vec<Complex64> {
        polynomial::roots(&self.num)
    }

    /// Impulse response
    ///
    /// Computed as the homogeneous response from initial state `x0 + B`
    /// (the feedthrough impulse at t = 0 is not represented in the samples).
    ///
    /// # Arguments
    ///
    /// * `x0` - Initial state vector; zero when omitted
    /// * `t` - Time points; an auto grid is computed when omitted
    /// * `n` - Number of auto-grid points (default 100); ignored when `t` is given
    pub fn impulse(
        &self,
        x0: Option<&[f64]>,
        t: Option<&[f64]>,
        n: Option<usize>,
    ) -> FilterResult<(Vec<f64>, Vec<f64>)> {
        let grid = self.resolve_time_grid(t, n)?;
        let x = self.initial_state(x0)? + &self.b;
        let (y, _) = self.simulate(&grid, x, |_| 0.0);
        Ok((grid, y))
    }

    /// Unit-step response
    ///
    /// Defined for non-negative time only; an explicit grid containing
    /// negative instants is rejected.
    pub fn step(
        &self,
        x0: Option<&[f64]>,
        t: Option<&[f64]>,
        n: Option<usize>,
    ) -> FilterResult<(Vec<f64>, Vec<f64>)> {
        let grid = self.resolve_time_grid(t, n)?;
        if let Some(&start) = grid.first() {
            if start < 0.0 {
                return Err(FilterError::NegativeTime { value: start });
            }
        }
        let x = self.initial_state(x0)?;
        let (y, _) = self.simulate(&grid, x, |_| 1.0);
        Ok((grid, y))
    }

    /// Forced response to an arbitrary input sampled on `t`
    ///
    /// The input is linearly interpolated between samples. Returns the time
    /// grid, the output, and the state trajectory (one row per time point).
    pub fn output(
        &self,
        u: &[f64],
        t: &[f64],
        x0: Option<&[f64]>,
    ) -> FilterResult<(Vec<f64>, Vec<f64>, Vec<Vec<f64>>)> {
        if u.len() != t.len() {
            return Err(FilterError::LengthMismatch {
                input: u.len(),
                time: t.len(),
            });
        }
        Self::validate_time_grid(t)?;

        let x = self.initial_state(x0)?;
        let input = |time: f64| interpolate(t, u, time);
        let (y, states) = self.simulate(t, x, input);
        Ok((t.to_vec(), y, states))
    }

    /// Frequency response H(jw)
    ///
    /// # Arguments
    ///
    /// * `w` - Angular frequencies in rad/s; when omitted, `n` log-spaced
    ///   points spanning one decade beyond the pole/zero magnitudes
    /// * `n` - Number of auto-grid points (default 10000)
    pub fn freqresp(&self, w: Option<&[f64]>, n: Option<usize>) -> (Vec<f64>, Vec<Complex64>) {
        let grid: Vec<f64> = match w {
            Some(w) => w.to_vec(),
            None => self.default_freq_grid(n.unwrap_or(DEFAULT_FREQ_POINTS)),
        };
        let response = grid
            .iter()
            .map(|&wk| {
                let s = Complex64::new(0.0, wk);
                polynomial::eval(&self.num, s) / polynomial::eval(&self.den, s)
            })
            .collect();
        (grid, response)
    }

    fn resolve_time_grid(&self, t: Option<&[f64]>, n: Option<usize>) -> FilterResult<Vec<f64>> {
        match t {
            Some(t) => {
                Self::validate_time_grid(t)?;
                Ok(t.to_vec())
            }
            None => Ok(self.default_time_grid(n.unwrap_or(DEFAULT_TIME_POINTS))),
        }
    }

    fn validate_time_grid(t: &[f64]) -> FilterResult<()> {
        for (i, pair) in t.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(FilterError::TimeGridNotIncreasing { index: i + 1 });
            }
        }
        Ok(())
    }

    /// Auto time grid spanning seven times the slowest pole time constant
    fn default_time_grid(&self, n: usize) -> Vec<f64> {
        let n = n.max(2);
        let slowest = self
            .poles()
            .iter()
            .map(|p| p.re.abs())
            .filter(|&r| r > 1e-12)
            .fold(f64::INFINITY, f64::min);
        let horizon = if slowest.is_finite() {
            7.0 / slowest
        } else {
            10.0
        };
        (0..n)
            .map(|i| horizon * i as f64 / (n - 1) as f64)
            .collect()
    }

    /// Auto log-spaced frequency grid covering the pole/zero magnitudes with a
    /// one-decade margin on both sides
    fn default_freq_grid(&self, n: usize) -> Vec<f64> {
        let mags: Vec<f64> = self
            .poles()
            .iter()
            .chain(self.zeros().iter())
            .map(|r| r.norm())
            .filter(|&m| m > 1e-12)
            .collect();

        let (lo, hi) = if mags.is_empty() {
            (1.0, 1.0)
        } else {
            let lo = mags.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = mags.iter().copied().fold(0.0_f64, f64::max);
            (lo, hi)
        };
        let lo_exp = lo.log10().floor() - 1.0;
        let hi_exp = hi.log10().ceil() + 1.0;

        let n = n.max(2);
        (0..n)
            .map(|i| 10f64.powf(lo_exp + (hi_exp - lo_exp) * i as f64 / (n - 1) as f64))
            .collect()
    }

    fn initial_state(&self, x0: Option<&[f64]>) -> FilterResult<DVector<f64>> {
        match x0 {
            Some(x) if x.len() != self.order() => Err(FilterError::StateDimension {
                expected: self.order(),
                got: x.len(),
            }),
            Some(x) => Ok(DVector::from_column_slice(x)),
            None => Ok(DVector::zeros(self.order())),
        }
    }

    fn derivative(&self, x: &DVector<f64>, u: f64) -> DVector<f64> {
        &self.a * x + &self.b * u
    }

    fn output_at(&self, x: &DVector<f64>, u: f64) -> f64 {
        self.c.dot(x) + self.d * u
    }

    /// Integrate dx/dt = Ax + Bu over `t` with RK4, sampling y = Cx + Du at
    /// every grid point
    ///
    /// Each grid interval is internally subdivided so the fastest system mode
    /// stays inside the RK4 accuracy region.
    fn simulate<F: Fn(f64) -> f64>(
        &self,
        t: &[f64],
        mut x: DVector<f64>,
        input: F,
    ) -> (Vec<f64>, Vec<Vec<f64>>) {
        let wmax = self
            .poles()
            .iter()
            .map(|p| p.norm())
            .fold(0.0_f64, f64::max);

        let mut y = Vec::with_capacity(t.len());
        let mut states = Vec::with_capacity(t.len());

        if let Some(&t0) = t.first() {
            y.push(self.output_at(&x, input(t0)));
            states.push(x.iter().copied().collect());
        }

        for pair in t.windows(2) {
            let dt = pair[1] - pair[0];
            let substeps = if wmax > 0.0 {
                ((dt * wmax / MAX_POLE_STEP).ceil() as usize).max(1)
            } else {
                1
            };
            let h = dt / substeps as f64;
            let mut tau = pair[0];
            for _ in 0..substeps {
                x = self.rk4_step(&x, tau, h, &input);
                tau += h;
            }
            y.push(self.output_at(&x, input(pair[1])));
            states.push(x.iter().copied().collect());
        }

        (y, states)
    }

    fn rk4_step<F: Fn(f64) -> f64>(
        &self,
        x: &DVector<f64>,
        t: f64,
        h: f64,
        input: &F,
    ) -> DVector<f64> {
        let k1 = self.derivative(x, input(t));
        let k2 = self.derivative(&(x + &k1 * (0.5 * h)), input(t + 0.5 * h));
        let k3 = self.derivative(&(x + &k2 * (0.5 * h)), input(t + 0.5 * h));
        let k4 = self.derivative(&(x + &k3 * h), input(t + h));
        x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
    }
}

/// Linear interpolation of sampled data, clamped at both ends
fn interpolate(t: &[f64], u: &[f64], time: f64) -> f64 {
    if t.is_empty() {
        return 0.0;
    }
    match t.binary_search_by(|probe| probe.total_cmp(&time)) {
        Ok(i) => u[i],
        Err(0) => u[0],
        Err(i) if i >= t.len() => u[u.len() - 1],
        Err(i) => {
            let frac = (time - t[i - 1]) / (t[i] - t[i - 1]);
            u[i - 1] + (u[i] - u[i - 1]) * frac
        }
    }
}
