//! Real polynomial helpers (descending-power coefficient convention)

use nalgebra::DMatrix;
use num_complex::Complex64;

/// Strip leading (highest-power) zero coefficients
pub fn trim_leading(coeffs: &[f64]) -> &[f64] {
    let start = coeffs
        .iter()
        .position(|&c| c != 0.0)
        .unwrap_or(coeffs.len());
    &coeffs[start..]
}

/// Evaluate a polynomial at a complex point using Horner's scheme
pub fn eval(coeffs: &[f64], s: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * s + c)
}

/// Roots of a real polynomial as eigenvalues of its companion matrix
///
/// Degree 0 (or an all-zero polynomial) has no roots; degree 1 is solved in
/// closed form; higher degrees go through
/// [`DMatrix::complex_eigenvalues`].
pub fn roots(coeffs: &[f64]) -> Vec<Complex64> {
    let c = trim_leading(coeffs);
    if c.len() <= 1 {
        return Vec::new();
    }

    let lead = c[0];
    if c.len() == 2 {
        return vec![Complex64::new(-c[1] / lead, 0.0)];
    }

    let n = c.len() - 1;
    let monic: Vec<f64> = c.iter().map(|&x| x / lead).collect();

    // First-row companion matrix of the monic polynomial
    let companion = DMatrix::from_fn(n, n, |i, j| {
        if i == 0 {
            -monic[j + 1]
        } else if i == j + 1 {
            1.0
        } else {
            0.0
        }
    });

    companion.complex_eigenvalues().iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trim_leading() {
        assert_eq!(trim_leading(&[0.0, 0.0, 1.0, 2.0]), &[1.0, 2.0]);
        assert_eq!(trim_leading(&[1.0]), &[1.0]);
        assert!(trim_leading(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_eval_horner() {
        // s^2 + 2s + 2 at s = 1 -> 5
        let v = eval(&[1.0, 2.0, 2.0], Complex64::new(1.0, 0.0));
        assert_relative_eq!(v.re, 5.0, epsilon = 1e-12);
        assert_relative_eq!(v.im, 0.0, epsilon = 1e-12);

        // s^2 + 2s + 2 at s = j -> 1 + 2j
        let v = eval(&[1.0, 2.0, 2.0], Complex64::new(0.0, 1.0));
        assert_relative_eq!(v.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.im, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_roots_linear() {
        // 2s + 4 -> root at -2
        let r = roots(&[2.0, 4.0]);
        assert_eq!(r.len(), 1);
        assert_relative_eq!(r[0].re, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_roots_real_quadratic() {
        // (s - 1)(s - 2) = s^2 - 3s + 2
        let mut r = roots(&[1.0, -3.0, 2.0]);
        r.sort_by(|a, b| a.re.total_cmp(&b.re));
        assert_relative_eq!(r[0].re, 1.0, epsilon = 1e-9);
        assert_relative_eq!(r[1].re, 2.0, epsilon = 1e-9);
        assert_relative_eq!(r[0].im, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_roots_complex_pair() {
        // s^2 + 2s + 2 -> -1 +/- j
        let r = roots(&[1.0, 2.0, 2.0]);
        assert_eq!(r.len(), 2);
        for root in &r {
            assert_relative_eq!(root.re, -1.0, epsilon = 1e-9);
            assert_relative_eq!(root.im.abs(), 1.0, epsilon = 1e-9);
        }
        assert!(r[0].im * r[1].im < 0.0, "roots must be conjugates");
    }

    #[test]
    fn test_roots_degenerate() {
        assert!(roots(&[3.0]).is_empty());
        assert!(roots(&[0.0, 0.0]).is_empty());
        assert!(roots(&[]).is_empty());
    }
}
