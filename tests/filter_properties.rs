//! Property tests for the filter topologies
//!
//! Checks the coefficient formulas, the characteristic quantities and the
//! invariants shared by every topology against hand-computed values.

use approx::assert_relative_eq;
use secord::prelude::*;

const M: f64 = 0.2;
const W0: f64 = 6000.0;

fn canonical_denominator(m: f64, w0: f64) -> [f64; 3] {
    [1.0 / (w0 * w0), 2.0 * m / w0, 1.0]
}

#[test]
fn denominator_is_canonical_for_all_named_topologies() {
    for gain in [0.5, 0.8, 1.1, 2.5] {
        let expected = canonical_denominator(M, W0);
        let dens = [
            Lowpass::new(gain, M, W0).unwrap().denominator(),
            Highpass::new(gain, M, W0).unwrap().denominator(),
            Bandpass::new(gain, M, W0).unwrap().denominator(),
            Notch::new(gain, M, W0).unwrap().denominator(),
        ];
        for den in dens {
            for (a, b) in den.iter().zip(expected.iter()) {
                assert_relative_eq!(*a, *b, epsilon = 1e-15);
            }
        }
    }
}

#[test]
fn band_edges_ordered_and_consistent_with_bandwidth() {
    for m in [0.05, 0.2, 0.5, 0.9, 1.5, 4.0] {
        for w0 in [0.5, 10.0, 6000.0, 1e6] {
            let bp = Bandpass::new(1.1, m, w0).unwrap();
            let notch = Notch::new(1.1, m, w0).unwrap();

            for (edges, bw) in [
                (bp.band_edges(), bp.bandwidth()),
                (notch.band_edges(), notch.bandwidth()),
            ] {
                let [lo, hi] = edges;
                assert!(lo < hi, "edges out of order for m={m}, w0={w0}");
                assert_relative_eq!(hi - lo, bw, max_relative = 1e-9);
                assert_relative_eq!(bw, 2.0 * m * w0, max_relative = 1e-12);
            }
        }
    }
}

#[test]
fn quality_factor_reference_value() {
    let lp = Lowpass::new(0.8, 0.2, W0).unwrap();
    assert_relative_eq!(lp.quality_factor(), 2.5, epsilon = 1e-12);
}

#[test]
fn lowpass_reference_shapes() {
    let lp = Lowpass::new(0.8, 0.2, 6000.0).unwrap();

    let num = lp.numerator();
    assert_eq!(num, vec![0.8]);

    let den = lp.denominator();
    assert_eq!(den.len(), 3);

    // 0.2 < 1/sqrt(2): the resonance exists and is a plain positive number
    let wr = lp.resonant_frequency().expect("resonance must exist");
    assert!(wr.is_finite() && wr > 0.0);
}

#[test]
fn highpass_reference_numerator() {
    let hp = Highpass::new(1.1, 0.2, 6000.0).unwrap();
    let num = hp.numerator();
    assert_eq!(num.len(), 3);
    assert_relative_eq!(num[0], 1.1 / 36_000_000.0, epsilon = 1e-18);
    assert_eq!(num[1], 0.0);
    assert_eq!(num[2], 0.0);
}

#[test]
fn notch_reference_numerator() {
    let notch = Notch::new(1.1, 0.2, 6000.0).unwrap();
    let num = notch.numerator();
    assert_eq!(num.len(), 3);
    assert_relative_eq!(num[0], 1.1 / 36_000_000.0, epsilon = 1e-18);
    assert_eq!(num[1], 0.0);
    assert_relative_eq!(num[2], 1.1, epsilon = 1e-15);
}

#[test]
fn general_round_trips_with_named_topologies() {
    // Build an arbitrary scaled second-order denominator, recover (m, w0)
    // through the general form, and check that a named topology built from
    // the recovered parameters produces the identical canonical denominator.
    let m = 0.35;
    let w0 = 1250.0;
    let scale = 3.7;
    let den = [
        scale / (w0 * w0),
        scale * 2.0 * m / w0,
        scale,
    ];

    let general = General::new(&[scale * 0.8], &den).unwrap();
    assert_relative_eq!(general.natural_frequency(), w0, max_relative = 1e-12);
    assert_relative_eq!(general.damping(), m, max_relative = 1e-12);

    let lp = Lowpass::new(0.8, general.damping(), general.natural_frequency()).unwrap();
    for (a, b) in general.denominator().iter().zip(lp.denominator().iter()) {
        assert_relative_eq!(*a, *b, max_relative = 1e-12);
    }
    // The gain survives normalization too
    assert_relative_eq!(general.numerator()[0], 0.8, max_relative = 1e-12);
}

#[test]
fn overshoot_zero_when_damped_and_decreasing_otherwise() {
    for m in [1.0, 1.2, 3.0, 50.0] {
        let lp = Lowpass::new(1.0, m, W0).unwrap();
        assert_eq!(lp.overshoot(), 0.0);
    }

    let mut last = f64::INFINITY;
    for i in 1..50 {
        let m = i as f64 * 0.02;
        let r = Lowpass::new(1.0, m, W0).unwrap().overshoot();
        assert!(r > 0.0);
        assert!(r < last, "overshoot must strictly decrease (m={m})");
        last = r;
    }
}

#[test]
fn peak_quantities_follow_damping_domain() {
    let under = Lowpass::new(1.0, 0.3, W0).unwrap();
    let wp = under.peak_frequency().unwrap();
    assert_relative_eq!(wp, W0 * (1.0 - 0.09_f64).sqrt(), max_relative = 1e-12);
    assert_relative_eq!(
        under.peak_period().unwrap(),
        2.0 * std::f64::consts::PI / wp,
        max_relative = 1e-12
    );

    let critical = Lowpass::new(1.0, 1.0, W0).unwrap();
    assert!(critical.peak_frequency().is_none());
    assert!(critical.peak_period().is_none());
}

#[test]
fn constructors_reject_domain_invalid_parameters() {
    assert!(Lowpass::new(1.0, -0.1, W0).is_err());
    assert!(Highpass::new(1.0, 0.0, W0).is_err());
    assert!(Bandpass::new(1.0, 0.2, 0.0).is_err());
    assert!(Notch::new(1.0, 0.2, -W0).is_err());
    assert!(Lowpass::new(1.0, f64::NAN, W0).is_err());
    assert!(General::new(&[1.0], &[0.0, 1.0, 0.0]).is_err());
}
