//! Best rational approximation with a bounded denominator
//!
//! Angle labels in radians mode are rendered as reduced fractions of pi.
//! The reduction must match the semantics of Python's
//! `Fraction.limit_denominator`: walk the continued-fraction expansion of the
//! value, stop before the denominator bound is exceeded, then pick the closer
//! of the last convergent and the best semiconvergent.

use num::rational::Ratio;
use num_traits::ToPrimitive;

/// Tolerance below which a continued-fraction remainder is treated as zero
const EXACTNESS_EPS: f64 = 1e-9;

/// Find the closest fraction to `value` with denominator at most
/// `max_denominator`.
///
/// The result is exact when `value` is itself a low-denominator rational
/// (e.g. any multiple of 15 degrees divided by 180), and otherwise the
/// nearest bounded-denominator approximation. Ties between the two candidate
/// bounds resolve toward the final convergent, matching Python.
pub fn limit_denominator(value: f64, max_denominator: i64) -> Ratio<i64> {
    assert!(max_denominator >= 1, "denominator bound must be positive");

    // Convergent state: p0/q0 and p1/q1 bracket the value.
    let (mut p0, mut q0, mut p1, mut q1) = (0i64, 1i64, 1i64, 0i64);
    let mut x = value;

    loop {
        let a = x.floor();
        // Guard against overflow from pathological inputs before casting.
        if !a.is_finite() || a.abs() >= 1e15 {
            break;
        }
        let a = a as i64;

        let q2 = q0 + a * q1;
        if q1 != 0 && q2 > max_denominator {
            break;
        }

        let p2 = p0 + a * p1;
        p0 = p1;
        q0 = q1;
        p1 = p2;
        q1 = q2;

        let remainder = x - a as f64;
        if remainder.abs() < EXACTNESS_EPS {
            // The expansion terminated: p1/q1 is the value exactly.
            return Ratio::new(p1, q1);
        }
        x = 1.0 / remainder;
    }

    if q1 == 0 {
        // Only reachable for astronomically large inputs.
        return Ratio::new(value.round() as i64, 1);
    }

    // The next convergent would overshoot the bound; compare the last
    // convergent against the best semiconvergent that still fits.
    let k = (max_denominator - q0) / q1;
    let bound1 = Ratio::new(p0 + k * p1, q0 + k * q1);
    let bound2 = Ratio::new(p1, q1);

    let distance = |candidate: &Ratio<i64>| {
        let approx = candidate.numer().to_f64().unwrap_or(f64::NAN)
            / candidate.denom().to_f64().unwrap_or(f64::NAN);
        (approx - value).abs()
    };

    if distance(&bound2) <= distance(&bound1) {
        bound2
    } else {
        bound1
    }
}

/// Signed absolute difference between a bounded fraction and a real value,
/// used by tests to verify the rounding tolerance.
pub fn approximation_error(fraction: Ratio<i64>, value: f64) -> f64 {
    let approx = fraction.numer().to_f64().unwrap_or(f64::NAN)
        / fraction.denom().to_f64().unwrap_or(f64::NAN);
    (approx - value).abs()
}
