//! Recursive smoothers.
//!
//! `out[i] = s[i] * alpha + out[i-1] * (1 - alpha)`, evaluated as one forward
//! pass with a single running value. The recursion is seeded with the first
//! defined sample, so `out[0] = s[0]` whenever `s[0]` is defined. Leading NaN
//! positions stay NaN; a NaN after the seed carries the previous output.

use super::Series;
use crate::error::{check_period, IndicatorError, Result};

fn recursive_filter(s: &[f64], alpha: f64) -> Series {
    let mut result = vec![f64::NAN; s.len()];
    let mut prev: Option<f64> = None;

    for (out, &value) in result.iter_mut().zip(s) {
        let next = match (prev, value.is_nan()) {
            (None, true) => None,
            (None, false) => Some(value),
            (Some(p), true) => Some(p),
            (Some(p), false) => Some(value * alpha + p * (1.0 - alpha)),
        };
        if let Some(v) = next {
            *out = v;
        }
        prev = next;
    }

    result
}

/// Exponential moving average, `alpha = 2 / (n + 1)`.
pub fn exp_smooth(s: &[f64], n: usize) -> Result<Series> {
    check_period("period", n, 1)?;
    Ok(recursive_filter(s, 2.0 / (n as f64 + 1.0)))
}

/// Weighted recursive average, `alpha = m / n` with `1 <= m <= n`.
pub fn recursive_smooth(s: &[f64], n: usize, m: usize) -> Result<Series> {
    check_period("period", n, 1)?;
    check_period("weight", m, 1)?;
    if m > n {
        return Err(IndicatorError::InvalidPeriod {
            name: "period",
            value: n,
            min: m,
        });
    }
    Ok(recursive_filter(s, m as f64 / n as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn exp_smooth_seeds_with_first_sample() {
        // alpha = 0.5
        let out = exp_smooth(&[10.0, 11.0, 12.0, 13.0], 3).unwrap();
        assert_eq!(out[0], 10.0);
        assert_approx(out[1], 10.5, DEFAULT_EPSILON);
        assert_approx(out[2], 11.25, DEFAULT_EPSILON);
        assert_approx(out[3], 12.125, DEFAULT_EPSILON);
    }

    #[test]
    fn exp_smooth_period_one_is_identity() {
        let s = [3.0, 1.0, 4.0];
        assert_eq!(exp_smooth(&s, 1).unwrap(), s.to_vec());
    }

    #[test]
    fn exp_smooth_skips_leading_nan() {
        let out = exp_smooth(&[f64::NAN, f64::NAN, 4.0, 6.0], 3).unwrap();
        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert_eq!(out[2], 4.0);
        assert_approx(out[3], 5.0, DEFAULT_EPSILON);
    }

    #[test]
    fn interior_nan_carries_previous() {
        let out = exp_smooth(&[4.0, f64::NAN, 6.0], 3).unwrap();
        assert_eq!(out[1], 4.0);
        assert_approx(out[2], 5.0, DEFAULT_EPSILON);
    }

    #[test]
    fn recursive_smooth_alpha_m_over_n() {
        // alpha = 1/4
        let out = recursive_smooth(&[8.0, 0.0, 0.0], 4, 1).unwrap();
        assert_eq!(out[0], 8.0);
        assert_approx(out[1], 6.0, DEFAULT_EPSILON);
        assert_approx(out[2], 4.5, DEFAULT_EPSILON);
    }

    #[test]
    fn recursive_smooth_rejects_bad_weights() {
        assert!(recursive_smooth(&[1.0], 0, 1).is_err());
        assert!(recursive_smooth(&[1.0], 3, 0).is_err());
        assert!(recursive_smooth(&[1.0], 3, 4).is_err());
        assert!(exp_smooth(&[1.0], 0).is_err());
    }
}
