//! Trailing-window operators.
//!
//! Window = the `n` samples ending at and including position `i`. Positions
//! `0..n-1` are NaN, as is any position whose window holds a NaN. A period
//! longer than the series gives an all-NaN result.

use std::collections::VecDeque;

use super::Series;
use crate::error::{check_period, Result};

/// Trailing sum, added up from each window.
///
/// A window of zeros sums to exactly 0, so `safe_div` sees a zero
/// denominator rather than a running-total residue.
pub fn rolling_sum(s: &[f64], n: usize) -> Result<Series> {
    rolling_apply(s, n, |window| window.iter().sum())
}

/// Trailing simple mean. `n = 1` returns the input unchanged.
pub fn moving_avg(s: &[f64], n: usize) -> Result<Series> {
    if n == 1 {
        return Ok(s.to_vec());
    }
    let sums = rolling_sum(s, n)?;
    Ok(sums.into_iter().map(|v| v / n as f64).collect())
}

/// Apply `f` to every complete, NaN-free window.
fn rolling_apply(s: &[f64], n: usize, f: impl Fn(&[f64]) -> f64) -> Result<Series> {
    check_period("period", n, 1)?;
    let len = s.len();
    let mut result = vec![f64::NAN; len];
    if len < n {
        return Ok(result);
    }
    for i in (n - 1)..len {
        let window = &s[i + 1 - n..=i];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        result[i] = f(window);
    }
    Ok(result)
}

fn mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

/// Trailing population standard deviation (divide by `n`).
pub fn rolling_std(s: &[f64], n: usize) -> Result<Series> {
    rolling_apply(s, n, |window| {
        let m = mean(window);
        let variance = window.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / window.len() as f64;
        variance.sqrt()
    })
}

/// Trailing mean absolute deviation from the window mean.
pub fn avg_deviation(s: &[f64], n: usize) -> Result<Series> {
    rolling_apply(s, n, |window| {
        let m = mean(window);
        window.iter().map(|v| (v - m).abs()).sum::<f64>() / window.len() as f64
    })
}

/// Monotonic-deque extreme. `keep_back(back, entering)` is true when `back`
/// can stay in front of `entering`.
fn rolling_extreme(s: &[f64], n: usize, keep_back: impl Fn(f64, f64) -> bool) -> Result<Series> {
    check_period("period", n, 1)?;
    let len = s.len();
    let mut result = vec![f64::NAN; len];
    let mut deque: VecDeque<usize> = VecDeque::with_capacity(n);
    let mut nans = 0usize;

    for i in 0..len {
        if i >= n && s[i - n].is_nan() {
            nans -= 1;
        }
        while deque.front().is_some_and(|&j| j + n <= i) {
            deque.pop_front();
        }

        let entering = s[i];
        if entering.is_nan() {
            nans += 1;
        } else {
            while deque.back().is_some_and(|&j| !keep_back(s[j], entering)) {
                deque.pop_back();
            }
            deque.push_back(i);
        }

        if i + 1 >= n && nans == 0 {
            if let Some(&j) = deque.front() {
                result[i] = s[j];
            }
        }
    }

    Ok(result)
}

/// Trailing maximum (HHV).
pub fn rolling_max(s: &[f64], n: usize) -> Result<Series> {
    rolling_extreme(s, n, |back, entering| back > entering)
}

/// Trailing minimum (LLV).
pub fn rolling_min(s: &[f64], n: usize) -> Result<Series> {
    rolling_extreme(s, n, |back, entering| back < entering)
}
