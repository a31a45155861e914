//! Element-wise operators and scalar helpers.
//!
//! Binary operators require equal lengths. NaN always propagates: unlike
//! `f64::max`, `element_max(NaN, x)` is NaN.

use super::Series;
use crate::error::{check_len, IndicatorError, Result};

/// Round `x` to `decimals` places, half away from zero. NaN stays NaN.
pub fn round(x: f64, decimals: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let factor = 10f64.powi(decimals as i32);
    (x * factor).round() / factor
}

/// Round every element of `s` to `decimals` places.
pub fn round_series(s: &[f64], decimals: u32) -> Series {
    s.iter().map(|&x| round(x, decimals)).collect()
}

/// `s[N - n]`, i.e. the n-th value counting back from the end (n = 1 is the last).
pub fn nth_from_end(s: &[f64], n: usize) -> Result<f64> {
    if n == 0 || n > s.len() {
        return Err(IndicatorError::IndexOutOfRange {
            index: n,
            len: s.len(),
        });
    }
    Ok(s[s.len() - n])
}

/// `num / den`, with 0 for a zero denominator. NaN if either side is NaN.
pub fn safe_div(num: f64, den: f64) -> f64 {
    if num.is_nan() || den.is_nan() {
        f64::NAN
    } else if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Combine two equal-length series element by element.
pub fn map2(a: &[f64], b: &[f64], f: impl Fn(f64, f64) -> f64) -> Result<Series> {
    check_len(a.len(), b)?;
    Ok(a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
}

pub fn abs(s: &[f64]) -> Series {
    s.iter().map(|x| x.abs()).collect()
}

pub fn element_max(a: &[f64], b: &[f64]) -> Result<Series> {
    map2(a, b, nan_max)
}

pub fn element_min(a: &[f64], b: &[f64]) -> Result<Series> {
    map2(a, b, nan_min)
}

/// `max(s[i], v)` for every element.
pub fn max_with(s: &[f64], v: f64) -> Series {
    s.iter().map(|&x| nan_max(x, v)).collect()
}

/// `min(s[i], v)` for every element.
pub fn min_with(s: &[f64], v: f64) -> Series {
    s.iter().map(|&x| nan_min(x, v)).collect()
}

pub fn add(a: &[f64], b: &[f64]) -> Result<Series> {
    map2(a, b, |x, y| x + y)
}

pub fn sub(a: &[f64], b: &[f64]) -> Result<Series> {
    map2(a, b, |x, y| x - y)
}

pub fn mul(a: &[f64], b: &[f64]) -> Result<Series> {
    map2(a, b, |x, y| x * y)
}

pub fn scale(s: &[f64], k: f64) -> Series {
    s.iter().map(|&x| x * k).collect()
}

/// Element-wise [`safe_div`].
pub fn div_or_zero(num: &[f64], den: &[f64]) -> Result<Series> {
    map2(num, den, safe_div)
}
