//! Counting, run-length checks and crossover detection.
//!
//! A comparison against NaN is false, so undefined positions never count as
//! "condition met".

use crate::error::{check_len, IndicatorError, Result};
use crate::primitives::{rolling_sum, Series};

/// `a[i] > b[i]` for every position.
pub fn greater_than(a: &[f64], b: &[f64]) -> Result<Vec<bool>> {
    check_len(a.len(), b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x > y).collect())
}

/// `a[i] <= b[i]` for every position.
pub fn less_or_equal(a: &[f64], b: &[f64]) -> Result<Vec<bool>> {
    check_len(a.len(), b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x <= y).collect())
}

fn as_numeric(cond: &[bool]) -> Series {
    cond.iter().map(|&c| if c { 1.0 } else { 0.0 }).collect()
}

/// Rolling count of true values over the trailing `n` positions.
/// Same warm-up as a rolling sum: the first `n - 1` positions are NaN.
pub fn count(cond: &[bool], n: usize) -> Result<Series> {
    rolling_sum(&as_numeric(cond), n)
}

/// True where the condition held on each of the last `n` positions.
pub fn every(cond: &[bool], n: usize) -> Result<Vec<bool>> {
    let counts = count(cond, n)?;
    Ok(counts.iter().map(|&c| c == n as f64).collect())
}

/// True where the condition held at least once in the last `n` positions.
pub fn exist(cond: &[bool], n: usize) -> Result<Vec<bool>> {
    let counts = count(cond, n)?;
    Ok(counts.iter().map(|&c| c > 0.0).collect())
}

/// Bars elapsed between the last true value and the end of the series.
///
/// 0 if the final position is true, -1 if the condition never held.
pub fn bars_last(cond: &[bool]) -> i64 {
    match cond.iter().rposition(|&c| c) {
        Some(idx) => (cond.len() - idx - 1) as i64,
        None => -1,
    }
}

/// True at `i` iff `cond` held at every position from `a` bars ago through
/// `b` bars ago, inclusive. Positions without `a` bars of history are false.
pub fn last(cond: &[bool], a: usize, b: usize) -> Result<Vec<bool>> {
    if b > a {
        return Err(IndicatorError::InvalidWindow { a, b });
    }
    let len = cond.len();
    let mut result = vec![false; len];
    for i in a..len {
        result[i] = cond[i - a..=i - b].iter().all(|&c| c);
    }
    Ok(result)
}

/// True exactly where `s1` moves from `<= s2` to `> s2`.
///
/// Detected as a two-bar count of `s1 > s2` equal to one, with `s1 > s2` now.
pub fn cross(s1: &[f64], s2: &[f64]) -> Result<Vec<bool>> {
    let above = greater_than(s1, s2)?;
    let counts = count(&above, 2)?;
    Ok(counts
        .iter()
        .zip(&above)
        .map(|(&c, &now)| now && c == 1.0)
        .collect())
}
