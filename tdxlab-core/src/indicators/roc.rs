//! ROC: rate of change.
//!
//! roc   = 100 * (close - close[n]) / close[n], 0 when close[n] is 0
//! maroc = MA(roc, m)
//! Lookback: n + m - 1.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::{moving_avg, safe_div, shift, Series};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roc {
    pub n: usize,
    pub m: usize,
}

impl Default for Roc {
    fn default() -> Self {
        Self { n: 12, m: 6 }
    }
}

impl Roc {
    pub fn new(n: usize, m: usize) -> Self {
        Self { n, m }
    }
}

pub fn roc(close: &[f64], n: usize, m: usize) -> Result<IndicatorResult> {
    check_period("n", n, 1)?;
    check_period("m", m, 1)?;

    let base = shift(close, n);
    let rate: Series = close
        .iter()
        .zip(&base)
        .map(|(&c, &b)| safe_div(100.0 * (c - b), b))
        .collect();
    let smoothed = moving_avg(&rate, m)?;

    Ok(round_result(IndicatorResult::new(
        Roc::new(n, m).name(),
        vec![("roc", rate), ("maroc", smoothed)],
    )))
}

impl Indicator for Roc {
    fn name(&self) -> String {
        format!("roc_{}_{}", self.n, self.m)
    }

    fn lookback(&self) -> usize {
        self.n + self.m.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        roc(data.close(), self.n, self.m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        let close = [100.0, 110.0, 121.0, 99.0];
        let out = roc(&close, 1, 2).unwrap();
        assert!(out.get("roc", 0).unwrap().is_nan());
        assert_eq!(out.get("roc", 1), Some(10.0));
        assert_eq!(out.get("roc", 2), Some(10.0));
        // (99 - 121) / 121 = -18.18%
        assert_eq!(out.get("roc", 3), Some(-18.18));
        assert_eq!(out.get("maroc", 2), Some(10.0));
    }

    #[test]
    fn zero_base_gives_zero() {
        let out = roc(&[0.0, 5.0], 1, 1).unwrap();
        assert_eq!(out.get("roc", 1), Some(0.0));
    }
}
