//! Bollinger Bands.
//!
//! mid   = MA(close, n)
//! upper = mid + p * STD(close, n)
//! lower = mid - p * STD(close, n)
//! Population stddev (divide by n). Lookback: n - 1. `p` must be finite and
//! non-negative, which keeps upper >= mid >= lower.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_multiplier, check_period, Result};
use crate::primitives::{map2, moving_avg, rolling_std};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Boll {
    pub n: usize,
    pub p: f64,
}

impl Default for Boll {
    fn default() -> Self {
        Self { n: 20, p: 2.0 }
    }
}

impl Boll {
    pub fn new(n: usize, p: f64) -> Self {
        Self { n, p }
    }
}

pub fn boll(close: &[f64], n: usize, p: f64) -> Result<IndicatorResult> {
    check_period("n", n, 1)?;
    check_multiplier("p", p)?;

    let mid = moving_avg(close, n)?;
    let std = rolling_std(close, n)?;
    let upper = map2(&mid, &std, |m, s| m + p * s)?;
    let lower = map2(&mid, &std, |m, s| m - p * s)?;

    Ok(round_result(IndicatorResult::new(
        Boll::new(n, p).name(),
        vec![("upper", upper), ("mid", mid), ("lower", lower)],
    )))
}

impl Indicator for Boll {
    fn name(&self) -> String {
        format!("boll_{}_{}", self.n, self.p)
    }

    fn lookback(&self) -> usize {
        self.n.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        boll(data.close(), self.n, self.p)
    }
}
