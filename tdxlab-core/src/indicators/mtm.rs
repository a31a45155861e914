//! MTM: momentum.
//!
//! mtm   = close - close[n]
//! mtmma = MA(mtm, m)
//! Lookback: n + m - 1.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::{delta, moving_avg};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mtm {
    pub n: usize,
    pub m: usize,
}

impl Default for Mtm {
    fn default() -> Self {
        Self { n: 12, m: 6 }
    }
}

impl Mtm {
    pub fn new(n: usize, m: usize) -> Self {
        Self { n, m }
    }
}

pub fn mtm(close: &[f64], n: usize, m: usize) -> Result<IndicatorResult> {
    check_period("n", n, 1)?;
    check_period("m", m, 1)?;

    let momentum = delta(close, n);
    let smoothed = moving_avg(&momentum, m)?;

    Ok(round_result(IndicatorResult::new(
        Mtm::new(n, m).name(),
        vec![("mtm", momentum), ("mtmma", smoothed)],
    )))
}

impl Indicator for Mtm {
    fn name(&self) -> String {
        format!("mtm_{}_{}", self.n, self.m)
    }

    fn lookback(&self) -> usize {
        self.n + self.m.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        mtm(data.close(), self.n, self.m)
    }
}
