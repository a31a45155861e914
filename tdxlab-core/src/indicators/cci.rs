//! Commodity Channel Index (CCI).
//!
//! tp  = (close + high + low) / 3
//! cci = (tp - MA(tp, n)) / (0.015 * AVEDEV(tp, n)), 0 on a zero deviation
//! Lookback: n - 1.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_len, check_period, Result};
use crate::primitives::{avg_deviation, moving_avg, safe_div, Series};
use crate::rounding::round_output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cci {
    pub n: usize,
}

impl Default for Cci {
    fn default() -> Self {
        Self { n: 14 }
    }
}

impl Cci {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

/// `(close + high + low) / 3` per bar.
pub fn typical_price(close: &[f64], high: &[f64], low: &[f64]) -> Result<Series> {
    check_len(close.len(), high)?;
    check_len(close.len(), low)?;
    Ok((0..close.len())
        .map(|i| (close[i] + high[i] + low[i]) / 3.0)
        .collect())
}

pub fn cci(close: &[f64], high: &[f64], low: &[f64], n: usize) -> Result<Series> {
    check_period("n", n, 1)?;

    let tp = typical_price(close, high, low)?;
    let avg = moving_avg(&tp, n)?;
    let dev = avg_deviation(&tp, n)?;

    Ok(round_output(
        (0..tp.len())
            .map(|i| safe_div(tp[i] - avg[i], 0.015 * dev[i]))
            .collect(),
    ))
}

impl Indicator for Cci {
    fn name(&self) -> String {
        format!("cci_{}", self.n)
    }

    fn lookback(&self) -> usize {
        self.n.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        Ok(IndicatorResult::single(
            self.name(),
            "cci",
            cci(data.close(), data.high(), data.low(), self.n)?,
        ))
    }
}
