//! BRAR: popularity (AR) and willingness (BR) ratios.
//!
//! ar = SUM(high - open, m1) / SUM(open - low, m1) * 100
//! br = SUM(max(0, high - close[1]), m1) / SUM(max(0, close[1] - low), m1) * 100
//! 0 on a zero denominator. Each rolling sum is computed once per call.
//! Lookback: m1 (br needs the previous close).

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_len, check_period, Result};
use crate::primitives::{div_or_zero, max_with, rolling_sum, scale, shift, sub};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brar {
    pub m1: usize,
}

impl Default for Brar {
    fn default() -> Self {
        Self { m1: 26 }
    }
}

impl Brar {
    pub fn new(m1: usize) -> Self {
        Self { m1 }
    }
}

pub fn brar(
    open: &[f64],
    close: &[f64],
    high: &[f64],
    low: &[f64],
    m1: usize,
) -> Result<IndicatorResult> {
    check_len(close.len(), open)?;
    check_len(close.len(), high)?;
    check_len(close.len(), low)?;
    check_period("m1", m1, 1)?;

    let ar = div_or_zero(
        &rolling_sum(&sub(high, open)?, m1)?,
        &rolling_sum(&sub(open, low)?, m1)?,
    )?;

    let prev_close = shift(close, 1);
    let br = div_or_zero(
        &rolling_sum(&max_with(&sub(high, &prev_close)?, 0.0), m1)?,
        &rolling_sum(&max_with(&sub(&prev_close, low)?, 0.0), m1)?,
    )?;

    Ok(round_result(IndicatorResult::new(
        Brar::new(m1).name(),
        vec![("ar", scale(&ar, 100.0)), ("br", scale(&br, 100.0))],
    )))
}

impl Indicator for Brar {
    fn name(&self) -> String {
        format!("brar_{}", self.m1)
    }

    fn lookback(&self) -> usize {
        self.m1
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        brar(data.open(), data.close(), data.high(), data.low(), self.m1)
    }
}
