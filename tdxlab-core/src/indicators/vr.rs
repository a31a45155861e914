//! VR: volume ratio.
//!
//! vr = SUM(vol on up bars, n) / SUM(vol on down-or-flat bars, n) * 100
//! Up means close > close[1]. The first bar has no previous close and counts
//! on neither side. 0 on a zero denominator. Lookback: n - 1.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_len, check_period, Result};
use crate::primitives::{div_or_zero, rolling_sum, scale, shift, Series};
use crate::rounding::round_output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vr {
    pub n: usize,
}

impl Default for Vr {
    fn default() -> Self {
        Self { n: 26 }
    }
}

impl Vr {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

pub fn vr(close: &[f64], volume: &[f64], n: usize) -> Result<Series> {
    check_len(close.len(), volume)?;
    check_period("n", n, 1)?;

    let prev = shift(close, 1);
    let mut up_volume = vec![0.0; close.len()];
    let mut down_volume = vec![0.0; close.len()];
    for i in 0..close.len() {
        if close[i] > prev[i] {
            up_volume[i] = volume[i];
        } else if close[i] <= prev[i] {
            down_volume[i] = volume[i];
        }
    }

    let ratio = div_or_zero(&rolling_sum(&up_volume, n)?, &rolling_sum(&down_volume, n)?)?;
    Ok(round_output(scale(&ratio, 100.0)))
}

impl Indicator for Vr {
    fn name(&self) -> String {
        format!("vr_{}", self.n)
    }

    fn lookback(&self) -> usize {
        self.n.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        Ok(IndicatorResult::single(
            self.name(),
            "vr",
            vr(data.close(), data.volume(), self.n)?,
        ))
    }
}
