//! Relative Strength Index (RSI).
//!
//! delta = close - close[1], with the undefined first delta taken as 0
//! rsi   = SMA(max(delta, 0), n) / SMA(|delta|, n) * 100, 0 on a zero denominator
//! SMA here is the recursive smoother with weight 1, so the output is defined
//! from bar 0 and always lies in [0, 100].

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::{abs, delta, div_or_zero, max_with, recursive_smooth, scale, Series};
use crate::rounding::round_output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rsi {
    pub n: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { n: 24 }
    }
}

impl Rsi {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

pub fn rsi(close: &[f64], n: usize) -> Result<Series> {
    check_period("n", n, 1)?;

    let mut change = delta(close, 1);
    if let Some(first) = change.first_mut() {
        *first = 0.0;
    }
    let gains = recursive_smooth(&max_with(&change, 0.0), n, 1)?;
    let moves = recursive_smooth(&abs(&change), n, 1)?;

    Ok(round_output(scale(&div_or_zero(&gains, &moves)?, 100.0)))
}

impl Indicator for Rsi {
    fn name(&self) -> String {
        format!("rsi_{}", self.n)
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        Ok(IndicatorResult::single(
            self.name(),
            "rsi",
            rsi(data.close(), self.n)?,
        ))
    }
}
