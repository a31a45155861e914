//! KTN: Keltner channel.
//!
//! mid   = EMA(typical price, n)
//! upper = mid + 2 * ATR(m)
//! lower = mid - 2 * ATR(m)
//! The mid line is defined from bar 0; the bands wait on the ATR, so the
//! lookback is m.

use serde::{Deserialize, Serialize};

use super::atr::average_true_range;
use super::{typical_price, IndicatorResult};
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::{add, exp_smooth, scale, sub};
use crate::rounding::round_result;

const BAND_WIDTH: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ktn {
    pub n: usize,
    pub m: usize,
}

impl Default for Ktn {
    fn default() -> Self {
        Self { n: 20, m: 10 }
    }
}

impl Ktn {
    pub fn new(n: usize, m: usize) -> Self {
        Self { n, m }
    }
}

pub fn ktn(
    close: &[f64],
    high: &[f64],
    low: &[f64],
    n: usize,
    m: usize,
) -> Result<IndicatorResult> {
    check_period("n", n, 1)?;
    check_period("m", m, 1)?;

    let mid = exp_smooth(&typical_price(close, high, low)?, n)?;
    let offset = scale(&average_true_range(close, high, low, m)?, BAND_WIDTH);
    let upper = add(&mid, &offset)?;
    let lower = sub(&mid, &offset)?;

    Ok(round_result(IndicatorResult::new(
        Ktn::new(n, m).name(),
        vec![("upper", upper), ("mid", mid), ("lower", lower)],
    )))
}

impl Indicator for Ktn {
    fn name(&self) -> String {
        format!("ktn_{}_{}", self.n, self.m)
    }

    fn lookback(&self) -> usize {
        self.m
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        ktn(data.close(), data.high(), data.low(), self.n, self.m)
    }
}
