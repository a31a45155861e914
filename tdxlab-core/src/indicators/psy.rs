//! PSY: psychological line.
//!
//! psy   = COUNT(close > close[1], n) / n * 100
//! psyma = MA(psy, m)
//! Lookback: n + m - 2.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::analyzers::{count, greater_than};
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::{moving_avg, scale, shift};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Psy {
    pub n: usize,
    pub m: usize,
}

impl Default for Psy {
    fn default() -> Self {
        Self { n: 12, m: 6 }
    }
}

impl Psy {
    pub fn new(n: usize, m: usize) -> Self {
        Self { n, m }
    }
}

pub fn psy(close: &[f64], n: usize, m: usize) -> Result<IndicatorResult> {
    check_period("n", n, 1)?;
    check_period("m", m, 1)?;

    let up_days = greater_than(close, &shift(close, 1))?;
    let line = scale(&count(&up_days, n)?, 100.0 / n as f64);
    let smoothed = moving_avg(&line, m)?;

    Ok(round_result(IndicatorResult::new(
        Psy::new(n, m).name(),
        vec![("psy", line), ("psyma", smoothed)],
    )))
}

impl Indicator for Psy {
    fn name(&self) -> String {
        format!("psy_{}_{}", self.n, self.m)
    }

    fn lookback(&self) -> usize {
        (self.n + self.m).saturating_sub(2)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        psy(data.close(), self.n, self.m)
    }
}
