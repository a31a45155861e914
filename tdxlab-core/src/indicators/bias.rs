//! BIAS: percentage distance of close from its moving average, at three periods.
//!
//! bias = (close - MA(close, l)) / MA(close, l) * 100, 0 when the average is 0

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::{moving_avg, safe_div, Series};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bias {
    pub l1: usize,
    pub l2: usize,
    pub l3: usize,
}

impl Default for Bias {
    fn default() -> Self {
        Self {
            l1: 6,
            l2: 12,
            l3: 24,
        }
    }
}

impl Bias {
    pub fn new(l1: usize, l2: usize, l3: usize) -> Self {
        Self { l1, l2, l3 }
    }
}

fn deviation(close: &[f64], l: usize) -> Result<Series> {
    let avg = moving_avg(close, l)?;
    Ok(close
        .iter()
        .zip(&avg)
        .map(|(&c, &m)| safe_div(c - m, m) * 100.0)
        .collect())
}

pub fn bias(close: &[f64], l1: usize, l2: usize, l3: usize) -> Result<IndicatorResult> {
    check_period("l1", l1, 1)?;
    check_period("l2", l2, 1)?;
    check_period("l3", l3, 1)?;

    Ok(round_result(IndicatorResult::new(
        Bias::new(l1, l2, l3).name(),
        vec![
            ("bias1", deviation(close, l1)?),
            ("bias2", deviation(close, l2)?),
            ("bias3", deviation(close, l3)?),
        ],
    )))
}

impl Indicator for Bias {
    fn name(&self) -> String {
        format!("bias_{}_{}_{}", self.l1, self.l2, self.l3)
    }

    fn lookback(&self) -> usize {
        self.l1.max(self.l2).max(self.l3).saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        bias(data.close(), self.l1, self.l2, self.l3)
    }
}
