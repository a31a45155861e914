//! DPO: detrended price oscillator.
//!
//! dpo   = close - MA(close, m1)[m2]
//! madpo = MA(dpo, m3)

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::{moving_avg, shift, sub};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dpo {
    pub m1: usize,
    pub m2: usize,
    pub m3: usize,
}

impl Default for Dpo {
    fn default() -> Self {
        Self {
            m1: 20,
            m2: 10,
            m3: 6,
        }
    }
}

impl Dpo {
    pub fn new(m1: usize, m2: usize, m3: usize) -> Self {
        Self { m1, m2, m3 }
    }
}

pub fn dpo(close: &[f64], m1: usize, m2: usize, m3: usize) -> Result<IndicatorResult> {
    check_period("m1", m1, 1)?;
    check_period("m2", m2, 1)?;
    check_period("m3", m3, 1)?;

    let detrended = sub(close, &shift(&moving_avg(close, m1)?, m2))?;
    let smoothed = moving_avg(&detrended, m3)?;

    Ok(round_result(IndicatorResult::new(
        Dpo::new(m1, m2, m3).name(),
        vec![("dpo", detrended), ("madpo", smoothed)],
    )))
}

impl Indicator for Dpo {
    fn name(&self) -> String {
        format!("dpo_{}_{}_{}", self.m1, self.m2, self.m3)
    }

    fn lookback(&self) -> usize {
        self.m1.saturating_sub(1) + self.m2 + self.m3.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        dpo(data.close(), self.m1, self.m2, self.m3)
    }
}
