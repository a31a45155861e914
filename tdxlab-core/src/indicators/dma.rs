//! DMA: difference of moving averages.
//!
//! dif   = MA(close, n1) - MA(close, n2)
//! difma = MA(dif, m)

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::{moving_avg, sub};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dma {
    pub n1: usize,
    pub n2: usize,
    pub m: usize,
}

impl Default for Dma {
    fn default() -> Self {
        Self {
            n1: 10,
            n2: 50,
            m: 10,
        }
    }
}

impl Dma {
    pub fn new(n1: usize, n2: usize, m: usize) -> Self {
        Self { n1, n2, m }
    }
}

pub fn dma(close: &[f64], n1: usize, n2: usize, m: usize) -> Result<IndicatorResult> {
    check_period("n1", n1, 1)?;
    check_period("n2", n2, 1)?;
    check_period("m", m, 1)?;

    let dif = sub(&moving_avg(close, n1)?, &moving_avg(close, n2)?)?;
    let difma = moving_avg(&dif, m)?;

    Ok(round_result(IndicatorResult::new(
        Dma::new(n1, n2, m).name(),
        vec![("dif", dif), ("difma", difma)],
    )))
}

impl Indicator for Dma {
    fn name(&self) -> String {
        format!("dma_{}_{}_{}", self.n1, self.n2, self.m)
    }

    fn lookback(&self) -> usize {
        self.n1.max(self.n2).saturating_sub(1) + self.m.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        dma(data.close(), self.n1, self.n2, self.m)
    }
}
