//! EXPMA: a fast and a slow exponential moving average of the close.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::exp_smooth;
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expma {
    pub n1: usize,
    pub n2: usize,
}

impl Default for Expma {
    fn default() -> Self {
        Self { n1: 12, n2: 50 }
    }
}

impl Expma {
    pub fn new(n1: usize, n2: usize) -> Self {
        Self { n1, n2 }
    }
}

pub fn expma(close: &[f64], n1: usize, n2: usize) -> Result<IndicatorResult> {
    check_period("n1", n1, 1)?;
    check_period("n2", n2, 1)?;

    Ok(round_result(IndicatorResult::new(
        Expma::new(n1, n2).name(),
        vec![("exp1", exp_smooth(close, n1)?), ("exp2", exp_smooth(close, n2)?)],
    )))
}

impl Indicator for Expma {
    fn name(&self) -> String {
        format!("expma_{}_{}", self.n1, self.n2)
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        expma(data.close(), self.n1, self.n2)
    }
}
