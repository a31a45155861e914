//! TAQ: Donchian-style channel.
//!
//! up = HHV(high, n); down = LLV(low, n); mid = (up + down) / 2
//! Lookback: n - 1.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_len, check_period, Result};
use crate::primitives::{map2, rolling_max, rolling_min};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Taq {
    pub n: usize,
}

impl Default for Taq {
    fn default() -> Self {
        Self { n: 20 }
    }
}

impl Taq {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

pub fn taq(high: &[f64], low: &[f64], n: usize) -> Result<IndicatorResult> {
    check_len(high.len(), low)?;
    check_period("n", n, 1)?;

    let up = rolling_max(high, n)?;
    let down = rolling_min(low, n)?;
    let mid = map2(&up, &down, |u, d| (u + d) / 2.0)?;

    Ok(round_result(IndicatorResult::new(
        Taq::new(n).name(),
        vec![("up", up), ("mid", mid), ("down", down)],
    )))
}

impl Indicator for Taq {
    fn name(&self) -> String {
        format!("taq_{}", self.n)
    }

    fn lookback(&self) -> usize {
        self.n.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        taq(data.high(), data.low(), self.n)
    }
}
