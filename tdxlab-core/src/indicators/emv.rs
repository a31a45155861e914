//! EMV: ease of movement.
//!
//! volume_ratio = MA(vol, n) / vol
//! mid          = 100 * (hl - hl[1]) / hl, with hl = high + low
//! emv          = MA(mid * volume_ratio * (high - low) / MA(high - low, n), n)
//! maemv        = MA(emv, m)
//! Every ratio is 0 on a zero denominator.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_len, check_period, Result};
use crate::primitives::{add, moving_avg, safe_div, shift, sub, Series};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emv {
    pub n: usize,
    pub m: usize,
}

impl Default for Emv {
    fn default() -> Self {
        Self { n: 14, m: 9 }
    }
}

impl Emv {
    pub fn new(n: usize, m: usize) -> Self {
        Self { n, m }
    }
}

pub fn emv(
    high: &[f64],
    low: &[f64],
    volume: &[f64],
    n: usize,
    m: usize,
) -> Result<IndicatorResult> {
    check_len(high.len(), low)?;
    check_len(high.len(), volume)?;
    check_period("n", n, 1)?;
    check_period("m", m, 1)?;

    let len = high.len();
    let avg_volume = moving_avg(volume, n)?;
    let hl = add(high, low)?;
    let prev_hl = shift(&hl, 1);
    let range = sub(high, low)?;
    let avg_range = moving_avg(&range, n)?;

    let raw: Series = (0..len)
        .map(|i| {
            let volume_ratio = safe_div(avg_volume[i], volume[i]);
            let mid = safe_div(100.0 * (hl[i] - prev_hl[i]), hl[i]);
            mid * volume_ratio * safe_div(range[i], avg_range[i])
        })
        .collect();
    let line = moving_avg(&raw, n)?;
    let signal = moving_avg(&line, m)?;

    Ok(round_result(IndicatorResult::new(
        Emv::new(n, m).name(),
        vec![("emv", line), ("maemv", signal)],
    )))
}

impl Indicator for Emv {
    fn name(&self) -> String {
        format!("emv_{}_{}", self.n, self.m)
    }

    fn lookback(&self) -> usize {
        // raw needs n-1 bars of averages and one prior bar
        self.n.saturating_sub(1).max(1) + self.n.saturating_sub(1) + self.m.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        emv(data.high(), data.low(), data.volume(), self.n, self.m)
    }
}
