//! ASI: accumulation swing index.
//!
//! Per bar, with lc = close[1]:
//!   aa = |high - lc|, bb = |low - lc|, cc = |high - low[1]|, dd = |lc - open[1]|
//!   r  = aa + bb/2 + dd/4   if aa is the largest
//!        bb + aa/2 + dd/4   if bb is the largest
//!        cc + dd/4          otherwise
//!   x  = close - lc + (close - open)/2 + lc - open[1]
//!   si = 16 * x / r * max(aa, bb)
//! asi  = SUM(si, m1)
//! asit = MA(asi, m2)

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_len, check_period, Result};
use crate::primitives::{moving_avg, rolling_sum, safe_div, shift, Series};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asi {
    pub m1: usize,
    pub m2: usize,
}

impl Default for Asi {
    fn default() -> Self {
        Self { m1: 26, m2: 10 }
    }
}

impl Asi {
    pub fn new(m1: usize, m2: usize) -> Self {
        Self { m1, m2 }
    }
}

/// Swing index of one `[open, high, low, close]` bar against the previous one.
fn swing(bar: [f64; 4], prev_open: f64, prev_low: f64, prev_close: f64) -> f64 {
    let [open, high, low, close] = bar;
    let aa = (high - prev_close).abs();
    let bb = (low - prev_close).abs();
    let cc = (high - prev_low).abs();
    let dd = (prev_close - prev_open).abs();

    let r = if aa > bb && aa > cc {
        aa + bb / 2.0 + dd / 4.0
    } else if bb > cc && bb > aa {
        bb + aa / 2.0 + dd / 4.0
    } else {
        cc + dd / 4.0
    };
    let x = close - prev_close + (close - open) / 2.0 + prev_close - prev_open;
    safe_div(16.0 * x, r) * aa.max(bb)
}

pub fn asi(
    open: &[f64],
    close: &[f64],
    high: &[f64],
    low: &[f64],
    m1: usize,
    m2: usize,
) -> Result<IndicatorResult> {
    check_len(close.len(), open)?;
    check_len(close.len(), high)?;
    check_len(close.len(), low)?;
    check_period("m1", m1, 1)?;
    check_period("m2", m2, 1)?;

    let prev_open = shift(open, 1);
    let prev_close = shift(close, 1);
    let prev_low = shift(low, 1);

    let si: Series = (0..close.len())
        .map(|i| {
            swing(
                [open[i], high[i], low[i], close[i]],
                prev_open[i],
                prev_low[i],
                prev_close[i],
            )
        })
        .collect();

    let line = rolling_sum(&si, m1)?;
    let signal = moving_avg(&line, m2)?;

    Ok(round_result(IndicatorResult::new(
        Asi::new(m1, m2).name(),
        vec![("asi", line), ("asit", signal)],
    )))
}

impl Indicator for Asi {
    fn name(&self) -> String {
        format!("asi_{}_{}", self.m1, self.m2)
    }

    fn lookback(&self) -> usize {
        self.m1 + self.m2.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        asi(data.open(), data.close(), data.high(), data.low(), self.m1, self.m2)
    }
}
