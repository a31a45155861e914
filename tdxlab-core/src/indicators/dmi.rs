//! DMI: directional movement index.
//!
//! tr   = SUM(true range, m1)
//! hd   = high - high[1];  ld = low[1] - low
//! dmp  = SUM(hd where hd > 0 and hd > ld, else 0, m1)
//! dmm  = SUM(ld where ld > 0 and ld > hd, else 0, m1)
//! pdi  = dmp * 100 / tr;  mdi = dmm * 100 / tr
//! adx  = MA(|mdi - pdi| / (pdi + mdi) * 100, m2)
//! adxr = (adx + adx[m2]) / 2
//! Ratios are 0 on a zero denominator. Lookback: m1 + 2*m2 - 1 (adxr).

use serde::{Deserialize, Serialize};

use super::atr::true_range;
use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_len, check_period, Result};
use crate::primitives::{moving_avg, rolling_sum, safe_div, shift, Series};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dmi {
    pub m1: usize,
    pub m2: usize,
}

impl Default for Dmi {
    fn default() -> Self {
        Self { m1: 14, m2: 6 }
    }
}

impl Dmi {
    pub fn new(m1: usize, m2: usize) -> Self {
        Self { m1, m2 }
    }
}

pub fn dmi(
    close: &[f64],
    high: &[f64],
    low: &[f64],
    m1: usize,
    m2: usize,
) -> Result<IndicatorResult> {
    check_len(close.len(), high)?;
    check_len(close.len(), low)?;
    check_period("m1", m1, 1)?;
    check_period("m2", m2, 1)?;

    let len = close.len();
    let tr = rolling_sum(&true_range(close, high, low)?, m1)?;

    let prev_high = shift(high, 1);
    let prev_low = shift(low, 1);
    let mut plus_move = vec![0.0; len];
    let mut minus_move = vec![0.0; len];
    for i in 0..len {
        let hd = high[i] - prev_high[i];
        let ld = prev_low[i] - low[i];
        if hd > 0.0 && hd > ld {
            plus_move[i] = hd;
        }
        if ld > 0.0 && ld > hd {
            minus_move[i] = ld;
        }
    }
    let dmp = rolling_sum(&plus_move, m1)?;
    let dmm = rolling_sum(&minus_move, m1)?;

    let pdi: Series = (0..len).map(|i| safe_div(dmp[i] * 100.0, tr[i])).collect();
    let mdi: Series = (0..len).map(|i| safe_div(dmm[i] * 100.0, tr[i])).collect();

    let spread: Series = (0..len)
        .map(|i| safe_div((mdi[i] - pdi[i]).abs(), pdi[i] + mdi[i]) * 100.0)
        .collect();
    let adx = moving_avg(&spread, m2)?;
    let adx_lag = shift(&adx, m2);
    let adxr = adx.iter().zip(&adx_lag).map(|(a, b)| (a + b) / 2.0).collect();

    Ok(round_result(IndicatorResult::new(
        Dmi::new(m1, m2).name(),
        vec![("pdi", pdi), ("mdi", mdi), ("adx", adx), ("adxr", adxr)],
    )))
}

impl Indicator for Dmi {
    fn name(&self) -> String {
        format!("dmi_{}_{}", self.m1, self.m2)
    }

    fn lookback(&self) -> usize {
        self.m1 + 2 * self.m2 - 1
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        dmi(data.close(), data.high(), data.low(), self.m1, self.m2)
    }
}
