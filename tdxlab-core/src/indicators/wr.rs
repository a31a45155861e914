//! Williams %R at two periods.
//!
//! wr = (HHV(high, n) - close) / (HHV(high, n) - LLV(low, n)) * 100, 0 on a flat range
//! Computed once at `n` and once at `n1`. Lookback: max(n, n1) - 1.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_len, check_period, Result};
use crate::primitives::{rolling_max, rolling_min, safe_div, Series};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wr {
    pub n: usize,
    pub n1: usize,
}

impl Default for Wr {
    fn default() -> Self {
        Self { n: 10, n1: 6 }
    }
}

impl Wr {
    pub fn new(n: usize, n1: usize) -> Self {
        Self { n, n1 }
    }
}

fn williams(close: &[f64], high: &[f64], low: &[f64], n: usize) -> Result<Series> {
    let hhv = rolling_max(high, n)?;
    let llv = rolling_min(low, n)?;
    Ok((0..close.len())
        .map(|i| safe_div(hhv[i] - close[i], hhv[i] - llv[i]) * 100.0)
        .collect())
}

pub fn wr(
    close: &[f64],
    high: &[f64],
    low: &[f64],
    n: usize,
    n1: usize,
) -> Result<IndicatorResult> {
    check_len(close.len(), high)?;
    check_len(close.len(), low)?;
    check_period("n", n, 1)?;
    check_period("n1", n1, 1)?;

    Ok(round_result(IndicatorResult::new(
        Wr::new(n, n1).name(),
        vec![
            ("wr", williams(close, high, low, n)?),
            ("wr1", williams(close, high, low, n1)?),
        ],
    )))
}

impl Indicator for Wr {
    fn name(&self) -> String {
        format!("wr_{}_{}", self.n, self.n1)
    }

    fn lookback(&self) -> usize {
        self.n.max(self.n1).saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        wr(data.close(), data.high(), data.low(), self.n, self.n1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::sample_ohlcv;

    #[test]
    fn close_at_high_is_zero_at_low_is_100() {
        let high = [12.0, 12.0, 12.0, 12.0];
        let low = [8.0, 8.0, 8.0, 8.0];
        let at_high = wr(&high, &high, &low, 2, 3).unwrap();
        assert_eq!(at_high.get("wr", 3), Some(0.0));
        let at_low = wr(&low, &high, &low, 2, 3).unwrap();
        assert_eq!(at_low.get("wr", 3), Some(100.0));
        assert_eq!(at_low.get("wr1", 3), Some(100.0));
    }

    #[test]
    fn midpoint_is_50_and_warmup_differs_per_period() {
        let high = [12.0; 4];
        let low = [8.0; 4];
        let close = [10.0; 4];
        let out = wr(&close, &high, &low, 2, 3).unwrap();
        assert!(out.get("wr", 0).unwrap().is_nan());
        assert_eq!(out.get("wr", 1), Some(50.0));
        assert!(out.get("wr1", 1).unwrap().is_nan());
        assert_eq!(out.get("wr1", 2), Some(50.0));
    }

    #[test]
    fn flat_range_is_zero() {
        let flat = [5.0; 4];
        let out = wr(&flat, &flat, &flat, 2, 2).unwrap();
        assert_eq!(out.get("wr", 3), Some(0.0));
    }

    #[test]
    fn bounded_for_sane_bars() {
        let data = sample_ohlcv(100);
        let out = Wr::default().compute(&data).unwrap();
        for line in out.lines() {
            assert!(line
                .values
                .iter()
                .filter(|v| !v.is_nan())
                .all(|&v| (0.0..=100.0).contains(&v)));
        }
    }
}
