//! KDJ stochastic oscillator.
//!
//! rsv = (close - LLV(low, n)) / (HHV(high, n) - LLV(low, n)) * 100, 0 on a flat range
//! k   = EMA(rsv, 2*m1 - 1)
//! d   = EMA(k, 2*m2 - 1)
//! j   = 3k - 2d
//! Lookback: n - 1 (rsv warm-up; the smoothers start at the first defined rsv).

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::error::{check_len, check_period, Result};
use crate::domain::Ohlcv;
use crate::primitives::{exp_smooth, rolling_max, rolling_min, safe_div, Series};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kdj {
    pub n: usize,
    pub m1: usize,
    pub m2: usize,
}

impl Default for Kdj {
    fn default() -> Self {
        Self { n: 9, m1: 3, m2: 3 }
    }
}

impl Kdj {
    pub fn new(n: usize, m1: usize, m2: usize) -> Self {
        Self { n, m1, m2 }
    }
}

pub fn kdj(
    close: &[f64],
    high: &[f64],
    low: &[f64],
    n: usize,
    m1: usize,
    m2: usize,
) -> Result<IndicatorResult> {
    check_len(close.len(), high)?;
    check_len(close.len(), low)?;
    check_period("n", n, 1)?;
    check_period("m1", m1, 1)?;
    check_period("m2", m2, 1)?;

    let hhv = rolling_max(high, n)?;
    let llv = rolling_min(low, n)?;
    let rsv: Series = (0..close.len())
        .map(|i| safe_div(close[i] - llv[i], hhv[i] - llv[i]) * 100.0)
        .collect();

    let k = exp_smooth(&rsv, 2 * m1 - 1)?;
    let d = exp_smooth(&k, 2 * m2 - 1)?;
    let j = k.iter().zip(&d).map(|(k, d)| 3.0 * k - 2.0 * d).collect();

    Ok(round_result(IndicatorResult::new(
        Kdj::new(n, m1, m2).name(),
        vec![("k", k), ("d", d), ("j", j)],
    )))
}

impl Indicator for Kdj {
    fn name(&self) -> String {
        format!("kdj_{}_{}_{}", self.n, self.m1, self.m2)
    }

    fn lookback(&self) -> usize {
        self.n.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        kdj(data.close(), data.high(), data.low(), self.n, self.m1, self.m2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, sample_ohlcv};

    #[test]
    fn close_at_top_of_range_is_100() {
        let close = [10.0, 11.0, 12.0, 13.0, 14.0];
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        let out = kdj(&close, &close, &low, 3, 3, 3).unwrap();
        assert!(out.get("k", 0).unwrap().is_nan());
        assert!(out.get("k", 1).unwrap().is_nan());
        for i in 2..5 {
            assert_eq!(out.get("k", i), Some(100.0));
            assert_eq!(out.get("d", i), Some(100.0));
            assert_eq!(out.get("j", i), Some(100.0));
        }
    }

    #[test]
    fn flat_range_gives_zero_rsv() {
        let flat = [5.0; 6];
        let out = kdj(&flat, &flat, &flat, 3, 3, 3).unwrap();
        assert_eq!(out.get("k", 5), Some(0.0));
        assert_eq!(out.get("j", 5), Some(0.0));
    }

    #[test]
    fn j_is_three_k_minus_two_d() {
        let data = sample_ohlcv(80);
        let out = Kdj::default().compute(&data).unwrap();
        for i in 8..80 {
            let k = out.get("k", i).unwrap();
            let d = out.get("d", i).unwrap();
            let j = out.get("j", i).unwrap();
            // inputs were rounded separately, allow two rounding steps
            assert_approx(j, 3.0 * k - 2.0 * d, 0.03);
        }
    }

    #[test]
    fn ragged_input_rejected() {
        assert!(kdj(&[1.0, 2.0], &[1.0], &[1.0, 2.0], 9, 3, 3).is_err());
    }

    #[test]
    fn lookback_is_n_minus_one() {
        assert_eq!(Kdj::default().lookback(), 8);
    }
}
