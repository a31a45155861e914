//! Average True Range (ATR).
//!
//! tr  = max(high - low, |close[1] - high|, |close[1] - low|)
//! atr = MA(tr, n)
//! tr[0] is undefined (no previous close), so the lookback is n.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_len, check_period, Result};
use crate::primitives::{moving_avg, shift, Series};
use crate::rounding::round_output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Atr {
    pub n: usize,
}

impl Default for Atr {
    fn default() -> Self {
        Self { n: 20 }
    }
}

impl Atr {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

/// True range per bar. Position 0 is NaN.
pub fn true_range(close: &[f64], high: &[f64], low: &[f64]) -> Result<Series> {
    check_len(close.len(), high)?;
    check_len(close.len(), low)?;

    let prev_close = shift(close, 1);
    Ok((0..close.len())
        .map(|i| {
            let (h, l, pc) = (high[i], low[i], prev_close[i]);
            if h.is_nan() || l.is_nan() || pc.is_nan() {
                f64::NAN
            } else {
                (h - l).max((pc - h).abs()).max((pc - l).abs())
            }
        })
        .collect())
}

/// Unrounded ATR, shared with Keltner channels.
pub(crate) fn average_true_range(
    close: &[f64],
    high: &[f64],
    low: &[f64],
    n: usize,
) -> Result<Series> {
    moving_avg(&true_range(close, high, low)?, n)
}

pub fn atr(close: &[f64], high: &[f64], low: &[f64], n: usize) -> Result<Series> {
    check_period("n", n, 1)?;
    Ok(round_output(average_true_range(close, high, low, n)?))
}

impl Indicator for Atr {
    fn name(&self) -> String {
        format!("atr_{}", self.n)
    }

    fn lookback(&self) -> usize {
        self.n
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        Ok(IndicatorResult::single(
            self.name(),
            "atr",
            atr(data.close(), data.high(), data.low(), self.n)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    // (high, low, close)
    const BARS: [(f64, f64, f64); 5] = [
        (105.0, 95.0, 102.0),
        (108.0, 100.0, 106.0),
        (107.0, 98.0, 99.0),
        (103.0, 97.0, 101.0),
        (106.0, 100.0, 105.0),
    ];

    fn columns() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (
            BARS.iter().map(|b| b.2).collect(),
            BARS.iter().map(|b| b.0).collect(),
            BARS.iter().map(|b| b.1).collect(),
        )
    }

    #[test]
    fn true_range_basic() {
        let (close, high, low) = columns();
        let tr = true_range(&close, &high, &low).unwrap();
        assert!(tr[0].is_nan());
        assert_approx(tr[1], 8.0, DEFAULT_EPSILON);
        assert_approx(tr[2], 9.0, DEFAULT_EPSILON);
        assert_approx(tr[3], 6.0, DEFAULT_EPSILON);
        assert_approx(tr[4], 6.0, DEFAULT_EPSILON);
    }

    #[test]
    fn true_range_gap_up() {
        // prev close 100, bar 108..115 → |100 - 115| = 15
        let tr = true_range(&[100.0, 112.0], &[102.0, 115.0], &[97.0, 108.0]).unwrap();
        assert_approx(tr[1], 15.0, DEFAULT_EPSILON);
    }

    #[test]
    fn atr_period_3() {
        let (close, high, low) = columns();
        let out = atr(&close, &high, &low, 3).unwrap();
        for v in &out[..3] {
            assert!(v.is_nan());
        }
        // (8 + 9 + 6) / 3 = 7.667, (9 + 6 + 6) / 3 = 7
        assert_eq!(out[3], 7.67);
        assert_eq!(out[4], 7.0);
    }

    #[test]
    fn lookback_is_n() {
        assert_eq!(Atr::default().lookback(), 20);
    }
}
