//! MACD: moving average convergence/divergence.
//!
//! dif  = EMA(close, short) - EMA(close, long)
//! dea  = EMA(dif, signal)
//! macd = (dif - dea) * 2
//! No warm-up: the exponential smoothers are defined from bar 0.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::{exp_smooth, map2, sub};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Macd {
    pub short: usize,
    pub long: usize,
    pub signal: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            short: 12,
            long: 26,
            signal: 9,
        }
    }
}

impl Macd {
    pub fn new(short: usize, long: usize, signal: usize) -> Self {
        Self {
            short,
            long,
            signal,
        }
    }
}

pub fn macd(close: &[f64], short: usize, long: usize, signal: usize) -> Result<IndicatorResult> {
    check_period("short", short, 1)?;
    check_period("long", long, 1)?;
    check_period("signal", signal, 1)?;

    let dif = sub(&exp_smooth(close, short)?, &exp_smooth(close, long)?)?;
    let dea = exp_smooth(&dif, signal)?;
    let histogram = map2(&dif, &dea, |d, e| (d - e) * 2.0)?;

    Ok(round_result(IndicatorResult::new(
        Macd::new(short, long, signal).name(),
        vec![("dif", dif), ("dea", dea), ("macd", histogram)],
    )))
}

impl Indicator for Macd {
    fn name(&self) -> String {
        format!("macd_{}_{}_{}", self.short, self.long, self.signal)
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        macd(data.close(), self.short, self.long, self.signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, sample_ohlcv};

    #[test]
    fn constant_price_is_flat_zero() {
        let out = macd(&[10.0; 40], 12, 26, 9).unwrap();
        for line in ["dif", "dea", "macd"] {
            assert!(out.line(line).unwrap().iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn first_bar_is_zero_and_defined() {
        let data = sample_ohlcv(60);
        let out = Macd::default().compute(&data).unwrap();
        assert_eq!(out.len(), 60);
        assert_eq!(out.get("dif", 0), Some(0.0));
        assert!(out.lines().iter().all(|l| l.values.iter().all(|v| !v.is_nan())));
    }

    #[test]
    fn known_values_short_periods() {
        // short=1 → EMA is close itself; long=3 → alpha 0.5; signal=1 → dea = dif
        let out = macd(&[10.0, 12.0, 14.0], 1, 3, 1).unwrap();
        // EMA3: 10, 11, 12.5 → dif: 0, 1, 1.5
        assert_approx(out.get("dif", 1).unwrap(), 1.0, 1e-9);
        assert_approx(out.get("dif", 2).unwrap(), 1.5, 1e-9);
        assert_eq!(out.get("macd", 2), Some(0.0));
    }

    #[test]
    fn rising_prices_positive_dif() {
        let close: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let out = macd(&close, 12, 26, 9).unwrap();
        assert!(out.get("dif", 49).unwrap() > 0.0);
    }

    #[test]
    fn zero_period_rejected() {
        assert!(macd(&[1.0, 2.0], 0, 26, 9).is_err());
    }

    #[test]
    fn name_carries_parameters() {
        assert_eq!(Macd::default().name(), "macd_12_26_9");
    }
}
