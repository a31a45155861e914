//! TRIX: rate of change of a triple exponential average.
//!
//! tr   = EMA(EMA(EMA(close, m1), m1), m1)
//! trix = (tr - tr[1]) / tr[1] * 100, 0 on a zero denominator
//! trma = MA(trix, m2)
//! Lookback: m2 (trix starts at bar 1).

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::{exp_smooth, moving_avg, safe_div, shift, Series};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trix {
    pub m1: usize,
    pub m2: usize,
}

impl Default for Trix {
    fn default() -> Self {
        Self { m1: 12, m2: 20 }
    }
}

impl Trix {
    pub fn new(m1: usize, m2: usize) -> Self {
        Self { m1, m2 }
    }
}

pub fn trix(close: &[f64], m1: usize, m2: usize) -> Result<IndicatorResult> {
    check_period("m1", m1, 1)?;
    check_period("m2", m2, 1)?;

    let tr = exp_smooth(&exp_smooth(&exp_smooth(close, m1)?, m1)?, m1)?;
    let prev = shift(&tr, 1);
    let rate: Series = tr
        .iter()
        .zip(&prev)
        .map(|(&t, &p)| safe_div(t - p, p) * 100.0)
        .collect();
    let trma = moving_avg(&rate, m2)?;

    Ok(round_result(IndicatorResult::new(
        Trix::new(m1, m2).name(),
        vec![("trix", rate), ("trma", trma)],
    )))
}

impl Indicator for Trix {
    fn name(&self) -> String {
        format!("trix_{}_{}", self.m1, self.m2)
    }

    fn lookback(&self) -> usize {
        self.m2
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        trix(data.close(), self.m1, self.m2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_price_is_zero_after_first_bar() {
        let out = trix(&[50.0; 30], 12, 20).unwrap();
        assert!(out.get("trix", 0).unwrap().is_nan());
        assert_eq!(out.get("trix", 1), Some(0.0));
        assert!(out.get("trma", 19).unwrap().is_nan());
        assert_eq!(out.get("trma", 20), Some(0.0));
    }

    #[test]
    fn period_one_is_plain_rate_of_change() {
        // EMA(1) is the identity, so trix is the one-bar percent change
        let out = trix(&[100.0, 110.0, 99.0], 1, 1).unwrap();
        assert_eq!(out.get("trix", 1), Some(10.0));
        assert_eq!(out.get("trix", 2), Some(-10.0));
        assert_eq!(out.get("trma", 2), Some(-10.0));
    }

    #[test]
    fn zero_prior_value_gives_zero() {
        let out = trix(&[0.0, 5.0], 1, 1).unwrap();
        assert_eq!(out.get("trix", 1), Some(0.0));
    }
}
