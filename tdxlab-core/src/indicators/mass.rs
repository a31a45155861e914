//! MASS: mass index.
//!
//! r     = MA(high - low, n1) / MA(MA(high - low, n1), n1)
//! mass  = SUM(r, n2)
//! mamass = MA(mass, m)

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::{div_or_zero, moving_avg, rolling_sum, sub};
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mass {
    pub n1: usize,
    pub n2: usize,
    pub m: usize,
}

impl Default for Mass {
    fn default() -> Self {
        Self {
            n1: 9,
            n2: 25,
            m: 6,
        }
    }
}

impl Mass {
    pub fn new(n1: usize, n2: usize, m: usize) -> Self {
        Self { n1, n2, m }
    }
}

pub fn mass(high: &[f64], low: &[f64], n1: usize, n2: usize, m: usize) -> Result<IndicatorResult> {
    check_period("n1", n1, 1)?;
    check_period("n2", n2, 1)?;
    check_period("m", m, 1)?;

    let range_avg = moving_avg(&sub(high, low)?, n1)?;
    let ratio = div_or_zero(&range_avg, &moving_avg(&range_avg, n1)?)?;
    let line = rolling_sum(&ratio, n2)?;
    let smoothed = moving_avg(&line, m)?;

    Ok(round_result(IndicatorResult::new(
        Mass::new(n1, n2, m).name(),
        vec![("mass", line), ("mamass", smoothed)],
    )))
}

impl Indicator for Mass {
    fn name(&self) -> String {
        format!("mass_{}_{}_{}", self.n1, self.n2, self.m)
    }

    fn lookback(&self) -> usize {
        2 * self.n1.saturating_sub(1) + self.n2.saturating_sub(1) + self.m.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        mass(data.high(), data.low(), self.n1, self.n2, self.m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_range_sums_ones() {
        let high = [12.0; 12];
        let low = [10.0; 12];
        let out = mass(&high, &low, 2, 3, 2).unwrap();
        // ratio defined from bar 2, sum of three ones from bar 4
        assert!(out.get("mass", 3).unwrap().is_nan());
        assert_eq!(out.get("mass", 4), Some(3.0));
        assert!(out.get("mamass", 4).unwrap().is_nan());
        assert_eq!(out.get("mamass", 5), Some(3.0));
        assert_eq!(Mass::new(2, 3, 2).lookback(), 5);
    }

    #[test]
    fn default_lookback() {
        assert_eq!(Mass::default().lookback(), 45);
    }
}
