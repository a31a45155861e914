//! MA: bundle of four simple moving averages of the close.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::moving_avg;
use crate::rounding::round_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ma {
    pub n1: usize,
    pub n2: usize,
    pub n3: usize,
    pub n4: usize,
}

impl Default for Ma {
    fn default() -> Self {
        Self {
            n1: 5,
            n2: 10,
            n3: 20,
            n4: 60,
        }
    }
}

impl Ma {
    pub fn new(n1: usize, n2: usize, n3: usize, n4: usize) -> Self {
        Self { n1, n2, n3, n4 }
    }
}

pub fn ma(close: &[f64], n1: usize, n2: usize, n3: usize, n4: usize) -> Result<IndicatorResult> {
    check_period("n1", n1, 1)?;
    check_period("n2", n2, 1)?;
    check_period("n3", n3, 1)?;
    check_period("n4", n4, 1)?;

    Ok(round_result(IndicatorResult::new(
        Ma::new(n1, n2, n3, n4).name(),
        vec![
            ("ma1", moving_avg(close, n1)?),
            ("ma2", moving_avg(close, n2)?),
            ("ma3", moving_avg(close, n3)?),
            ("ma4", moving_avg(close, n4)?),
        ],
    )))
}

impl Indicator for Ma {
    fn name(&self) -> String {
        format!("ma_{}_{}_{}_{}", self.n1, self.n2, self.n3, self.n4)
    }

    fn lookback(&self) -> usize {
        self.n1.max(self.n2).max(self.n3).max(self.n4).saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        ma(data.close(), self.n1, self.n2, self.n3, self.n4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndicatorError;

    #[test]
    fn each_line_has_its_own_warmup() {
        let close: Vec<f64> = (1..=10).map(f64::from).collect();
        let out = ma(&close, 1, 2, 3, 4).unwrap();
        assert_eq!(out.get("ma1", 0), Some(1.0));
        assert!(out.get("ma2", 0).unwrap().is_nan());
        assert_eq!(out.get("ma2", 1), Some(1.5));
        assert_eq!(out.get("ma3", 2), Some(2.0));
        assert!(out.get("ma4", 2).unwrap().is_nan());
        assert_eq!(out.get("ma4", 9), Some(8.5));
        assert_eq!(Ma::default().lookback(), 59);
    }

    #[test]
    fn zero_period_rejected() {
        assert!(matches!(
            ma(&[1.0, 2.0], 5, 10, 0, 60),
            Err(IndicatorError::InvalidPeriod { name: "n3", .. })
        ));
    }

    #[test]
    fn period_longer_than_series_only_blanks_that_line() {
        let close: Vec<f64> = (1..=10).map(f64::from).collect();
        let out = Ma::default().compute(&crate::indicators::make_ohlcv(&close)).unwrap();
        assert_eq!(out.get("ma1", 9), Some(8.0));
        assert_eq!(out.get("ma2", 9), Some(5.5));
        assert!(out.line("ma3").unwrap().iter().all(|v| v.is_nan()));
        assert!(out.line("ma4").unwrap().iter().all(|v| v.is_nan()));
    }
}
