//! BBI: bull and bear index, the mean of four simple moving averages.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_period, Result};
use crate::primitives::{moving_avg, Series};
use crate::rounding::round_output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bbi {
    pub m1: usize,
    pub m2: usize,
    pub m3: usize,
    pub m4: usize,
}

impl Default for Bbi {
    fn default() -> Self {
        Self {
            m1: 3,
            m2: 6,
            m3: 12,
            m4: 20,
        }
    }
}

impl Bbi {
    pub fn new(m1: usize, m2: usize, m3: usize, m4: usize) -> Self {
        Self { m1, m2, m3, m4 }
    }

    fn periods(&self) -> [usize; 4] {
        [self.m1, self.m2, self.m3, self.m4]
    }
}

pub fn bbi(close: &[f64], m1: usize, m2: usize, m3: usize, m4: usize) -> Result<Series> {
    let mut total = vec![0.0; close.len()];
    for (name, period) in [("m1", m1), ("m2", m2), ("m3", m3), ("m4", m4)] {
        check_period(name, period, 1)?;
        let avg = moving_avg(close, period)?;
        for (t, a) in total.iter_mut().zip(&avg) {
            *t += a;
        }
    }
    Ok(round_output(total.into_iter().map(|t| t / 4.0).collect()))
}

impl Indicator for Bbi {
    fn name(&self) -> String {
        format!("bbi_{}_{}_{}_{}", self.m1, self.m2, self.m3, self.m4)
    }

    fn lookback(&self) -> usize {
        self.periods()
            .into_iter()
            .max()
            .unwrap_or(1)
            .saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        Ok(IndicatorResult::single(
            self.name(),
            "bbi",
            bbi(data.close(), self.m1, self.m2, self.m3, self.m4)?,
        ))
    }
}
