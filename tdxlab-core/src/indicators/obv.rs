//! OBV: on-balance volume, in units of 10,000 shares.
//!
//! Running sum of +volume on up days and -volume on down days. Bar 0 has no
//! previous close and contributes 0, so the series is defined everywhere.

use serde::{Deserialize, Serialize};

use super::IndicatorResult;
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_len, Result};
use crate::primitives::Series;
use crate::rounding::round_output;

const VOLUME_UNIT: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obv;

pub fn obv(close: &[f64], volume: &[f64]) -> Result<Series> {
    check_len(close.len(), volume)?;

    let mut total = 0.0;
    let mut out = Vec::with_capacity(close.len());
    for (i, &c) in close.iter().enumerate() {
        if i > 0 {
            let prev = close[i - 1];
            if c > prev {
                total += volume[i];
            } else if c < prev {
                total -= volume[i];
            }
        }
        out.push(total / VOLUME_UNIT);
    }
    Ok(round_output(out))
}

impl Indicator for Obv {
    fn name(&self) -> String {
        "obv".to_string()
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        Ok(IndicatorResult::single(
            self.name(),
            "obv",
            obv(data.close(), data.volume())?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_signed_volume() {
        let close = [10.0, 11.0, 10.5, 10.5, 12.0];
        let volume = [50_000.0, 20_000.0, 10_000.0, 30_000.0, 5_000.0];
        let out = obv(&close, &volume).unwrap();
        assert_eq!(out, vec![0.0, 2.0, 1.0, 1.0, 1.5]);
    }

    #[test]
    fn length_mismatch_is_error() {
        assert!(obv(&[1.0, 2.0], &[1.0]).is_err());
    }
}
