//! MFI: money flow index.
//!
//! Money flow is typical price times volume. Over the last n bars it is
//! summed separately for bars where the typical price rose and fell:
//! mfi = 100 * up / (up + down), which equals 100 - 100 / (1 + up/down)
//! and gives 100 when nothing fell. 0 when the window has no flow at all.
//! Bar 0 has no previous typical price and counts as neither up nor down,
//! so the lookback is n - 1.

use serde::{Deserialize, Serialize};

use super::{typical_price, IndicatorResult};
use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_len, check_period, Result};
use crate::primitives::{rolling_sum, safe_div, shift, Series};
use crate::rounding::round_output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mfi {
    pub n: usize,
}

impl Default for Mfi {
    fn default() -> Self {
        Self { n: 14 }
    }
}

impl Mfi {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

pub fn mfi(close: &[f64], high: &[f64], low: &[f64], volume: &[f64], n: usize) -> Result<Series> {
    check_len(close.len(), volume)?;
    check_period("n", n, 1)?;

    let tp = typical_price(close, high, low)?;
    let prev_tp = shift(&tp, 1);

    let (up, down): (Series, Series) = tp
        .iter()
        .zip(&prev_tp)
        .zip(volume)
        .map(|((&t, &p), &v)| {
            if t.is_nan() {
                (f64::NAN, f64::NAN)
            } else if t > p {
                (t * v, 0.0)
            } else if t < p {
                (0.0, t * v)
            } else {
                (0.0, 0.0)
            }
        })
        .unzip();

    let up = rolling_sum(&up, n)?;
    let down = rolling_sum(&down, n)?;
    Ok(round_output(
        up.iter()
            .zip(&down)
            .map(|(&u, &d)| 100.0 * safe_div(u, u + d))
            .collect(),
    ))
}

impl Indicator for Mfi {
    fn name(&self) -> String {
        format!("mfi_{}", self.n)
    }

    fn lookback(&self) -> usize {
        self.n.saturating_sub(1)
    }

    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult> {
        Ok(IndicatorResult::single(
            self.name(),
            "mfi",
            mfi(data.close(), data.high(), data.low(), data.volume(), self.n)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::sample_ohlcv;

    #[test]
    fn known_values() {
        // typical price equals close when high = low = close
        let close = [10.0, 12.0, 11.0, 11.0];
        let volume = [1.0, 1.0, 2.0, 5.0];
        let out = mfi(&close, &close, &close, &volume, 2).unwrap();
        assert!(out[0].is_nan());
        // bar 0 contributes no flow: up 12, down 0
        assert_eq!(out[1], 100.0);
        // up 12, down 22
        assert_eq!(out[2], 35.29);
        // bar 3 unchanged: up 0, down 22
        assert_eq!(out[3], 0.0);
    }

    #[test]
    fn only_rising_is_100() {
        let close: Vec<f64> = (1..=6).map(f64::from).collect();
        let out = mfi(&close, &close, &close, &[1.0; 6], 3).unwrap();
        assert_eq!(out[5], 100.0);
    }

    #[test]
    fn first_value_at_n_minus_one() {
        let close = [1.0, 2.0, 3.0];
        let out = mfi(&close, &close, &close, &[1.0; 3], 3).unwrap();
        assert!(out[1].is_nan());
        assert_eq!(out[2], 100.0);
        assert_eq!(Mfi::new(3).lookback(), 2);
    }

    #[test]
    fn bounded_0_to_100() {
        let data = sample_ohlcv(120);
        let out = Mfi::default().compute(&data).unwrap();
        let line = out.line("mfi").unwrap();
        assert!(line[..13].iter().all(|v| v.is_nan()));
        assert!(line[13..].iter().all(|&v| (0.0..=100.0).contains(&v)));
    }
}
