//! Column-oriented price series.
//!
//! Every indicator reads its inputs from an `Ohlcv`. Construction is the only
//! place parallel-length validation happens for indicator objects; the free
//! indicator functions validate their own slice arguments.

use serde::{Deserialize, Serialize};

use super::Bar;
use crate::error::{check_len, Result};

/// Parallel open/high/low/close/volume columns of identical length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ohlcv {
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    volume: Vec<f64>,
}

impl Ohlcv {
    /// Build from five columns. Fails if any column differs in length from `close`.
    pub fn new(
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) -> Result<Self> {
        let n = close.len();
        check_len(n, &open)?;
        check_len(n, &high)?;
        check_len(n, &low)?;
        check_len(n, &volume)?;
        Ok(Self {
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Split a slice of bars into columns.
    pub fn from_bars(bars: &[Bar]) -> Self {
        let n = bars.len();
        let mut out = Self {
            open: Vec::with_capacity(n),
            high: Vec::with_capacity(n),
            low: Vec::with_capacity(n),
            close: Vec::with_capacity(n),
            volume: Vec::with_capacity(n),
        };
        for bar in bars {
            out.open.push(bar.open);
            out.high.push(bar.high);
            out.low.push(bar.low);
            out.close.push(bar.close);
            out.volume.push(bar.volume);
        }
        out
    }

    /// Copy of the first `len` bars (clamped to the series length).
    pub fn truncated(&self, len: usize) -> Self {
        let len = len.min(self.len());
        Self {
            open: self.open[..len].to_vec(),
            high: self.high[..len].to_vec(),
            low: self.low[..len].to_vec(),
            close: self.close[..len].to_vec(),
            volume: self.volume[..len].to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    pub fn open(&self) -> &[f64] {
        &self.open
    }

    pub fn high(&self) -> &[f64] {
        &self.high
    }

    pub fn low(&self) -> &[f64] {
        &self.low
    }

    pub fn close(&self) -> &[f64] {
        &self.close
    }

    pub fn volume(&self) -> &[f64] {
        &self.volume
    }
}
