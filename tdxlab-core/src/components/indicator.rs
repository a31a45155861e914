//! Indicator trait and computed indicator values container.
//!
//! Indicators are pure functions: price columns in, named output lines out.
//! No state survives between calls.

use std::collections::BTreeMap;

use crate::domain::Ohlcv;
use crate::error::Result;
use crate::indicators::IndicatorResult;

/// Trait for composite indicators.
///
/// `compute` reads whichever columns the indicator needs from `data` and
/// returns lines of the same length, rounded for output.
///
/// # Look-ahead guard
/// No output at bar t may depend on bar t+1 or later: computing on a prefix of
/// the data must reproduce the prefix of the full computation.
pub trait Indicator: Send + Sync {
    /// Name with parameters (e.g. "macd_12_26_9").
    fn name(&self) -> String;

    /// Number of leading bars that may be undefined in the output.
    fn lookback(&self) -> usize;

    /// Compute the indicator over the whole series.
    fn compute(&self, data: &Ohlcv) -> Result<IndicatorResult>;
}

/// Computed indicator results for one instrument, keyed by indicator name.
#[derive(Debug, Clone, Default)]
pub struct IndicatorValues {
    results: BTreeMap<String, IndicatorResult>,
}

impl IndicatorValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result under its own name.
    pub fn insert(&mut self, result: IndicatorResult) {
        self.results.insert(result.name().to_string(), result);
    }

    /// Full result for a named indicator.
    pub fn result(&self, indicator: &str) -> Option<&IndicatorResult> {
        self.results.get(indicator)
    }

    /// Value of one line of one indicator at a bar index.
    pub fn get(&self, indicator: &str, line: &str, bar_index: usize) -> Option<f64> {
        self.results
            .get(indicator)
            .and_then(|r| r.get(line, bar_index))
    }

    /// Indicator names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }

    /// Number of indicator results stored.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
