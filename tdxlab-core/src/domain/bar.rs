//! Bar: one sampled period of price and volume.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV bar for a single instrument on a single period.
///
/// Bars are supplied by an upstream loader in ascending date order. This
/// crate never checks date continuity, only that parallel columns line up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}
