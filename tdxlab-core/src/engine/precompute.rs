//! Indicator precomputation orchestration.
//!
//! Every indicator of a study is computed once over the whole series.
//! Results land in an `IndicatorValues` container, one per instrument.

use std::collections::BTreeMap;

use tracing::debug;

use crate::components::indicator::{Indicator, IndicatorValues};
use crate::domain::Ohlcv;
use crate::error::Result;

/// Compute every indicator over one instrument's data.
///
/// Fails on the first indicator that rejects its parameters.
pub fn compute_study(data: &Ohlcv, indicators: &[Box<dyn Indicator>]) -> Result<IndicatorValues> {
    let mut values = IndicatorValues::new();
    for indicator in indicators {
        let result = indicator.compute(data)?;
        debug_assert_eq!(
            result.len(),
            data.len(),
            "indicator '{}' produced {} values for {} bars",
            indicator.name(),
            result.len(),
            data.len(),
        );
        debug!(indicator = %result.name(), bars = data.len(), "computed indicator");
        values.insert(result);
    }
    Ok(values)
}

/// Compute a study for each instrument, keyed by instrument code.
pub fn compute_for_instruments(
    data_by_code: &BTreeMap<String, Ohlcv>,
    indicators: &[Box<dyn Indicator>],
) -> Result<BTreeMap<String, IndicatorValues>> {
    let mut out = BTreeMap::new();
    for (code, data) in data_by_code {
        debug!(code = %code, bars = data.len(), "computing study");
        out.insert(code.clone(), compute_study(data, indicators)?);
    }
    Ok(out)
}

/// Leading bars during which at least one indicator may be undefined.
pub fn warmup(indicators: &[Box<dyn Indicator>]) -> usize {
    indicators.iter().map(|i| i.lookback()).max().unwrap_or(0)
}
