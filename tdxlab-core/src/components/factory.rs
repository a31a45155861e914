//! Factory: converts an `IndicatorConfig` into a runtime trait object.

use crate::config::{IndicatorConfig, StudyConfig};
use crate::indicators::Obv;

use super::indicator::Indicator;

/// Create an indicator from its configuration.
///
/// Parameters are not validated here; an invalid period surfaces as an
/// error from `Indicator::compute`.
pub fn create_indicator(config: &IndicatorConfig) -> Box<dyn Indicator> {
    match config {
        IndicatorConfig::Macd(p) => Box::new(*p),
        IndicatorConfig::Kdj(p) => Box::new(*p),
        IndicatorConfig::Rsi(p) => Box::new(*p),
        IndicatorConfig::Wr(p) => Box::new(*p),
        IndicatorConfig::Bias(p) => Box::new(*p),
        IndicatorConfig::Boll(p) => Box::new(*p),
        IndicatorConfig::Psy(p) => Box::new(*p),
        IndicatorConfig::Cci(p) => Box::new(*p),
        IndicatorConfig::Atr(p) => Box::new(*p),
        IndicatorConfig::Bbi(p) => Box::new(*p),
        IndicatorConfig::Dmi(p) => Box::new(*p),
        IndicatorConfig::Taq(p) => Box::new(*p),
        IndicatorConfig::Trix(p) => Box::new(*p),
        IndicatorConfig::Vr(p) => Box::new(*p),
        IndicatorConfig::Emv(p) => Box::new(*p),
        IndicatorConfig::Dpo(p) => Box::new(*p),
        IndicatorConfig::Brar(p) => Box::new(*p),
        IndicatorConfig::Dma(p) => Box::new(*p),
        IndicatorConfig::Mtm(p) => Box::new(*p),
        IndicatorConfig::Roc(p) => Box::new(*p),
        IndicatorConfig::Ktn(p) => Box::new(*p),
        IndicatorConfig::Expma(p) => Box::new(*p),
        IndicatorConfig::Obv => Box::new(Obv),
        IndicatorConfig::Mfi(p) => Box::new(*p),
        IndicatorConfig::Mass(p) => Box::new(*p),
        IndicatorConfig::Asi(p) => Box::new(*p),
        IndicatorConfig::Ma(p) => Box::new(*p),
    }
}

/// Create every indicator a study lists, in order.
pub fn create_study(config: &StudyConfig) -> Vec<Box<dyn Indicator>> {
    config.indicators.iter().map(create_indicator).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::indicators::{Boll, Macd};

    #[test]
    fn test_create_preserves_params() {
        let ind = create_indicator(&IndicatorConfig::Macd(Macd::new(5, 10, 3)));
        assert_eq!(ind.name(), "macd_5_10_3");

        let ind = create_indicator(&IndicatorConfig::Boll(Boll::new(26, 2.0)));
        assert_eq!(ind.name(), "boll_26_2");
        assert_eq!(ind.lookback(), 25);
    }

    #[test]
    fn test_default_names_are_unique() {
        let study = create_study(&StudyConfig::standard());
        let names: HashSet<String> = study.iter().map(|i| i.name()).collect();
        assert_eq!(names.len(), study.len());
        assert_eq!(study.len(), 27);
    }
}
