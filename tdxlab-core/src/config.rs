//! Serializable study configuration.
//!
//! A study is a list of indicators with their parameters, typically loaded
//! from TOML:
//!
//! ```toml
//! [[indicators]]
//! type = "MACD"
//! short = 12
//! long = 26
//! signal = 9
//!
//! [[indicators]]
//! type = "BOLL"      # omitted parameters take their defaults
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IndicatorError, Result};
use crate::indicators::{
    Asi, Atr, Bbi, Bias, Boll, Brar, Cci, Dma, Dmi, Dpo, Emv, Expma, Kdj, Ktn, Ma, Macd, Mass, Mfi,
    Mtm, Psy, Roc, Rsi, Taq, Trix, Vr, Wr,
};

/// One indicator and its parameters (serializable enum).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorConfig {
    Macd(Macd),
    Kdj(Kdj),
    Rsi(Rsi),
    Wr(Wr),
    Bias(Bias),
    Boll(Boll),
    Psy(Psy),
    Cci(Cci),
    Atr(Atr),
    Bbi(Bbi),
    Dmi(Dmi),
    Taq(Taq),
    Trix(Trix),
    Vr(Vr),
    Emv(Emv),
    Dpo(Dpo),
    Brar(Brar),
    Dma(Dma),
    Mtm(Mtm),
    Roc(Roc),
    Ktn(Ktn),
    Expma(Expma),
    /// On-balance volume has no parameters.
    Obv,
    Mfi(Mfi),
    Mass(Mass),
    Asi(Asi),
    Ma(Ma),
}

impl IndicatorConfig {
    /// Every supported indicator with its conventional parameters.
    pub fn all_defaults() -> Vec<IndicatorConfig> {
        vec![
            Self::Macd(Macd::default()),
            Self::Kdj(Kdj::default()),
            Self::Rsi(Rsi::default()),
            Self::Wr(Wr::default()),
            Self::Bias(Bias::default()),
            Self::Boll(Boll::default()),
            Self::Psy(Psy::default()),
            Self::Cci(Cci::default()),
            Self::Atr(Atr::default()),
            Self::Bbi(Bbi::default()),
            Self::Dmi(Dmi::default()),
            Self::Taq(Taq::default()),
            Self::Trix(Trix::default()),
            Self::Vr(Vr::default()),
            Self::Emv(Emv::default()),
            Self::Dpo(Dpo::default()),
            Self::Brar(Brar::default()),
            Self::Dma(Dma::default()),
            Self::Mtm(Mtm::default()),
            Self::Roc(Roc::default()),
            Self::Ktn(Ktn::default()),
            Self::Expma(Expma::default()),
            Self::Obv,
            Self::Mfi(Mfi::default()),
            Self::Mass(Mass::default()),
            Self::Asi(Asi::default()),
            Self::Ma(Ma::default()),
        ]
    }
}

/// A list of indicators to compute together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudyConfig {
    #[serde(default)]
    pub indicators: Vec<IndicatorConfig>,
}

impl StudyConfig {
    /// Study with every supported indicator at its default parameters.
    pub fn standard() -> Self {
        Self {
            indicators: IndicatorConfig::all_defaults(),
        }
    }

    /// Parse a study from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: StudyConfig =
            toml::from_str(text).map_err(|e| IndicatorError::Config(e.to_string()))?;
        debug!(indicators = config.indicators.len(), "loaded study config");
        Ok(config)
    }

    /// Serialize the study back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| IndicatorError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_defaults() {
        let text = r#"
            [[indicators]]
            type = "MACD"
            short = 5

            [[indicators]]
            type = "BOLL"

            [[indicators]]
            type = "OBV"
        "#;
        let config = StudyConfig::from_toml_str(text).unwrap();
        assert_eq!(
            config.indicators,
            vec![
                IndicatorConfig::Macd(Macd::new(5, 26, 9)),
                IndicatorConfig::Boll(Boll::default()),
                IndicatorConfig::Obv,
            ]
        );
    }

    #[test]
    fn test_unknown_type_is_config_error() {
        let err = StudyConfig::from_toml_str("[[indicators]]\ntype = \"NOPE\"\n").unwrap_err();
        assert!(matches!(err, IndicatorError::Config(_)));
    }

    #[test]
    fn test_empty_study() {
        let config = StudyConfig::from_toml_str("").unwrap();
        assert!(config.indicators.is_empty());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = StudyConfig {
            indicators: vec![
                IndicatorConfig::Kdj(Kdj::new(9, 3, 3)),
                IndicatorConfig::Boll(Boll::new(26, 2.5)),
                IndicatorConfig::Obv,
            ],
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(StudyConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_standard_study_roundtrips_through_json() {
        let config = StudyConfig::standard();
        let json = serde_json::to_string(&config).unwrap();
        let back: StudyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
