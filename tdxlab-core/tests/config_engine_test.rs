//! End-to-end: TOML study config → factory → engine → analysis.

use std::collections::BTreeMap;

use tdxlab_core::analysis::{boll_state, BandZone};
use tdxlab_core::config::{IndicatorConfig, StudyConfig};
use tdxlab_core::domain::Ohlcv;
use tdxlab_core::engine::{compute_for_instruments, compute_study, warmup};
use tdxlab_core::indicators::{Boll, Kdj, Macd};
use tdxlab_core::{create_study, IndicatorError};

const STUDY: &str = r#"
[[indicators]]
type = "MACD"

[[indicators]]
type = "KDJ"
n = 9

[[indicators]]
type = "BOLL"
n = 10
p = 2.5

[[indicators]]
type = "OBV"
"#;

fn trending(n: usize) -> Ohlcv {
    let close: Vec<f64> = (0..n).map(|i| 20.0 + i as f64 * 0.25 + (i % 3) as f64 * 0.1).collect();
    let open: Vec<f64> = close.iter().map(|c| c - 0.1).collect();
    let high: Vec<f64> = close.iter().map(|c| c + 0.5).collect();
    let low: Vec<f64> = open.iter().map(|o| o - 0.5).collect();
    let volume = vec![10_000.0; n];
    Ohlcv::new(open, high, low, close, volume).unwrap()
}

#[test]
fn toml_study_end_to_end() {
    let config = StudyConfig::from_toml_str(STUDY).unwrap();
    assert_eq!(config.indicators[0], IndicatorConfig::Macd(Macd::default()));
    assert_eq!(config.indicators[1], IndicatorConfig::Kdj(Kdj::new(9, 3, 3)));
    assert_eq!(config.indicators[2], IndicatorConfig::Boll(Boll::new(10, 2.5)));

    let indicators = create_study(&config);
    assert_eq!(warmup(&indicators), 9);

    let data = trending(40);
    let values = compute_study(&data, &indicators).unwrap();
    assert_eq!(
        values.names().collect::<Vec<_>>(),
        vec!["boll_10_2.5", "kdj_9_3_3", "macd_12_26_9", "obv"]
    );

    // every close after the first is higher: OBV adds one unit of 10,000 per bar
    assert_eq!(values.get("obv", "obv", 39), Some(39.0));
    assert!(values.get("boll_10_2.5", "upper", 8).unwrap().is_nan());
    assert!(values.get("macd_12_26_9", "dif", 39).unwrap() > 0.0);
}

#[test]
fn standard_study_over_instruments() {
    let indicators = create_study(&StudyConfig::standard());
    let mut data = BTreeMap::new();
    data.insert("601061".to_string(), trending(120));
    data.insert("600519".to_string(), trending(30));

    let out = compute_for_instruments(&data, &indicators).unwrap();
    assert_eq!(out.len(), 2);
    for values in out.values() {
        assert_eq!(values.len(), indicators.len());
    }
    assert_eq!(out["600519"].result("obv").unwrap().len(), 30);
}

#[test]
fn invalid_period_from_config_surfaces_on_compute() {
    let config = StudyConfig::from_toml_str("[[indicators]]\ntype = \"RSI\"\nn = 0\n").unwrap();
    let err = compute_study(&trending(10), &create_study(&config)).unwrap_err();
    assert!(matches!(err, IndicatorError::InvalidPeriod { .. }));
}

#[test]
fn negative_band_width_from_config_is_rejected() {
    let text = "[[indicators]]\ntype = \"BOLL\"\np = -2.0\n";
    let config = StudyConfig::from_toml_str(text).unwrap();
    let err = compute_study(&trending(30), &create_study(&config)).unwrap_err();
    assert!(matches!(err, IndicatorError::InvalidMultiplier { .. }));
}

#[test]
fn uptrend_sits_in_upper_half_or_above() {
    let state = boll_state(&trending(60), &Boll::default()).unwrap();
    assert!(matches!(state.zone, BandZone::AboveUpper | BandZone::UpperHalf));
    assert_eq!(state.mid_trend, tdxlab_core::analysis::MidTrend::Rising);
    assert!(state.closes_above_mid >= 4);
}
