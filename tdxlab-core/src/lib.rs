//! TdxLab Core: formula-style technical indicators over OHLCV series.
//!
//! Layers, bottom-up:
//! - Primitive series operators (windows, lags, recursive smoothers)
//! - Condition and regression analyzers
//! - Composite indicators (MACD, KDJ, BOLL, ...) behind one `Indicator` trait
//! - Config-driven study computation over one or many instruments
//! - Bollinger-band state analysis at the latest bar
//!
//! Undefined positions are `f64::NAN`; composite outputs are rounded to two
//! decimals.

pub mod analysis;
pub mod analyzers;
pub mod components;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod primitives;
pub mod rounding;

pub use components::{create_indicator, create_study, Indicator, IndicatorValues};
pub use config::{IndicatorConfig, StudyConfig};
pub use domain::{Bar, Ohlcv};
pub use error::{IndicatorError, Result};
pub use indicators::IndicatorResult;
