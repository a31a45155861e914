//! Uniform indicator interface, the computed-values container, and the
//! config-driven factory.

pub mod factory;
pub mod indicator;

pub use factory::{create_indicator, create_study};
pub use indicator::{Indicator, IndicatorValues};
