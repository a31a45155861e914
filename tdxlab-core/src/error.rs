//! Error type shared by every layer of the crate.
//!
//! Only precondition violations are errors. Zero denominators and warm-up
//! gaps are ordinary values (0 and `f64::NAN`), never `Err`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("{name} must be >= {min}, got {value}")]
    InvalidPeriod {
        name: &'static str,
        value: usize,
        min: usize,
    },

    #[error("{name} must be finite and >= 0, got {value}")]
    InvalidMultiplier { name: &'static str, value: f64 },

    #[error("invalid window: a ({a}) must be >= b ({b})")]
    InvalidWindow { a: usize, b: usize },

    #[error("index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IndicatorError>;

/// Reject a period below `min`.
pub(crate) fn check_period(name: &'static str, value: usize, min: usize) -> Result<()> {
    if value < min {
        return Err(IndicatorError::InvalidPeriod { name, value, min });
    }
    Ok(())
}

/// Reject a NaN, infinite or negative scale factor.
pub(crate) fn check_multiplier(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(IndicatorError::InvalidMultiplier { name, value });
    }
    Ok(())
}

/// Reject a parallel input whose length differs from `expected`.
pub(crate) fn check_len(expected: usize, series: &[f64]) -> Result<()> {
    if series.len() != expected {
        return Err(IndicatorError::LengthMismatch {
            expected,
            actual: series.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_below_min_is_rejected() {
        let err = check_period("period", 0, 1).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::InvalidPeriod {
                name: "period",
                value: 0,
                min: 1
            }
        );
        assert_eq!(err.to_string(), "period must be >= 1, got 0");
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert!(check_len(3, &[1.0, 2.0, 3.0]).is_ok());
        let err = check_len(3, &[1.0]).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::LengthMismatch {
                expected: 3,
                actual: 1
            }
        );
    }

    #[test]
    fn multiplier_must_be_finite_and_non_negative() {
        assert!(check_multiplier("p", 0.0).is_ok());
        assert!(check_multiplier("p", 2.5).is_ok());
        assert!(matches!(
            check_multiplier("p", -2.0),
            Err(IndicatorError::InvalidMultiplier { name: "p", .. })
        ));
        assert!(check_multiplier("p", f64::NAN).is_err());
        assert!(check_multiplier("p", f64::INFINITY).is_err());
    }
}
