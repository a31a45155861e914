//! Ordinary least-squares fit of the last `n` samples against `0..n`.

use crate::error::{check_period, IndicatorError, Result};

/// Fitted line over the trailing window.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// `intercept + slope * x` for `x` in `0..n`.
    pub fitted: Vec<f64>,
}

impl LinearFit {
    /// One-step-ahead extrapolation: last fitted value plus the slope.
    pub fn next_value(&self) -> f64 {
        self.fitted.last().copied().unwrap_or(f64::NAN) + self.slope
    }
}

/// Least-squares fit of `s[N-n..]`. Needs `2 <= n <= N`.
pub fn linear_fit(s: &[f64], n: usize) -> Result<LinearFit> {
    check_period("regression window", n, 2)?;
    if n > s.len() {
        return Err(IndicatorError::IndexOutOfRange {
            index: n,
            len: s.len(),
        });
    }

    let window = &s[s.len() - n..];
    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = window.iter().sum::<f64>() / n as f64;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (x, &y) in window.iter().enumerate() {
        let dx = x as f64 - x_mean;
        sxy += dx * (y - y_mean);
        sxx += dx * dx;
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    let fitted = (0..n).map(|x| intercept + slope * x as f64).collect();

    Ok(LinearFit {
        slope,
        intercept,
        fitted,
    })
}

/// Slope of the trailing `n`-sample fit.
pub fn slope(s: &[f64], n: usize) -> Result<f64> {
    linear_fit(s, n).map(|fit| fit.slope)
}

/// Next-bar value predicted by the trailing `n`-sample fit.
pub fn forecast(s: &[f64], n: usize) -> Result<f64> {
    linear_fit(s, n).map(|fit| fit.next_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn exact_line_recovered() {
        let s: Vec<f64> = (0..10).map(|i| 3.0 + 2.0 * i as f64).collect();
        let fit = linear_fit(&s, 4).unwrap();
        assert_approx(fit.slope, 2.0, DEFAULT_EPSILON);
        // window is s[6..10] = 15,17,19,21
        assert_approx(fit.intercept, 15.0, DEFAULT_EPSILON);
        assert_eq!(fit.fitted.len(), 4);
        assert_approx(fit.fitted[3], 21.0, DEFAULT_EPSILON);
        assert_approx(forecast(&s, 4).unwrap(), 23.0, DEFAULT_EPSILON);
    }

    #[test]
    fn noisy_slope() {
        // y = 1, 3, 2, 4 → slope 0.8
        assert_approx(slope(&[1.0, 3.0, 2.0, 4.0], 4).unwrap(), 0.8, DEFAULT_EPSILON);
    }

    #[test]
    fn window_bounds() {
        assert!(slope(&[1.0, 2.0], 1).is_err());
        assert!(slope(&[1.0, 2.0], 3).is_err());
        assert!(slope(&[1.0, 2.0], 2).is_ok());
    }

    #[test]
    fn nan_in_window_propagates() {
        assert!(slope(&[1.0, f64::NAN, 3.0], 3).unwrap().is_nan());
        assert!(!slope(&[f64::NAN, 2.0, 3.0], 2).unwrap().is_nan());
    }
}
