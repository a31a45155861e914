//! Rounding adapter for indicator outputs.
//!
//! Rounding happens once, when a composite indicator hands its lines back.
//! Primitives and intermediate stages always work at full precision.

use crate::indicators::IndicatorResult;
use crate::primitives::{round_series, Series};

/// Decimal places of every composite-indicator output.
pub const OUTPUT_DECIMALS: u32 = 2;

/// Round a single output series to [`OUTPUT_DECIMALS`].
pub fn round_output(s: Series) -> Series {
    round_series(&s, OUTPUT_DECIMALS)
}

/// Round every line of a bundle to [`OUTPUT_DECIMALS`].
pub fn round_result(result: IndicatorResult) -> IndicatorResult {
    result.map_lines(|s| round_series(s, OUTPUT_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_every_line_and_keeps_nan() {
        let r = IndicatorResult::new(
            "demo",
            vec![("a", vec![f64::NAN, 1.23456]), ("b", vec![-0.005, 9.999])],
        );
        let out = round_result(r);
        assert!(out.get("a", 0).unwrap().is_nan());
        assert_eq!(out.get("a", 1), Some(1.23));
        assert_eq!(out.get("b", 0), Some(-0.01));
        assert_eq!(out.get("b", 1), Some(10.0));
    }

    #[test]
    fn round_output_series() {
        assert_eq!(round_output(vec![1.004, 2.0]), vec![1.0, 2.0]);
    }
}
