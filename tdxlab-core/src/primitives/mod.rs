//! Primitive series operators.
//!
//! Every operator returns a fresh series of the input length. Two warm-up
//! families exist and must not be mixed up:
//! - window operators (`rolling`) leave the first `n - 1` positions undefined;
//! - lag operators (`lag`) leave the first `n` positions undefined.
//!
//! The recursive smoothers (`smoothing`) have no warm-up of their own.

pub mod elementwise;
pub mod lag;
pub mod rolling;
pub mod smoothing;

pub use elementwise::{
    abs, add, div_or_zero, element_max, element_min, map2, max_with, min_with, mul, nth_from_end,
    round, round_series, safe_div, scale, sub,
};
pub use lag::{delta, shift};
pub use rolling::{avg_deviation, moving_avg, rolling_max, rolling_min, rolling_std, rolling_sum};
pub use smoothing::{exp_smooth, recursive_smooth};

/// A numeric series. Undefined positions hold `f64::NAN`.
pub type Series = Vec<f64>;
