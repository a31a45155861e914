//! Operators over boolean condition series, plus least-squares trend fits.

pub mod regression;
pub mod runs;

pub use regression::{forecast, linear_fit, slope, LinearFit};
pub use runs::{bars_last, count, cross, every, exist, greater_than, last, less_or_equal};
