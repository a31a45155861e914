//! Study computation: run a set of indicators over one or many instruments.

pub mod precompute;

pub use precompute::{compute_for_instruments, compute_study, warmup};
