//! Composite indicator implementations.
//!
//! Each indicator is a fixed pipeline over `primitives` and `analyzers`,
//! exposed two ways:
//! - a free function over plain slices (`macd(close, 12, 26, 9)`);
//! - a serde-friendly parameter struct implementing `Indicator`, whose
//!   `Default` carries the conventional periods.
//!
//! Outputs are rounded by the rounding adapter on the way out. Ratios use
//! `safe_div`, so a zero denominator yields 0 rather than an infinity.

pub mod asi;
pub mod atr;
pub mod bbi;
pub mod bias;
pub mod boll;
pub mod brar;
pub mod cci;
pub mod dma;
pub mod dmi;
pub mod dpo;
pub mod emv;
pub mod expma;
pub mod kdj;
pub mod ktn;
pub mod ma;
pub mod macd;
pub mod mass;
pub mod mfi;
pub mod mtm;
pub mod obv;
pub mod psy;
pub mod result;
pub mod roc;
pub mod rsi;
pub mod taq;
pub mod trix;
pub mod vr;
pub mod wr;

pub use asi::{asi, Asi};
pub use atr::{atr, true_range, Atr};
pub use bbi::{bbi, Bbi};
pub use bias::{bias, Bias};
pub use boll::{boll, Boll};
pub use brar::{brar, Brar};
pub use cci::{cci, typical_price, Cci};
pub use dma::{dma, Dma};
pub use dmi::{dmi, Dmi};
pub use dpo::{dpo, Dpo};
pub use emv::{emv, Emv};
pub use expma::{expma, Expma};
pub use kdj::{kdj, Kdj};
pub use ktn::{ktn, Ktn};
pub use ma::{ma, Ma};
pub use macd::{macd, Macd};
pub use mass::{mass, Mass};
pub use mfi::{mfi, Mfi};
pub use mtm::{mtm, Mtm};
pub use obv::{obv, Obv};
pub use psy::{psy, Psy};
pub use result::{IndicatorResult, Line};
pub use roc::{roc, Roc};
pub use rsi::{rsi, Rsi};
pub use taq::{taq, Taq};
pub use trix::{trix, Trix};
pub use vr::{vr, Vr};
pub use wr::{wr, Wr};

/// Build a deterministic OHLCV sample of `n` bars for tests.
///
/// Pseudo-random walk from a fixed LCG: open = previous close, high/low one
/// unit outside the body, volume varies with the bar index.
#[cfg(test)]
pub fn sample_ohlcv(n: usize) -> crate::domain::Ohlcv {
    let mut open = Vec::with_capacity(n);
    let mut high = Vec::with_capacity(n);
    let mut low = Vec::with_capacity(n);
    let mut close = Vec::with_capacity(n);
    let mut volume = Vec::with_capacity(n);
    let mut price = 100.0;

    for i in 0..n {
        let seed = (i as u64).wrapping_mul(6364136223846793005).wrapping_add(1);
        let change = ((seed >> 33) % 200) as f64 * 0.02 - 2.0;
        let prev = price;
        price = (price + change).max(10.0);

        open.push(prev);
        high.push(prev.max(price) + 1.0);
        low.push(prev.min(price) - 1.0);
        close.push(price);
        volume.push(1000.0 + (i % 7) as f64 * 150.0);
    }

    crate::domain::Ohlcv::new(open, high, low, close, volume).unwrap()
}

/// OHLCV from closes only: open = previous close, high/low one unit outside.
#[cfg(test)]
pub fn make_ohlcv(closes: &[f64]) -> crate::domain::Ohlcv {
    let open: Vec<f64> = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| if i == 0 { c } else { closes[i - 1] })
        .collect();
    let high = open.iter().zip(closes).map(|(o, c)| o.max(*c) + 1.0).collect();
    let low = open.iter().zip(closes).map(|(o, c)| o.min(*c) - 1.0).collect();
    let volume = vec![1000.0; closes.len()];
    crate::domain::Ohlcv::new(open, high, low, closes.to_vec(), volume).unwrap()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
