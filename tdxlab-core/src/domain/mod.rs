//! Input data types: single bars and column-oriented OHLCV series.

pub mod bar;
pub mod ohlcv;

pub use bar::Bar;
pub use ohlcv::Ohlcv;
