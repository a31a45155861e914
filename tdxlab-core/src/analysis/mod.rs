//! Interpretation of computed indicators at the latest bar.

pub mod boll;

pub use boll::{
    analyze_boll, boll_state, Advice, BandEvent, BandPosition, BandTrend, BandZone, BollState,
    MidEvent, MidTrend,
};
