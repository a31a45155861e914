//! Bollinger-band state at the latest bar.
//!
//! Reads a close series and its `upper`/`mid`/`lower` bands and classifies
//! where the last close sits, how the band width and mid line are moving,
//! and which band the last bar crossed. Crossings compare the previous
//! close against the previous bar's bands.

use serde::Serialize;
use tracing::debug;

use crate::components::Indicator;
use crate::domain::Ohlcv;
use crate::error::{check_len, IndicatorError, Result};
use crate::indicators::{Boll, IndicatorResult};
use crate::primitives::{nth_from_end, safe_div};

/// Bars back for the width and slope comparisons (inclusive of the last bar).
const COMPARE_BARS: usize = 5;
/// Relative width change that counts as expanding or contracting.
const WIDTH_TOLERANCE: f64 = 0.05;

/// Where the latest close sits relative to the bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BandZone {
    AboveUpper,
    UpperHalf,
    LowerHalf,
    BelowLower,
}

/// Band width now versus `COMPARE_BARS` bars back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BandTrend {
    Expanding,
    Contracting,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MidTrend {
    Rising,
    Falling,
    Flat,
}

/// Outer-band crossing on the last bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BandEvent {
    BreakAboveUpper,
    FallBackBelowUpper,
    BreakBelowLower,
    ReboundAboveLower,
}

/// Mid-band crossing on the last bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MidEvent {
    CrossAboveMid,
    CrossBelowMid,
}

/// Position inside the channel by %B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BandPosition {
    /// %B above 0.9
    NearUpper,
    /// above 0.7
    Strong,
    /// above 0.5
    NeutralStrong,
    /// above 0.3
    NeutralWeak,
    /// above 0.1
    Weak,
    NearLower,
}

impl BandPosition {
    fn from_percent_b(pb: f64) -> Self {
        if pb > 0.9 {
            Self::NearUpper
        } else if pb > 0.7 {
            Self::Strong
        } else if pb > 0.5 {
            Self::NeutralStrong
        } else if pb > 0.3 {
            Self::NeutralWeak
        } else if pb > 0.1 {
            Self::Weak
        } else {
            Self::NearLower
        }
    }
}

/// Combined reading of %B and the width trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advice {
    /// Near the upper band while the channel opens.
    TakeProfit,
    /// Near the lower band while the channel opens.
    WatchRebound,
    /// Mid-channel while the channel narrows.
    RangeTrade,
    FollowTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BollState {
    pub close: f64,
    pub upper: f64,
    pub mid: f64,
    pub lower: f64,
    pub zone: BandZone,
    /// (upper - lower) / mid at the last bar.
    pub width: f64,
    /// Width `COMPARE_BARS` bars back, or at the first bar of a shorter series.
    pub prev_width: f64,
    pub band_trend: BandTrend,
    /// mid[-1] - mid[-5], 0 for a shorter series.
    pub mid_slope: f64,
    pub mid_trend: MidTrend,
    pub percent_b: f64,
    pub position: BandPosition,
    pub band_event: Option<BandEvent>,
    pub mid_event: Option<MidEvent>,
    /// How many of the last five closes finished above the mid band.
    pub closes_above_mid: usize,
    pub advice: Advice,
}

fn band<'a>(bands: &'a IndicatorResult, line: &str) -> Result<&'a [f64]> {
    bands.line(line).ok_or_else(|| {
        IndicatorError::InsufficientData(format!("'{}' has no '{line}' line", bands.name()))
    })
}

/// Classify the band state at the last bar of `close`.
///
/// `bands` must hold `upper`, `mid` and `lower` lines of the same length as
/// `close`, defined on at least the last two bars.
pub fn analyze_boll(close: &[f64], bands: &IndicatorResult) -> Result<BollState> {
    let upper = band(bands, "upper")?;
    let mid = band(bands, "mid")?;
    let lower = band(bands, "lower")?;
    check_len(close.len(), upper)?;
    check_len(close.len(), mid)?;
    check_len(close.len(), lower)?;

    let len = close.len();
    let defined = |i: usize| !(upper[i].is_nan() || mid[i].is_nan() || lower[i].is_nan());
    if len < 2 || !defined(len - 1) || !defined(len - 2) {
        return Err(IndicatorError::InsufficientData(format!(
            "need bands on the last 2 bars, series has {len}"
        )));
    }

    let (c, u, m, l) = (close[len - 1], upper[len - 1], mid[len - 1], lower[len - 1]);
    let (pc, pu, pm, pl) = (close[len - 2], upper[len - 2], mid[len - 2], lower[len - 2]);

    let zone = if c > u {
        BandZone::AboveUpper
    } else if c > m {
        BandZone::UpperHalf
    } else if c > l {
        BandZone::LowerHalf
    } else {
        BandZone::BelowLower
    };

    let width_at = |i: usize| safe_div(upper[i] - lower[i], mid[i]);
    let width = width_at(len - 1);
    let prev_width = if len >= COMPARE_BARS {
        width_at(len - COMPARE_BARS)
    } else {
        width_at(0)
    };
    let band_trend = if width > prev_width * (1.0 + WIDTH_TOLERANCE) {
        BandTrend::Expanding
    } else if width < prev_width * (1.0 - WIDTH_TOLERANCE) {
        BandTrend::Contracting
    } else {
        BandTrend::Flat
    };

    let mid_slope = if len >= COMPARE_BARS {
        m - nth_from_end(mid, COMPARE_BARS)?
    } else {
        0.0
    };
    let mid_trend = if mid_slope > 0.0 {
        MidTrend::Rising
    } else if mid_slope < 0.0 {
        MidTrend::Falling
    } else {
        MidTrend::Flat
    };

    let band_event = if pc <= pu && c > u {
        Some(BandEvent::BreakAboveUpper)
    } else if pc >= pu && c < u {
        Some(BandEvent::FallBackBelowUpper)
    } else if pc >= pl && c < l {
        Some(BandEvent::BreakBelowLower)
    } else if pc <= pl && c > l {
        Some(BandEvent::ReboundAboveLower)
    } else {
        None
    };

    let mid_event = if pc <= pm && c > m {
        Some(MidEvent::CrossAboveMid)
    } else if pc >= pm && c < m {
        Some(MidEvent::CrossBelowMid)
    } else {
        None
    };

    let recent = len.saturating_sub(COMPARE_BARS);
    let closes_above_mid = close[recent..]
        .iter()
        .zip(&mid[recent..])
        .filter(|(c, m)| c > m)
        .count();

    let percent_b = safe_div(c - l, u - l);
    let position = BandPosition::from_percent_b(percent_b);
    let advice = match band_trend {
        BandTrend::Expanding if percent_b > 0.9 => Advice::TakeProfit,
        BandTrend::Expanding if percent_b < 0.1 => Advice::WatchRebound,
        BandTrend::Contracting if percent_b > 0.3 && percent_b < 0.7 => Advice::RangeTrade,
        _ => Advice::FollowTrend,
    };

    debug!(?zone, ?band_trend, ?mid_trend, percent_b, "analyzed boll state");

    Ok(BollState {
        close: c,
        upper: u,
        mid: m,
        lower: l,
        zone,
        width,
        prev_width,
        band_trend,
        mid_slope,
        mid_trend,
        percent_b,
        position,
        band_event,
        mid_event,
        closes_above_mid,
        advice,
    })
}

/// Compute BOLL with `params` over `data` and analyze the latest bar.
pub fn boll_state(data: &Ohlcv, params: &Boll) -> Result<BollState> {
    analyze_boll(data.close(), &params.compute(data)?)
}
