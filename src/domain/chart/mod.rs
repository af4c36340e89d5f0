//! Chart domain — the render-sink seam and the per-view chart session.
//!
//! The SDK never renders. The app implements [`ChartSink`] over whatever
//! charting surface it uses; [`session::ChartSession`] drives it with full
//! redraws after snapshot loads and single-point updates for live ticks.

pub mod session;

use crate::domain::candle::Candle;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use session::{ChartSession, SessionState};

/// Color hint for a volume bar, derived from the same-time candle's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeColor {
    Up,
    Down,
}

/// One bar of the derived volume projection, one-to-one by time with the
/// candle series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePoint {
    pub time: i64,
    pub value: Decimal,
    pub color: VolumeColor,
}

impl VolumePoint {
    pub fn of(candle: &Candle) -> Self {
        Self {
            time: candle.time,
            value: candle.volume,
            color: if candle.is_bullish() {
                VolumeColor::Up
            } else {
                VolumeColor::Down
            },
        }
    }
}

/// Rendering surface for one chart view.
///
/// Implementations must treat both calls as pure projections of the series:
/// `replace_all` with an empty slice renders a placeholder state, and
/// `update_last` called twice with equal values must be a no-op the second
/// time (observably idempotent).
pub trait ChartSink {
    /// Full redraw after a snapshot load or a config change.
    fn replace_all(&mut self, candles: &[Candle], volume: &[VolumePoint]);

    /// Incremental update of exactly the last point after a live tick.
    fn update_last(&mut self, candle: &Candle, volume: &VolumePoint);
}
