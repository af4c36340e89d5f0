//! Candle domain — OHLCV aggregates and the live tick stream feeding them.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::{CandleStore, TickApplied};

/// An OHLCV aggregate over one time bucket.
///
/// `time` is the bucket open time in epoch milliseconds. Within a series,
/// times are strictly increasing and unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

impl Candle {
    /// Seed a fresh candle from a single trade: all four prices collapse to
    /// the trade price.
    pub fn from_trade(time: i64, price: Decimal, volume: Decimal) -> Self {
        Self {
            time,
            open: price,
            high: price,
            low: price,
            close: price,
            volume,
        }
    }

    /// Whether the candle closed at or above its open.
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// OHLC ordering invariant: `low ≤ min(open, close) ≤ max(open, close) ≤ high`.
    pub fn is_well_formed(&self) -> bool {
        self.low <= self.open.min(self.close) && self.high >= self.open.max(self.close)
    }
}

/// One discrete trade event with a price and incremental (not cumulative) volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub symbol: Symbol,
    /// Trade time in epoch milliseconds.
    pub time: i64,
    pub price: Decimal,
    pub volume: Decimal,
}
