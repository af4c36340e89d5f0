//! Wire types for historical candle responses (REST).

use crate::shared::{Symbol, Timeframe};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One historical candle as the backend sends it.
///
/// `time` is the bucket open time in epoch milliseconds; prices and volume
/// arrive as decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleRow {
    pub time: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

/// REST response for a historical candle query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandlesResponse {
    pub symbol: Symbol,
    pub timeframe: Timeframe,
    pub candles: Vec<CandleRow>,
}
