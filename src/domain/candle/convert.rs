//! Conversions from wire and trade types into candle-domain types.

use super::wire::CandleRow;
use super::{Candle, Tick};
use crate::domain::trade::Trade;

impl From<CandleRow> for Candle {
    fn from(row: CandleRow) -> Self {
        Self {
            time: row.time,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        }
    }
}

impl From<&Trade> for Tick {
    fn from(t: &Trade) -> Self {
        Self {
            symbol: t.symbol.clone(),
            time: t.timestamp.timestamp_millis(),
            price: t.price,
            volume: t.size,
        }
    }
}
