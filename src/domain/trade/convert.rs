//! Conversions from wire types to domain types for trades.

use super::wire::{TradeResponse, WsTrade};
use super::Trade;

impl From<TradeResponse> for Trade {
    fn from(t: TradeResponse) -> Self {
        Self {
            symbol: t.symbol,
            name: t.name,
            timestamp: t.time,
            price: t.price,
            change: t.change,
            change_rate: t.change_rate,
            size: t.volume,
            cumulative_volume: t.cumulative_volume,
        }
    }
}

impl From<WsTrade> for Trade {
    fn from(t: WsTrade) -> Self {
        Self {
            symbol: t.symbol,
            name: t.name,
            timestamp: t.time,
            price: t.price,
            change: t.change,
            change_rate: t.change_rate,
            size: t.volume,
            cumulative_volume: t.cumulative_volume,
        }
    }
}
