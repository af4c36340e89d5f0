//! Wire types for trade responses (REST + WS).

use crate::shared::{serde_util, Symbol};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Live trade event from the per-symbol stream channel.
///
/// The stream sends timestamps as epoch milliseconds and amounts as decimal
/// strings; a tick with a missing or unparseable price fails deserialization
/// and is dropped by the WS layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WsTrade {
    #[serde(rename = "code")]
    pub symbol: Symbol,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(with = "serde_util::timestamp_ms")]
    pub time: DateTime<Utc>,
    pub price: Decimal,
    pub change: Decimal,
    #[serde(rename = "rate")]
    pub change_rate: Decimal,
    pub volume: Decimal,
    #[serde(rename = "acml_vol")]
    pub cumulative_volume: Decimal,
}

/// REST response for a single historical trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeResponse {
    #[serde(rename = "code")]
    pub symbol: Symbol,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(with = "serde_util::timestamp_ms")]
    pub time: DateTime<Utc>,
    pub price: Decimal,
    pub change: Decimal,
    #[serde(rename = "rate")]
    pub change_rate: Decimal,
    pub volume: Decimal,
    #[serde(rename = "acml_vol")]
    pub cumulative_volume: Decimal,
}

/// REST response for the recent-trades backlog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradesResponse {
    pub trades: Vec<TradeResponse>,
    pub total: usize,
}
