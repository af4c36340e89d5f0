//! Trade domain — individual trade executions and the live feed.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::Symbol;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::TradeFeed;

/// One trade execution for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub symbol: Symbol,
    /// Display name, when the backend resolves it.
    pub name: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub price: Decimal,
    /// Signed change versus the previous close.
    pub change: Decimal,
    /// Change rate in percent.
    pub change_rate: Decimal,
    /// This trade's quantity (incremental, not cumulative).
    pub size: Decimal,
    /// Accumulated session volume as of this trade.
    pub cumulative_volume: Decimal,
}
