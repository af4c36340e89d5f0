//! Wire types for ranking rows (REST + WS).
//!
//! The rankings stream sends the same row shape as the REST endpoint, a full
//! array per interval, so one type serves both paths.

use crate::shared::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a market ranking, already sorted by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingRow {
    #[serde(rename = "code")]
    pub symbol: Symbol,
    pub name: String,
    /// Market label, e.g. `"KR"` or `"NAS"`.
    pub market: String,
    pub price: Decimal,
    pub change_rate: Decimal,
    pub volume: Decimal,
    pub amount: Decimal,
    #[serde(default)]
    pub market_cap: Option<Decimal>,
}
