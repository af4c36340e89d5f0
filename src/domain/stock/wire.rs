//! Wire types for stock search and quotes (REST).

use crate::shared::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One hit from a name/symbol search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    #[serde(rename = "code")]
    pub symbol: Symbol,
    pub name: String,
    /// Market label, e.g. `"KR"` or `"NAS"`.
    #[serde(default)]
    pub market: Option<String>,
}

/// Current-price snapshot for the detail view header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteResponse {
    #[serde(rename = "code")]
    pub symbol: Symbol,
    #[serde(default)]
    pub name: Option<String>,
    pub price: Decimal,
    pub change: Decimal,
    pub change_rate: Decimal,
    pub volume: Decimal,
}
