//! Wire types for the favorites endpoints (REST).

use crate::shared::Symbol;
use serde::{Deserialize, Serialize};

/// One entry of the user's watchlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntry {
    #[serde(rename = "stock_code")]
    pub symbol: Symbol,
    #[serde(default)]
    pub name: Option<String>,
}
