//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod serde_util;
pub mod timeframe;

pub use timeframe::Timeframe;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Newtype for stock symbol identifiers (e.g. `"005930"` or `"AAPL"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol(s.to_string()))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol(s))
    }
}

// ─── MarketType ──────────────────────────────────────────────────────────────

/// Market scope for ranking queries and streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketType {
    #[default]
    All,
    Domestic,
    Overseas,
}

impl MarketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Domestic => "DOMESTIC",
            Self::Overseas => "OVERSEAS",
        }
    }
}

impl std::fmt::Display for MarketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── RankKind ────────────────────────────────────────────────────────────────

/// Ranking criterion for the dashboard's market board.
///
/// The backend keys overseas market-cap rankings as `market_cap`; `as_query`
/// handles that mapping so callers never send the wrong key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankKind {
    #[default]
    Volume,
    Amount,
    Cap,
    Rise,
    Fall,
}

impl RankKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Amount => "amount",
            Self::Cap => "cap",
            Self::Rise => "rise",
            Self::Fall => "fall",
        }
    }

    /// Query-string value for a given market scope.
    pub fn as_query(&self, market: MarketType) -> &'static str {
        match (self, market) {
            (Self::Cap, MarketType::Overseas) => "market_cap",
            _ => self.as_str(),
        }
    }
}

impl std::fmt::Display for RankKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_serde() {
        let sym = Symbol::from("005930");
        let json = serde_json::to_string(&sym).unwrap();
        assert_eq!(json, "\"005930\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(sym, back);
    }

    #[test]
    fn test_market_type_serde() {
        let m: MarketType = serde_json::from_str("\"OVERSEAS\"").unwrap();
        assert_eq!(m, MarketType::Overseas);
        assert_eq!(serde_json::to_string(&MarketType::All).unwrap(), "\"ALL\"");
    }

    #[test]
    fn test_rank_kind_serde() {
        let k: RankKind = serde_json::from_str("\"rise\"").unwrap();
        assert_eq!(k, RankKind::Rise);
    }

    #[test]
    fn test_rank_kind_overseas_cap_query() {
        assert_eq!(RankKind::Cap.as_query(MarketType::Overseas), "market_cap");
        assert_eq!(RankKind::Cap.as_query(MarketType::Domestic), "cap");
        assert_eq!(RankKind::Volume.as_query(MarketType::Overseas), "volume");
    }
}
