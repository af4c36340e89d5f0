//! Stream channel addressing and per-channel payload parsing.

use crate::domain::ranking::RankingRow;
use crate::domain::trade::wire::WsTrade;
use crate::error::WsError;
use crate::shared::{MarketType, RankKind, Symbol};
use crate::ws::StreamMessage;
use serde::Deserialize;

/// A stream channel, addressed by URL path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Live trade ticks for one symbol.
    Trades { symbol: Symbol },
    /// Rolling board refreshes for one (kind, market) selection.
    Rankings { kind: RankKind, market: MarketType },
}

/// Envelope on the per-symbol channel. The server tags each frame so new
/// message kinds can be added without breaking older clients.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum TradeFrame {
    #[serde(rename = "trade")]
    Trade(WsTrade),
}

impl Channel {
    /// Full endpoint URL for this channel.
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Self::Trades { symbol } => format!("{}/stocks/{}", base, symbol),
            Self::Rankings { kind, market } => format!(
                "{}/rankings?rank_type={}&market_type={}",
                base,
                kind.as_query(*market),
                market.as_str()
            ),
        }
    }

    /// Parse one text frame from this channel.
    ///
    /// A malformed frame yields `WsError::DeserializationError`; the caller
    /// drops the frame and keeps the subscription open.
    pub fn parse(&self, text: &str) -> Result<StreamMessage, WsError> {
        match self {
            Self::Trades { .. } => {
                let TradeFrame::Trade(trade) = serde_json::from_str(text)
                    .map_err(|e| WsError::DeserializationError(e.to_string()))?;
                Ok(StreamMessage::Trade(trade))
            }
            Self::Rankings { .. } => {
                let rows: Vec<RankingRow> = serde_json::from_str(text)
                    .map_err(|e| WsError::DeserializationError(e.to_string()))?;
                Ok(StreamMessage::Rankings(rows))
            }
        }
    }
}
