//! Candles sub-client — historical OHLCV queries.

use crate::client::StockdeckClient;
use crate::domain::candle::Candle;
use crate::error::SdkError;
use crate::shared::{Symbol, Timeframe};

/// Sub-client for historical candle operations.
pub struct Candles<'a> {
    pub(crate) client: &'a StockdeckClient,
}

impl<'a> Candles<'a> {
    /// Fetch the historical series for one (symbol, timeframe), converted to
    /// domain candles in backend order. Normalization (sort + dedup) happens
    /// when the series enters a `CandleStore`.
    pub async fn get(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
        limit: Option<u32>,
    ) -> Result<Vec<Candle>, SdkError> {
        let resp = self
            .client
            .http
            .get_candles(symbol.as_str(), timeframe, limit)
            .await?;
        Ok(resp.candles.into_iter().map(Candle::from).collect())
    }
}
