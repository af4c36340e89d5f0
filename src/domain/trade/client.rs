//! Trades sub-client — recent-trades backlog queries.

use crate::client::StockdeckClient;
use crate::domain::trade::Trade;
use crate::error::SdkError;
use crate::shared::Symbol;

pub struct Trades<'a> {
    pub(crate) client: &'a StockdeckClient,
}

impl<'a> Trades<'a> {
    /// Fetch the recent-trades backlog for a symbol, newest first.
    pub async fn recent(
        &self,
        symbol: &Symbol,
        limit: Option<u32>,
    ) -> Result<Vec<Trade>, SdkError> {
        let resp = self.client.http.get_trades(symbol.as_str(), limit).await?;
        Ok(resp.trades.into_iter().map(Trade::from).collect())
    }
}
