//! Stocks sub-client — search and quote queries.

use crate::client::StockdeckClient;
use crate::domain::stock::{QuoteResponse, SearchResult};
use crate::error::SdkError;
use crate::shared::Symbol;

pub struct Stocks<'a> {
    pub(crate) client: &'a StockdeckClient,
}

impl<'a> Stocks<'a> {
    /// Search stocks by name or symbol prefix.
    ///
    /// Callers wiring this to a text input should debounce through
    /// [`crate::util::debounce::Debouncer`] rather than querying per keystroke.
    pub async fn search(
        &self,
        keyword: &str,
        limit: Option<u32>,
    ) -> Result<Vec<SearchResult>, SdkError> {
        if keyword.trim().is_empty() {
            return Err(SdkError::Validation("search keyword is empty".to_string()));
        }
        Ok(self.client.http.search_stocks(keyword, limit).await?)
    }

    /// Current-price snapshot for one symbol.
    pub async fn quote(&self, symbol: &Symbol) -> Result<QuoteResponse, SdkError> {
        Ok(self.client.http.get_quote(symbol.as_str()).await?)
    }
}
