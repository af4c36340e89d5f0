//! Favorites sub-client — watchlist queries and mutations.
//!
//! All endpoints require a bearer token; without one the backend answers 401,
//! surfaced as `HttpError::Unauthorized`.

use crate::client::StockdeckClient;
use crate::domain::favorite::FavoriteEntry;
use crate::error::SdkError;
use crate::shared::Symbol;

pub struct Favorites<'a> {
    pub(crate) client: &'a StockdeckClient,
}

impl<'a> Favorites<'a> {
    /// Fetch the user's watchlist.
    pub async fn list(&self) -> Result<Vec<FavoriteEntry>, SdkError> {
        Ok(self.client.http.get_favorites().await?)
    }

    /// Add a symbol to the watchlist.
    pub async fn add(&self, symbol: &Symbol) -> Result<(), SdkError> {
        let _ = self.client.http.add_favorite(symbol.as_str()).await?;
        Ok(())
    }

    /// Remove a symbol from the watchlist.
    pub async fn remove(&self, symbol: &Symbol) -> Result<(), SdkError> {
        let _ = self.client.http.remove_favorite(symbol.as_str()).await?;
        Ok(())
    }

    /// Toggle a symbol's membership. Returns whether the symbol is a
    /// favorite after the call.
    pub async fn toggle(&self, symbol: &Symbol, currently: bool) -> Result<bool, SdkError> {
        if currently {
            self.remove(symbol).await?;
            Ok(false)
        } else {
            self.add(symbol).await?;
            Ok(true)
        }
    }
}
