//! Rankings sub-client — market board queries.

use crate::client::StockdeckClient;
use crate::domain::ranking::RankingRow;
use crate::error::SdkError;
use crate::shared::{MarketType, RankKind};

pub struct Rankings<'a> {
    pub(crate) client: &'a StockdeckClient,
}

impl<'a> Rankings<'a> {
    /// Fetch the current ranking for one (kind, market) selection,
    /// backend-sorted, top rows first.
    pub async fn get(
        &self,
        kind: RankKind,
        market: MarketType,
    ) -> Result<Vec<RankingRow>, SdkError> {
        Ok(self.client.http.get_rankings(kind, market).await?)
    }
}
