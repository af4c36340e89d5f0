//! Low-level HTTP client — `StockdeckHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). Internal to the SDK — the high-level
//! client wraps this.

use crate::domain::candle::wire::CandlesResponse;
use crate::domain::favorite::wire::FavoriteEntry;
use crate::domain::ranking::wire::RankingRow;
use crate::domain::stock::wire::{QuoteResponse, SearchResult};
use crate::domain::trade::wire::TradesResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::{MarketType, RankKind, Timeframe};

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the Stockdeck REST API.
pub struct StockdeckHttp {
    base_url: String,
    client: Client,
    /// Bearer token for authenticated endpoints. NEVER exposed publicly.
    auth_token: Arc<RwLock<Option<String>>>,
}

impl StockdeckHttp {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            auth_token: Arc::new(RwLock::new(None)),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the bearer token used for authenticated endpoints.
    pub(crate) async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    /// Clear the bearer token.
    pub(crate) async fn clear_auth_token(&self) {
        *self.auth_token.write().await = None;
    }

    pub(crate) async fn has_auth_token(&self) -> bool {
        self.auth_token.read().await.is_some()
    }

    // ── Stocks ───────────────────────────────────────────────────────────

    pub async fn search_stocks(
        &self,
        keyword: &str,
        limit: Option<u32>,
    ) -> Result<Vec<SearchResult>, HttpError> {
        let mut url = format!(
            "{}/stocks/search?keyword={}",
            self.base_url,
            urlencoding::encode(keyword)
        );
        if let Some(l) = limit {
            url = format!("{}&limit={}", url, l);
        }
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_quote(&self, symbol: &str) -> Result<QuoteResponse, HttpError> {
        let url = format!("{}/stocks/{}/quote", self.base_url, symbol);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Rankings ─────────────────────────────────────────────────────────

    pub async fn get_rankings(
        &self,
        kind: RankKind,
        market: MarketType,
    ) -> Result<Vec<RankingRow>, HttpError> {
        let url = format!(
            "{}/stocks/rank/{}?market_type={}",
            self.base_url,
            kind.as_query(market),
            market.as_str()
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Candles ──────────────────────────────────────────────────────────

    pub async fn get_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: Option<u32>,
    ) -> Result<CandlesResponse, HttpError> {
        let mut url = format!(
            "{}/stocks/{}/candles?timeframe={}",
            self.base_url,
            symbol,
            timeframe.as_str()
        );
        if let Some(l) = limit {
            url = format!("{}&limit={}", url, l);
        }
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Trades ───────────────────────────────────────────────────────────

    pub async fn get_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<TradesResponse, HttpError> {
        let mut url = format!("{}/stocks/{}/trades", self.base_url, symbol);
        if let Some(l) = limit {
            url = format!("{}?limit={}", url, l);
        }
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Favorites ────────────────────────────────────────────────────────

    pub async fn get_favorites(&self) -> Result<Vec<FavoriteEntry>, HttpError> {
        let url = format!("{}/users/me/favorites", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn add_favorite(&self, symbol: &str) -> Result<serde_json::Value, HttpError> {
        let url = format!("{}/users/me/favorites/{}", self.base_url, symbol);
        self.post(&url, &serde_json::json!({}), RetryPolicy::None)
            .await
    }

    pub async fn remove_favorite(&self, symbol: &str) -> Result<serde_json::Value, HttpError> {
        let url = format!("{}/users/me/favorites/{}", self.base_url, symbol);
        self.delete(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::DELETE, url, None::<&()>, RetryPolicy::None)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                tokio::time::sleep(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => re.is_connect() || re.is_request(),
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        tokio::time::sleep(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(token) = self.auth_token.read().await.as_ref() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for StockdeckHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}
