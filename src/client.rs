//! High-level SDK client.
//!
//! Entry point tying the layers together: typed HTTP endpoints behind
//! domain sub-clients, per-channel WebSocket clients, and session-wide
//! auth state shared with the HTTP layer.

use std::sync::Arc;

use crate::auth::client::Auth;
use crate::auth::AuthCredentials;
use crate::domain::candle::client::Candles;
use crate::domain::favorite::client::Favorites;
use crate::domain::ranking::client::Rankings;
use crate::domain::stock::client::Stocks;
use crate::domain::trade::client::Trades;
use crate::http::StockdeckHttp;
use crate::network::{DEFAULT_API_URL, DEFAULT_WS_URL};
use crate::ws::{Channel, WsClient, WsConfig};

/// Builder for [`StockdeckClient`].
///
/// ```no_run
/// use stockdeck_sdk::StockdeckClient;
///
/// let client = StockdeckClient::builder()
///     .base_url("http://localhost:8000")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct StockdeckClientBuilder {
    base_url: Option<String>,
    ws_url: Option<String>,
    reconnect: Option<bool>,
}

impl StockdeckClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the REST base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the WebSocket base URL.
    pub fn ws_url(mut self, url: impl Into<String>) -> Self {
        self.ws_url = Some(url.into());
        self
    }

    /// Enable or disable automatic WebSocket reconnection.
    pub fn reconnect(mut self, enabled: bool) -> Self {
        self.reconnect = Some(enabled);
        self
    }

    pub fn build(self) -> StockdeckClient {
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut ws_config = WsConfig {
            base_url: self.ws_url.unwrap_or_else(|| DEFAULT_WS_URL.to_string()),
            ..WsConfig::default()
        };
        if let Some(reconnect) = self.reconnect {
            ws_config.reconnect = reconnect;
        }

        StockdeckClient {
            http: StockdeckHttp::new(&base_url),
            ws_config,
            auth_credentials: Arc::new(async_lock::RwLock::new(None)),
        }
    }
}

/// The main SDK client.
///
/// Cheap to clone: clones share the HTTP connection pool and the auth
/// session. WebSocket clients created via [`StockdeckClient::stream`] are
/// independent, one per channel.
pub struct StockdeckClient {
    pub(crate) http: StockdeckHttp,
    ws_config: WsConfig,
    pub(crate) auth_credentials: Arc<async_lock::RwLock<Option<AuthCredentials>>>,
}

impl StockdeckClient {
    pub fn builder() -> StockdeckClientBuilder {
        StockdeckClientBuilder::new()
    }

    /// Client with default local-backend URLs.
    pub fn new() -> Self {
        Self::builder().build()
    }

    // ── Sub-clients ──────────────────────────────────────────────────────

    /// Authentication operations: login, register, session restore.
    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    /// Symbol search and quote lookups.
    pub fn stocks(&self) -> Stocks<'_> {
        Stocks { client: self }
    }

    /// Ranking board queries.
    pub fn rankings(&self) -> Rankings<'_> {
        Rankings { client: self }
    }

    /// Historical candle queries.
    pub fn candles(&self) -> Candles<'_> {
        Candles { client: self }
    }

    /// Recent-trade queries.
    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    /// Favorite-list operations (requires authentication).
    pub fn favorites(&self) -> Favorites<'_> {
        Favorites { client: self }
    }

    // ── Streaming ────────────────────────────────────────────────────────

    /// Create a WebSocket client for one channel.
    ///
    /// The returned client is not yet connected; call
    /// [`WsClient::connect`](crate::ws::WsClient::connect) on it. Each
    /// channel gets its own connection because the server scopes the
    /// subscription by URL.
    pub fn stream(&self, channel: Channel) -> WsClient {
        WsClient::new(self.ws_config.clone(), channel)
    }
}

impl Default for StockdeckClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StockdeckClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            ws_config: self.ws_config.clone(),
            auth_credentials: Arc::clone(&self.auth_credentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Symbol;

    #[test]
    fn test_builder_defaults() {
        let client = StockdeckClient::builder().build();
        assert_eq!(client.http.base_url(), DEFAULT_API_URL);
        assert_eq!(client.ws_config.base_url, DEFAULT_WS_URL);
        assert!(client.ws_config.reconnect);
    }

    #[test]
    fn test_builder_overrides() {
        let client = StockdeckClient::builder()
            .base_url("http://example.com:9000")
            .ws_url("ws://example.com:9000/realtime")
            .reconnect(false)
            .build();
        assert_eq!(client.http.base_url(), "http://example.com:9000");
        assert_eq!(client.ws_config.base_url, "ws://example.com:9000/realtime");
        assert!(!client.ws_config.reconnect);
    }

    #[test]
    fn test_stream_carries_channel() {
        let client = StockdeckClient::new();
        let ws = client.stream(Channel::Trades {
            symbol: Symbol::from("005930"),
        });
        assert_eq!(
            ws.channel(),
            &Channel::Trades {
                symbol: Symbol::from("005930")
            }
        );
    }

    #[test]
    fn test_clone_shares_auth_session() {
        let client = StockdeckClient::new();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.auth_credentials, &clone.auth_credentials));
    }
}
