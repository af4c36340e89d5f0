//! WebSocket layer — stream channels, messages, events.
//!
//! The backend scopes subscriptions by URL: each channel is its own endpoint
//! (`/stocks/{symbol}` for trade ticks, `/rankings` for board refreshes), so
//! there is no subscribe/unsubscribe frame protocol — connecting establishes
//! the subscription and reconnecting re-establishes it.

pub mod channel;
pub mod native;

use crate::domain::ranking::RankingRow;
use crate::domain::trade::wire::WsTrade;

pub use channel::Channel;
pub use native::WsClient;

// ─── Inbound messages ────────────────────────────────────────────────────────

/// A parsed message from a stream channel.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamMessage {
    /// One trade tick from a per-symbol channel.
    Trade(WsTrade),
    /// A full board refresh from the rankings channel.
    Rankings(Vec<RankingRow>),
}

// ─── WsEvent ─────────────────────────────────────────────────────────────────

/// High-level events emitted by the WS client to the consumer.
#[derive(Debug, Clone)]
pub enum WsEvent {
    /// Connection established (also after a reconnect).
    Connected,
    /// A parsed message from the server.
    Message(StreamMessage),
    /// Connection lost (may trigger reconnect).
    Disconnected { code: Option<u16>, reason: String },
    /// A deserialization or protocol error; the connection stays open.
    Error(String),
    /// Reconnection budget exhausted; the client gave up.
    MaxReconnectReached,
}

/// Configuration for the WS client.
#[derive(Debug, Clone)]
pub struct WsConfig {
    /// Base URL; the channel path is appended.
    pub base_url: String,
    pub reconnect: bool,
    pub max_reconnect_attempts: u32,
    pub base_reconnect_delay_ms: u32,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_WS_URL.to_string(),
            reconnect: true,
            max_reconnect_attempts: 10,
            base_reconnect_delay_ms: 1000,
        }
    }
}

/// Connection state, modeled after the browser WebSocket readyState values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ReadyState {
    Connecting = 0,
    Open = 1,
    Closing = 2,
    Closed = 3,
}

impl From<u16> for ReadyState {
    fn from(v: u16) -> Self {
        match v {
            0 => Self::Connecting,
            1 => Self::Open,
            2 => Self::Closing,
            _ => Self::Closed,
        }
    }
}
