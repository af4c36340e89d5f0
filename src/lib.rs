//! # Stockdeck SDK
//!
//! Client SDK for the Stockdeck market-dashboard backend: typed REST
//! endpoints, URL-scoped realtime WebSocket channels, and the state
//! machinery a chart front-end needs on top of them.
//!
//! ## Architecture
//!
//! The crate is layered; each layer only depends on the ones below it:
//!
//! - **`shared`** — newtypes and enums used everywhere ([`Symbol`],
//!   [`Timeframe`], [`MarketType`], [`RankKind`]).
//! - **`domain`** — vertical slices per business area (candle, chart,
//!   trade, ranking, stock, favorite), each with its own wire types,
//!   conversions, and client-side state.
//! - **`http`** / **`ws`** — transports: a retrying REST client and a
//!   reconnecting per-channel WebSocket client.
//! - **`auth`** — login, registration, and session restore.
//! - **`client`** — [`StockdeckClient`], the high-level entry point.
//!
//! ## Quick start
//!
//! ```no_run
//! use futures_util::StreamExt;
//! use stockdeck_sdk::prelude::*;
//!
//! # async fn run() -> Result<(), SdkError> {
//! let client = StockdeckClient::new();
//!
//! // Load the realtime snapshot, then follow live ticks.
//! let symbol = Symbol::from("005930");
//! let candles = client.candles().get(&symbol, Timeframe::Realtime, None).await?;
//!
//! let mut store = CandleStore::new(Timeframe::Realtime);
//! store.replace(candles);
//!
//! let mut ws = client.stream(Channel::Trades { symbol: symbol.clone() });
//! ws.connect().await?;
//! let mut events = ws.events();
//! while let Some(event) = events.next().await {
//!     if let WsEvent::Message(StreamMessage::Trade(trade)) = event {
//!         let tick = Tick::from(&Trade::from(trade));
//!         store.apply_tick(&tick);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod domain;
pub mod error;
pub mod http;
pub mod network;
pub mod shared;
pub mod util;
pub mod ws;

pub use client::{StockdeckClient, StockdeckClientBuilder};
pub use error::{AuthError, HttpError, SdkError, WsError};
pub use shared::{MarketType, RankKind, Symbol, Timeframe};

/// Everything a typical consumer needs, in one import.
pub mod prelude {
    pub use crate::auth::{AuthCredentials, User};
    pub use crate::client::{StockdeckClient, StockdeckClientBuilder};
    pub use crate::domain::candle::{Candle, CandleStore, Tick, TickApplied};
    pub use crate::domain::chart::{
        ChartSession, ChartSink, SessionState, VolumeColor, VolumePoint,
    };
    pub use crate::domain::favorite::FavoriteEntry;
    pub use crate::domain::ranking::{RankingBoard, RankingRow};
    pub use crate::domain::stock::{QuoteResponse, SearchResult};
    pub use crate::domain::trade::{Trade, TradeFeed};
    pub use crate::error::{AuthError, HttpError, SdkError, WsError};
    pub use crate::shared::{MarketType, RankKind, Symbol, Timeframe};
    pub use crate::util::Debouncer;
    pub use crate::ws::{Channel, ReadyState, StreamMessage, WsClient, WsConfig, WsEvent};
}
