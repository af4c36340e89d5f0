//! Network URL constants for the Stockdeck SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default WebSocket base URL. Stream channels are appended as URL paths.
pub const DEFAULT_WS_URL: &str = "ws://localhost:8000/realtime";
