//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — State containers with update methods (for WS-driven data)
//! - `client.rs` — Sub-client with HTTP methods

pub mod candle;
pub mod chart;
pub mod favorite;
pub mod ranking;
pub mod stock;
pub mod trade;
