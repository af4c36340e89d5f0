//! HTTP client layer — `StockdeckHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::StockdeckHttp;
pub use retry::{RetryConfig, RetryPolicy};
