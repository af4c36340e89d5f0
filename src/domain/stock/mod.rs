//! Stock domain — symbol search and quote snapshots.

pub mod client;
pub mod wire;

pub use wire::{QuoteResponse, SearchResult};
