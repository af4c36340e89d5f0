//! Favorite domain — the authenticated user's watchlist.

pub mod client;
pub mod wire;

pub use wire::FavoriteEntry;
