//! Ranking domain — the dashboard's market board.

pub mod client;
pub mod state;
pub mod wire;

pub use state::RankingBoard;
pub use wire::RankingRow;
