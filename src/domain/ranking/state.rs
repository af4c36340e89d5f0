//! Ranking board state container — app-owned, SDK-provided update logic.

use super::RankingRow;
use crate::shared::{MarketType, RankKind, Symbol};

/// The currently displayed market board for one (kind, market) selection.
///
/// The stream pushes a full, backend-sorted array per interval; each push
/// replaces the rows wholesale. Row order is the ranking.
#[derive(Debug, Clone)]
pub struct RankingBoard {
    pub kind: RankKind,
    pub market: MarketType,
    rows: Vec<RankingRow>,
}

impl RankingBoard {
    pub fn new(kind: RankKind, market: MarketType) -> Self {
        Self {
            kind,
            market,
            rows: Vec::new(),
        }
    }

    /// Replace the board from a REST fetch or a stream refresh.
    pub fn replace(&mut self, rows: Vec<RankingRow>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[RankingRow] {
        &self.rows
    }

    /// 1-based rank of a symbol, if listed.
    pub fn rank_of(&self, symbol: &Symbol) -> Option<usize> {
        self.rows.iter().position(|r| &r.symbol == symbol).map(|i| i + 1)
    }

    pub fn top(&self, n: usize) -> &[RankingRow] {
        &self.rows[..self.rows.len().min(n)]
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn row(code: &str) -> RankingRow {
        RankingRow {
            symbol: Symbol::from(code),
            name: code.to_string(),
            market: "KR".to_string(),
            price: Decimal::from(100),
            change_rate: Decimal::ZERO,
            volume: Decimal::from(1000),
            amount: Decimal::from(100_000),
            market_cap: None,
        }
    }

    #[test]
    fn test_replace_overwrites_rows() {
        let mut board = RankingBoard::new(RankKind::Volume, MarketType::Domestic);
        board.replace(vec![row("A"), row("B")]);
        board.replace(vec![row("C")]);
        assert_eq!(board.rows().len(), 1);
        assert_eq!(board.rows()[0].symbol.as_str(), "C");
    }

    #[test]
    fn test_rank_of_is_one_based() {
        let mut board = RankingBoard::new(RankKind::Volume, MarketType::All);
        board.replace(vec![row("A"), row("B"), row("C")]);
        assert_eq!(board.rank_of(&Symbol::from("B")), Some(2));
        assert_eq!(board.rank_of(&Symbol::from("Z")), None);
    }

    #[test]
    fn test_top_clamps_to_len() {
        let mut board = RankingBoard::new(RankKind::Rise, MarketType::All);
        board.replace(vec![row("A"), row("B")]);
        assert_eq!(board.top(30).len(), 2);
        assert_eq!(board.top(1)[0].symbol.as_str(), "A");
    }
}
