//! Trade feed state container — app-owned, SDK-provided update logic.

use super::Trade;
use crate::shared::Symbol;
use std::collections::VecDeque;

/// Rolling buffer of the most recent trades for one symbol, newest first.
///
/// The app owns instances of this type and renders them as the live trade
/// list on the detail view.
#[derive(Debug, Clone)]
pub struct TradeFeed {
    pub symbol: Symbol,
    trades: VecDeque<Trade>,
    max_size: usize,
}

impl TradeFeed {
    pub fn new(symbol: Symbol, max_size: usize) -> Self {
        Self {
            symbol,
            trades: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Push a new trade, evicting the oldest if at capacity. Trades for a
    /// different symbol are ignored.
    pub fn push(&mut self, trade: Trade) {
        if trade.symbol != self.symbol {
            tracing::debug!(got = %trade.symbol, want = %self.symbol, "Dropping trade for stale symbol");
            return;
        }
        if self.trades.len() >= self.max_size {
            self.trades.pop_back();
        }
        self.trades.push_front(trade);
    }

    /// Replace all trades from a REST backlog fetch (newest-first input).
    pub fn replace(&mut self, trades: Vec<Trade>) {
        self.trades.clear();
        for trade in trades.into_iter().take(self.max_size) {
            self.trades.push_back(trade);
        }
    }

    pub fn trades(&self) -> &VecDeque<Trade> {
        &self.trades
    }

    pub fn latest(&self) -> Option<&Trade> {
        self.trades.front()
    }

    pub fn clear(&mut self) {
        self.trades.clear();
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn make_trade(symbol: &str, price: i64) -> Trade {
        Trade {
            symbol: Symbol::from(symbol),
            name: None,
            timestamp: Utc::now(),
            price: Decimal::from(price),
            change: Decimal::ZERO,
            change_rate: Decimal::ZERO,
            size: Decimal::ONE,
            cumulative_volume: Decimal::ONE,
        }
    }

    #[test]
    fn test_push_adds_newest_first() {
        let mut feed = TradeFeed::new(Symbol::from("005930"), 10);
        feed.push(make_trade("005930", 100));
        feed.push(make_trade("005930", 101));
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.latest().unwrap().price, Decimal::from(101));
    }

    #[test]
    fn test_rolling_buffer_evicts_oldest() {
        let mut feed = TradeFeed::new(Symbol::from("005930"), 3);
        for price in [100, 101, 102, 103] {
            feed.push(make_trade("005930", price));
        }
        assert_eq!(feed.len(), 3);
        let prices: Vec<_> = feed.trades().iter().map(|t| t.price).collect();
        assert_eq!(
            prices,
            [Decimal::from(103), Decimal::from(102), Decimal::from(101)]
        );
    }

    #[test]
    fn test_push_ignores_other_symbol() {
        let mut feed = TradeFeed::new(Symbol::from("005930"), 10);
        feed.push(make_trade("000660", 100));
        assert!(feed.is_empty());
    }

    #[test]
    fn test_replace_clears_and_fills() {
        let mut feed = TradeFeed::new(Symbol::from("005930"), 10);
        feed.push(make_trade("005930", 100));
        feed.replace(vec![make_trade("005930", 200), make_trade("005930", 199)]);
        assert_eq!(feed.len(), 2);
        // replace uses push_back, so the first vec element stays newest
        assert_eq!(feed.latest().unwrap().price, Decimal::from(200));
    }
}
