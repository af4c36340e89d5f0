//! Candle series state container — app-owned, SDK-provided update logic.
//!
//! Holds the ordered, deduplicated OHLCV series for one (symbol, timeframe)
//! chart session, and applies live trade ticks to its last bucket.

use super::{Candle, Tick};
use crate::domain::chart::VolumePoint;
use crate::shared::Timeframe;

/// What a tick did to the store. Carries the resulting last candle so the
/// caller can forward an incremental point to the chart sink.
#[derive(Debug, Clone, PartialEq)]
pub enum TickApplied {
    /// The tick fell into the last candle's bucket and was merged in place.
    Merged(Candle),
    /// The tick opened a new bucket; a fresh candle was appended.
    Appended(Candle),
}

impl TickApplied {
    pub fn candle(&self) -> &Candle {
        match self {
            Self::Merged(c) | Self::Appended(c) => c,
        }
    }

    /// Derived volume projection of the affected candle.
    pub fn volume_point(&self) -> VolumePoint {
        VolumePoint::of(self.candle())
    }
}

/// The ordered, deduplicated candle series for one timeframe.
///
/// The app owns instances of this type. The SDK provides the update methods.
/// Invariants after any mutation: times strictly ascending, unique per series.
#[derive(Debug, Clone)]
pub struct CandleStore {
    timeframe: Timeframe,
    candles: Vec<Candle>,
}

impl CandleStore {
    pub fn new(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            candles: Vec::new(),
        }
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn clear(&mut self) {
        self.candles.clear();
    }

    /// Replace the whole series from a historical snapshot.
    ///
    /// The input is normalized: sorted ascending by time, duplicates collapsed
    /// with the later entry winning. Safe to call with the same input twice.
    pub fn replace(&mut self, mut candles: Vec<Candle>) {
        candles.sort_by_key(|c| c.time);
        candles.dedup_by(|curr, prev| {
            if curr.time == prev.time {
                *prev = curr.clone();
                true
            } else {
                false
            }
        });
        self.candles = candles;
    }

    /// Apply one live trade tick to the last bucket.
    ///
    /// Returns `None` when the tick is dropped: empty store (no bucket to
    /// merge into) or a late tick behind the last bucket. Late ticks are a
    /// data-quality condition; history is never mutated retroactively.
    pub fn apply_tick(&mut self, tick: &Tick) -> Option<TickApplied> {
        let bucket = self.timeframe.bucket_of(tick.time);
        let last = self.candles.last_mut()?;

        if bucket == last.time {
            last.close = tick.price;
            last.high = last.high.max(tick.price);
            last.low = last.low.min(tick.price);
            last.volume += tick.volume;
            return Some(TickApplied::Merged(last.clone()));
        }

        if bucket < last.time {
            tracing::debug!(
                tick_time = tick.time,
                bucket,
                last = last.time,
                "Dropping out-of-order tick"
            );
            return None;
        }

        let candle = Candle::from_trade(bucket, tick.price, tick.volume);
        self.candles.push(candle.clone());
        Some(TickApplied::Appended(candle))
    }

    /// Derived volume projection, one-to-one by time with the candle series.
    pub fn volume_series(&self) -> Vec<VolumePoint> {
        self.candles.iter().map(VolumePoint::of).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::VolumeColor;
    use crate::shared::Symbol;
    use rust_decimal::Decimal;

    fn candle(time: i64, open: i64, high: i64, low: i64, close: i64, volume: i64) -> Candle {
        Candle {
            time,
            open: Decimal::from(open),
            high: Decimal::from(high),
            low: Decimal::from(low),
            close: Decimal::from(close),
            volume: Decimal::from(volume),
        }
    }

    fn tick(time: i64, price: i64, volume: i64) -> Tick {
        Tick {
            symbol: Symbol::from("005930"),
            time,
            price: Decimal::from(price),
            volume: Decimal::from(volume),
        }
    }

    #[test]
    fn test_replace_sorts_ascending() {
        let mut store = CandleStore::new(Timeframe::Day);
        store.replace(vec![
            candle(3000, 1, 1, 1, 1, 1),
            candle(1000, 1, 1, 1, 1, 1),
            candle(2000, 1, 1, 1, 1, 1),
        ]);
        let times: Vec<_> = store.candles().iter().map(|c| c.time).collect();
        assert_eq!(times, [1000, 2000, 3000]);
    }

    #[test]
    fn test_replace_dedup_keeps_later_entry() {
        let mut store = CandleStore::new(Timeframe::Day);
        store.replace(vec![
            candle(1000, 10, 10, 10, 10, 10),
            candle(1000, 20, 20, 20, 20, 20),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.last().unwrap().close, Decimal::from(20));
    }

    #[test]
    fn test_replace_is_idempotent() {
        let input = vec![candle(2000, 1, 2, 1, 2, 5), candle(1000, 1, 2, 1, 2, 5)];
        let mut store = CandleStore::new(Timeframe::Day);
        store.replace(input.clone());
        let first = store.candles().to_vec();
        store.replace(input);
        assert_eq!(store.candles(), first.as_slice());
    }

    #[test]
    fn test_tick_merges_into_last_bucket() {
        // per-second buckets on the realtime timeframe
        let mut store = CandleStore::new(Timeframe::Realtime);
        store.replace(vec![candle(1000, 10, 12, 9, 11, 100)]);

        let applied = store.apply_tick(&tick(1500, 13, 5)).unwrap();
        assert!(matches!(applied, TickApplied::Merged(_)));

        let last = store.last().unwrap();
        assert_eq!(last.time, 1000);
        assert_eq!(last.open, Decimal::from(10));
        assert_eq!(last.high, Decimal::from(13));
        assert_eq!(last.low, Decimal::from(9));
        assert_eq!(last.close, Decimal::from(13));
        assert_eq!(last.volume, Decimal::from(105));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_tick_merge_extends_low() {
        let mut store = CandleStore::new(Timeframe::Realtime);
        store.replace(vec![candle(1000, 10, 12, 9, 11, 100)]);
        store.apply_tick(&tick(1200, 8, 1)).unwrap();
        let last = store.last().unwrap();
        assert_eq!(last.low, Decimal::from(8));
        assert_eq!(last.close, Decimal::from(8));
        assert_eq!(last.high, Decimal::from(12));
    }

    #[test]
    fn test_tick_appends_new_bucket() {
        let mut store = CandleStore::new(Timeframe::Realtime);
        store.replace(vec![candle(1000, 10, 12, 9, 11, 100)]);

        let applied = store.apply_tick(&tick(2400, 14, 3)).unwrap();
        let TickApplied::Appended(ref c) = applied else {
            panic!("expected append, got {:?}", applied);
        };
        assert_eq!(c.time, 2000);
        assert_eq!(c.open, Decimal::from(14));
        assert_eq!(c.high, Decimal::from(14));
        assert_eq!(c.low, Decimal::from(14));
        assert_eq!(c.close, Decimal::from(14));
        assert_eq!(c.volume, Decimal::from(3));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_tick_on_empty_store_is_dropped() {
        let mut store = CandleStore::new(Timeframe::Realtime);
        assert!(store.apply_tick(&tick(1000, 10, 1)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_late_tick_is_dropped() {
        let mut store = CandleStore::new(Timeframe::Realtime);
        store.replace(vec![candle(5000, 10, 12, 9, 11, 100)]);

        assert!(store.apply_tick(&tick(3999, 50, 1)).is_none());
        // history untouched
        assert_eq!(store.len(), 1);
        assert_eq!(store.last().unwrap().high, Decimal::from(12));
    }

    #[test]
    fn test_volume_series_lockstep_with_color() {
        let mut store = CandleStore::new(Timeframe::Day);
        store.replace(vec![
            candle(1000, 10, 12, 9, 11, 100), // up
            candle(2000, 11, 11, 8, 9, 50),   // down
        ]);
        let vols = store.volume_series();
        assert_eq!(vols.len(), 2);
        assert_eq!(vols[0].time, 1000);
        assert_eq!(vols[0].value, Decimal::from(100));
        assert_eq!(vols[0].color, VolumeColor::Up);
        assert_eq!(vols[1].color, VolumeColor::Down);
    }

    #[test]
    fn test_applied_volume_point_tracks_merge() {
        let mut store = CandleStore::new(Timeframe::Realtime);
        store.replace(vec![candle(1000, 10, 12, 9, 11, 100)]);
        let applied = store.apply_tick(&tick(1500, 13, 5)).unwrap();
        let vp = applied.volume_point();
        assert_eq!(vp.time, 1000);
        assert_eq!(vp.value, Decimal::from(105));
        assert_eq!(vp.color, VolumeColor::Up);
    }
}
