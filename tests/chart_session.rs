//! End-to-end chart lifecycle: a day-chart load, a switch to the realtime
//! timeframe, and live ticks flowing into the refreshed series.

use rust_decimal::Decimal;
use stockdeck_sdk::prelude::*;

/// Sink recording both full redraws and incremental last-candle updates.
#[derive(Default)]
struct RecordingSink {
    redraws: Vec<(Vec<Candle>, Vec<VolumePoint>)>,
    updates: Vec<(Candle, VolumePoint)>,
}

impl ChartSink for RecordingSink {
    fn replace_all(&mut self, candles: &[Candle], volume: &[VolumePoint]) {
        self.redraws.push((candles.to_vec(), volume.to_vec()));
    }

    fn update_last(&mut self, candle: &Candle, volume: &VolumePoint) {
        self.updates.push((candle.clone(), volume.clone()));
    }
}

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

fn tick(symbol: &str, time: i64, price: i64, volume: i64) -> Tick {
    Tick {
        symbol: Symbol::from(symbol),
        time,
        price: Decimal::from(price),
        volume: Decimal::from(volume),
    }
}

#[test]
fn day_chart_then_realtime_switch_then_live_ticks() {
    let symbol = Symbol::from("005930");
    let mut session = ChartSession::new(symbol.clone(), Timeframe::Day);
    let mut sink = RecordingSink::default();

    // ── 1. Day snapshot lands ────────────────────────────────────────────
    let day_epoch = session.epoch();
    let day_candles = vec![
        candle(86_400_000, 100, 110, 95, 105, 1_000),
        candle(172_800_000, 105, 112, 104, 108, 1_200),
    ];
    session.complete_snapshot(day_epoch, Ok(day_candles), &mut sink);

    assert_eq!(session.state(), SessionState::ReadyStatic);
    assert_eq!(sink.redraws.len(), 1);
    assert_eq!(sink.redraws[0].0.len(), 2);
    // volume series moves in lockstep with the candles
    assert_eq!(sink.redraws[0].1.len(), 2);
    assert_eq!(sink.redraws[0].1[1].color, VolumeColor::Up);

    // daily chart never mutates on ticks
    session.handle_tick(tick("005930", 173_000_000, 109, 5), &mut sink);
    assert!(sink.updates.is_empty());

    // ── 2. User switches to the realtime timeframe ───────────────────────
    let rt_epoch = session.begin(symbol.clone(), Timeframe::Realtime);
    assert_eq!(session.state(), SessionState::Loading);

    // a tick arrives while the snapshot request is in flight
    session.handle_tick(tick("005930", 10_000_400, 201, 3), &mut sink);
    assert!(sink.updates.is_empty());

    // ── 3. Realtime snapshot lands, buffered tick drains ─────────────────
    let snapshot = vec![candle(10_000_000, 200, 202, 199, 200, 50)];
    session.complete_snapshot(rt_epoch, Ok(snapshot), &mut sink);

    assert_eq!(session.state(), SessionState::ReadyRealtime);
    assert_eq!(sink.redraws.len(), 2);

    // buffered tick merged into the 10_000_000 bucket
    assert_eq!(sink.updates.len(), 1);
    let merged = &sink.updates[0].0;
    assert_eq!(merged.time, 10_000_000);
    assert_eq!(merged.close, Decimal::from(201));
    assert_eq!(merged.volume, Decimal::from(53));
    assert_eq!(session.store().len(), 1);

    // ── 4. Live tick in the next bucket appends a fresh candle ───────────
    session.handle_tick(tick("005930", 10_001_250, 203, 2), &mut sink);

    assert_eq!(session.store().len(), 2);
    let appended = &sink.updates[1].0;
    assert_eq!(appended.time, 10_001_000);
    assert_eq!(appended.open, Decimal::from(203));
    assert_eq!(appended.high, Decimal::from(203));
    assert_eq!(appended.low, Decimal::from(203));
    assert_eq!(appended.close, Decimal::from(203));
    assert_eq!(appended.volume, Decimal::from(2));
    assert_eq!(sink.updates[1].1.color, VolumeColor::Up);

    // ── 5. Out-of-order tick is discarded ────────────────────────────────
    session.handle_tick(tick("005930", 10_000_600, 1, 1), &mut sink);
    assert_eq!(sink.updates.len(), 2);
    assert_eq!(session.store().last().unwrap().close, Decimal::from(203));
}

#[test]
fn slow_snapshot_from_previous_symbol_never_lands() {
    let mut session = ChartSession::new(Symbol::from("005930"), Timeframe::Realtime);
    let mut sink = RecordingSink::default();
    let old_epoch = session.epoch();

    // user switches symbol before the first snapshot returns
    let new_epoch = session.begin(Symbol::from("000660"), Timeframe::Realtime);

    // the old symbol's snapshot finally arrives — ignored
    session.complete_snapshot(old_epoch, Ok(vec![candle(1_000, 1, 1, 1, 1, 1)]), &mut sink);
    assert_eq!(session.state(), SessionState::Loading);
    assert!(sink.redraws.is_empty());

    // the new symbol's snapshot lands normally
    session.complete_snapshot(
        new_epoch,
        Ok(vec![candle(2_000, 20, 21, 19, 20, 10)]),
        &mut sink,
    );
    assert_eq!(session.state(), SessionState::ReadyRealtime);
    assert_eq!(sink.redraws.len(), 1);
    assert_eq!(sink.redraws[0].0[0].time, 2_000);

    // ticks for the old symbol bounce off the symbol guard
    session.handle_tick(tick("005930", 2_500, 99, 1), &mut sink);
    assert!(sink.updates.is_empty());

    session.handle_tick(tick("000660", 2_500, 21, 1), &mut sink);
    assert_eq!(sink.updates.len(), 1);
}
