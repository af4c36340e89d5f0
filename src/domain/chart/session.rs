//! Per-view chart session — owns the candle store for the active
//! (symbol, timeframe) pair and sequences snapshot loads against live ticks.
//!
//! Exactly one logical writer drives a session. Loads are epoch-tagged:
//! `begin()` bumps the epoch, and a snapshot completion carrying a stale
//! epoch is ignored, so a slow response from a previous (symbol, timeframe)
//! can never touch the new store. Ticks arriving while a load is in flight
//! are buffered and drained in order right after the full redraw.

use crate::domain::candle::{Candle, CandleStore, Tick};
use crate::domain::chart::ChartSink;
use crate::error::SdkError;
use crate::shared::{Symbol, Timeframe};

/// Where a session is in its load/mutate lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Snapshot request in flight; ticks are buffered.
    Loading,
    /// Static timeframe loaded; no further mutation until the next load.
    ReadyStatic,
    /// Realtime timeframe loaded; ticks mutate the last candle.
    ReadyRealtime,
}

/// State machine for one chart view.
pub struct ChartSession {
    symbol: Symbol,
    timeframe: Timeframe,
    epoch: u64,
    state: SessionState,
    store: CandleStore,
    pending: Vec<Tick>,
}

impl ChartSession {
    /// Start a session in `Loading` for the given pair. The returned session's
    /// `epoch()` tags the snapshot request the caller is about to issue.
    pub fn new(symbol: Symbol, timeframe: Timeframe) -> Self {
        Self {
            symbol,
            timeframe,
            epoch: 1,
            state: SessionState::Loading,
            store: CandleStore::new(timeframe),
            pending: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Epoch of the load currently owning the store.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn store(&self) -> &CandleStore {
        &self.store
    }

    /// Switch to a new (symbol, timeframe): tear down the old series and
    /// buffered ticks, enter `Loading`, and return the epoch that must tag
    /// the new snapshot request.
    ///
    /// The caller tears down the old stream subscription before calling this
    /// and subscribes anew afterwards, so no two sessions write concurrently.
    pub fn begin(&mut self, symbol: Symbol, timeframe: Timeframe) -> u64 {
        tracing::debug!(%symbol, %timeframe, "Chart session reset");
        self.symbol = symbol;
        self.timeframe = timeframe;
        self.epoch += 1;
        self.state = SessionState::Loading;
        self.store = CandleStore::new(timeframe);
        self.pending.clear();
        self.epoch
    }

    /// Complete the snapshot load tagged with `epoch`.
    ///
    /// A stale epoch (the session moved on while the request was in flight)
    /// is ignored entirely. A failed or empty fetch degrades to an empty
    /// series in `ReadyStatic` — the sink still gets a `replace_all` so it
    /// can render its placeholder state. On success in a realtime timeframe,
    /// buffered ticks are drained in arrival order.
    pub fn complete_snapshot<S: ChartSink>(
        &mut self,
        epoch: u64,
        result: Result<Vec<Candle>, SdkError>,
        sink: &mut S,
    ) {
        if epoch != self.epoch {
            tracing::debug!(
                stale = epoch,
                current = self.epoch,
                "Ignoring stale snapshot completion"
            );
            return;
        }

        let (candles, failed) = match result {
            Ok(candles) => (candles, false),
            Err(e) => {
                tracing::warn!(symbol = %self.symbol, error = %e, "Snapshot load failed, rendering empty series");
                (Vec::new(), true)
            }
        };

        self.store.replace(candles);
        self.state = if !failed && self.timeframe.is_realtime() {
            SessionState::ReadyRealtime
        } else {
            SessionState::ReadyStatic
        };
        sink.replace_all(self.store.candles(), &self.store.volume_series());

        let pending = std::mem::take(&mut self.pending);
        if self.state == SessionState::ReadyRealtime {
            for tick in pending {
                self.apply_live(&tick, sink);
            }
        }
    }

    /// Feed one stream tick into the session.
    ///
    /// Ticks for another symbol (a subscription torn down mid-flight) are
    /// dropped. While `Loading`, ticks are buffered; in `ReadyStatic` they
    /// are ignored; in `ReadyRealtime` they mutate the last candle and drive
    /// an incremental sink update.
    pub fn handle_tick<S: ChartSink>(&mut self, tick: Tick, sink: &mut S) {
        if tick.symbol != self.symbol {
            tracing::debug!(got = %tick.symbol, want = %self.symbol, "Dropping tick for stale symbol");
            return;
        }

        match self.state {
            SessionState::Loading => self.pending.push(tick),
            SessionState::ReadyStatic => {}
            SessionState::ReadyRealtime => self.apply_live(&tick, sink),
        }
    }

    /// Full redraw from the current store, e.g. after a chart-type toggle.
    pub fn redraw<S: ChartSink>(&self, sink: &mut S) {
        sink.replace_all(self.store.candles(), &self.store.volume_series());
    }

    fn apply_live<S: ChartSink>(&mut self, tick: &Tick, sink: &mut S) {
        if let Some(applied) = self.store.apply_tick(tick) {
            sink.update_last(applied.candle(), &applied.volume_point());
        }
    }
}
