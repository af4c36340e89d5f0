//! WebSocket stream client — `tokio-tungstenite`.
//!
//! One client per channel. A background tokio task owns the connection:
//! it answers transport pings, parses frames through the channel, reconnects
//! with exponential backoff + jitter, and delivers events to the consumer
//! over an mpsc-backed stream. Reconnecting re-opens the channel URL, which
//! re-establishes the subscription server-side.

use std::pin::Pin;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{SplitSink, SplitStream, Stream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::error::WsError;
use crate::ws::{Channel, ReadyState, WsConfig, WsEvent};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

// ─── Commands from public API to background task ─────────────────────────────

enum Command {
    Disconnect,
}

// ─── Disconnect reasons for the reconnection decision ────────────────────────

enum DisconnectReason {
    UserRequested,
    NormalClose,
    Error(String),
}

// ─── Background task state ───────────────────────────────────────────────────

struct TaskState {
    config: WsConfig,
    channel: Channel,
    event_tx: mpsc::Sender<WsEvent>,
    cmd_rx: mpsc::Receiver<Command>,
    reconnect_attempts: u32,
    ready_state: Arc<AtomicU16>,
}

impl TaskState {
    fn emit(&self, event: WsEvent) {
        let _ = self.event_tx.try_send(event);
    }

    fn should_reconnect(&self) -> bool {
        self.config.reconnect && self.reconnect_attempts < self.config.max_reconnect_attempts
    }
}

// ─── Public WsClient ─────────────────────────────────────────────────────────

/// Stream client for one channel.
///
/// Uses a background tokio task for connection management. The public API
/// communicates with it via mpsc channels.
pub struct WsClient {
    config: WsConfig,
    channel: Channel,
    cmd_tx: Option<mpsc::Sender<Command>>,
    event_rx: tokio::sync::Mutex<mpsc::Receiver<WsEvent>>,
    event_tx: mpsc::Sender<WsEvent>,
    task_handle: Option<JoinHandle<()>>,
    ready_state: Arc<AtomicU16>,
}

impl WsClient {
    /// Create a new WS client for one channel. Does not connect yet.
    pub fn new(config: WsConfig, channel: Channel) -> Self {
        let (event_tx, event_rx) = mpsc::channel(256);
        Self {
            config,
            channel,
            cmd_tx: None,
            event_rx: tokio::sync::Mutex::new(event_rx),
            event_tx,
            task_handle: None,
            ready_state: Arc::new(AtomicU16::new(ReadyState::Closed as u16)),
        }
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Connect to the channel endpoint.
    ///
    /// Spawns a background tokio task that manages the connection and
    /// reconnection. Calling `connect` on an already-connected client is a
    /// no-op.
    pub async fn connect(&mut self) -> Result<(), WsError> {
        if self.cmd_tx.is_some() {
            return Ok(());
        }

        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        self.cmd_tx = Some(cmd_tx);
        self.ready_state
            .store(ReadyState::Connecting as u16, Ordering::SeqCst);

        let state = TaskState {
            config: self.config.clone(),
            channel: self.channel.clone(),
            event_tx: self.event_tx.clone(),
            cmd_rx,
            reconnect_attempts: 0,
            ready_state: Arc::clone(&self.ready_state),
        };

        let handle = tokio::spawn(run_task(state));
        self.task_handle = Some(handle);

        Ok(())
    }

    /// Disconnect from the channel.
    ///
    /// Sends a graceful close to the background task and waits for it to
    /// finish, so when this returns no further event for this channel can be
    /// delivered — the teardown half of the teardown-before-setup discipline
    /// when switching symbols.
    pub async fn disconnect(&mut self) -> Result<(), WsError> {
        if let Some(tx) = self.cmd_tx.take() {
            let _ = tx.send(Command::Disconnect).await;
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
        }

        self.ready_state
            .store(ReadyState::Closed as u16, Ordering::SeqCst);
        Ok(())
    }

    /// Whether the WebSocket is currently open.
    pub fn is_connected(&self) -> bool {
        self.ready_state() == ReadyState::Open
    }

    /// Current connection state.
    pub fn ready_state(&self) -> ReadyState {
        ReadyState::from(self.ready_state.load(Ordering::SeqCst))
    }

    /// Get a stream of events from the channel.
    ///
    /// The returned stream borrows `self`, so it must be dropped before
    /// calling `disconnect()`.
    pub fn events(&self) -> Pin<Box<dyn Stream<Item = WsEvent> + Send + '_>> {
        Box::pin(futures_util::stream::unfold(&self.event_rx, |rx| async move {
            let mut guard = rx.lock().await;
            guard.recv().await.map(|event| (event, rx))
        }))
    }
}

impl Drop for WsClient {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}

// ─── Background task ─────────────────────────────────────────────────────────

async fn run_task(mut state: TaskState) {
    let url = state.channel.url(&state.config.base_url);

    loop {
        // ── 1. Attempt connection ────────────────────────────────────────
        let (sink, stream) = match attempt_connect(&url).await {
            Ok(parts) => parts,
            Err(e) => {
                tracing::error!(url, "{}", e);
                state.emit(WsEvent::Error(e.to_string()));

                if state.should_reconnect() {
                    backoff_sleep(&mut state).await;
                    continue;
                }
                state.emit(WsEvent::MaxReconnectReached);
                return;
            }
        };

        // ── 2. Connected ─────────────────────────────────────────────────
        state.reconnect_attempts = 0;
        state
            .ready_state
            .store(ReadyState::Open as u16, Ordering::SeqCst);
        state.emit(WsEvent::Connected);

        // ── 3. Inner select! loop ────────────────────────────────────────
        let reason = run_connected(&mut state, sink, stream).await;

        // ── 4. Post-disconnect decision ──────────────────────────────────
        state
            .ready_state
            .store(ReadyState::Closed as u16, Ordering::SeqCst);

        match reason {
            DisconnectReason::UserRequested | DisconnectReason::NormalClose => return,
            DisconnectReason::Error(_) => {
                if state.should_reconnect() {
                    state
                        .ready_state
                        .store(ReadyState::Connecting as u16, Ordering::SeqCst);
                    backoff_sleep(&mut state).await;
                    continue;
                }
                state.emit(WsEvent::MaxReconnectReached);
                return;
            }
        }
    }
}

/// The inner connected loop — runs until the connection breaks.
async fn run_connected(
    state: &mut TaskState,
    mut sink: SplitSink<WsStream, Message>,
    mut stream: SplitStream<WsStream>,
) -> DisconnectReason {
    loop {
        tokio::select! {
            // ── a) Incoming WS message ───────────────────────────────────
            msg = stream.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let text_str: &str = text.as_ref();
                        match state.channel.parse(text_str) {
                            Ok(parsed) => state.emit(WsEvent::Message(parsed)),
                            Err(e) => {
                                tracing::warn!("WS deserialization error: {} — raw: {}", e, text_str);
                                state.emit(WsEvent::Error(format!("Deserialization error: {}", e)));
                            }
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Pong(_))) => {
                        // transport-level pong — harmless, ignore
                    }
                    Some(Ok(Message::Close(frame))) => {
                        let (code, reason) = extract_close(frame.as_ref());
                        state.emit(WsEvent::Disconnected {
                            code: Some(code),
                            reason: reason.clone(),
                        });
                        return match code {
                            1000 => DisconnectReason::NormalClose,
                            _ => DisconnectReason::Error(reason),
                        };
                    }
                    Some(Ok(_)) => {} // Binary, Frame — ignore
                    Some(Err(e)) => {
                        let reason = e.to_string();
                        tracing::error!("WebSocket error: {}", reason);
                        state.emit(WsEvent::Disconnected {
                            code: None,
                            reason: reason.clone(),
                        });
                        return DisconnectReason::Error(reason);
                    }
                    None => {
                        state.emit(WsEvent::Disconnected {
                            code: None,
                            reason: "Stream ended".into(),
                        });
                        return DisconnectReason::Error("Stream ended".into());
                    }
                }
            }

            // ── b) Command from public API ───────────────────────────────
            cmd = state.cmd_rx.recv() => {
                match cmd {
                    Some(Command::Disconnect) => {
                        let _ = sink.send(Message::Close(Some(CloseFrame {
                            code: CloseCode::Normal,
                            reason: "Client disconnect".into(),
                        }))).await;
                        return DisconnectReason::UserRequested;
                    }
                    None => {
                        // WsClient dropped — clean exit
                        return DisconnectReason::UserRequested;
                    }
                }
            }
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Attempt to establish a WebSocket connection with a 30-second timeout.
async fn attempt_connect(
    url: &str,
) -> Result<(SplitSink<WsStream, Message>, SplitStream<WsStream>), WsError> {
    let (ws_stream, _) = tokio::time::timeout(Duration::from_secs(30), connect_async(url))
        .await
        .map_err(|_| WsError::ConnectionFailed("Connection timeout".to_string()))?
        .map_err(|e| WsError::ConnectionFailed(e.to_string()))?;

    Ok(ws_stream.split())
}

/// Extract close code and reason from an optional CloseFrame.
fn extract_close(frame: Option<&CloseFrame>) -> (u16, String) {
    match frame {
        Some(f) => (f.code.into(), f.reason.to_string()),
        None => (1006, "No close frame".into()),
    }
}

// ─── Reconnection backoff ────────────────────────────────────────────────────

async fn backoff_sleep(state: &mut TaskState) {
    state.reconnect_attempts += 1;

    let exp = (state.reconnect_attempts - 1).min(10);
    let base = state
        .config
        .base_reconnect_delay_ms
        .saturating_mul(1u32 << exp);

    let jitter = rand::random::<u32>() % 500;
    let delay = base.saturating_add(jitter).min(60_000);

    tracing::info!(
        "Reconnect attempt {}/{} in {}ms",
        state.reconnect_attempts,
        state.config.max_reconnect_attempts,
        delay
    );

    tokio::time::sleep(Duration::from_millis(delay as u64)).await;
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Symbol;

    fn trades_channel() -> Channel {
        Channel::Trades {
            symbol: Symbol::from("005930"),
        }
    }

    #[test]
    fn test_ws_client_new_is_closed() {
        let client = WsClient::new(WsConfig::default(), trades_channel());
        assert!(client.cmd_tx.is_none());
        assert_eq!(client.ready_state(), ReadyState::Closed);
        assert!(!client.is_connected());
    }

    #[test]
    fn test_extract_close_with_frame() {
        let frame = CloseFrame {
            code: CloseCode::Normal,
            reason: "goodbye".into(),
        };
        let (code, reason) = extract_close(Some(&frame));
        assert_eq!(code, 1000);
        assert_eq!(reason, "goodbye");
    }

    #[test]
    fn test_extract_close_no_frame() {
        let (code, reason) = extract_close(None);
        assert_eq!(code, 1006);
        assert_eq!(reason, "No close frame");
    }

    #[test]
    fn test_ready_state_roundtrip() {
        assert_eq!(ReadyState::from(ReadyState::Open as u16), ReadyState::Open);
        assert_eq!(ReadyState::from(42), ReadyState::Closed);
    }

    #[tokio::test]
    async fn test_disconnect_when_not_connected() {
        let mut client = WsClient::new(WsConfig::default(), trades_channel());
        let result = client.disconnect().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_refused_connection_maps_to_connection_failed() {
        // port 1 is unassigned locally; the connect is refused immediately
        let result = attempt_connect("ws://127.0.0.1:1/stocks/005930").await;
        assert!(matches!(result, Err(WsError::ConnectionFailed(_))));
    }
}
