use crate::{ConnectionConfig, ConnectionId, Metrics, Result as WsErrorResult, ShutdownGuard, WsError};

use std::fmt::Display;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use bytes::Bytes;
use futures::{Sink, SinkExt, StreamExt};
use tokio::sync::mpsc;

/// Result of handing one frame to the socket
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum WriteOutcome {
    Written,
    Failed(String),
    TimedOut,
}

/// Write one frame, giving up after `send_timeout` so a peer that stopped
/// reading cannot pin the writer forever.
pub(crate) async fn write_frame<S>(
    sink: &mut S,
    msg: Message,
    send_timeout: Duration,
) -> WriteOutcome
where
    S: Sink<Message> + Unpin,
    S::Error: Display,
{
    match tokio::time::timeout(send_timeout, sink.send(msg)).await {
        Ok(Ok(())) => WriteOutcome::Written,
        Ok(Err(e)) => WriteOutcome::Failed(e.to_string()),
        Err(_) => WriteOutcome::TimedOut,
    }
}

/// Drives one subscriber socket: a writer task drains the outbound queue
/// (plus heartbeat pings) while this side reads until the client leaves.
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    config: ConnectionConfig,
    metrics: Metrics,
}

impl WebSocketConnection {
    pub fn new(connection_id: ConnectionId, config: ConnectionConfig, metrics: Metrics) -> Self {
        Self {
            connection_id,
            config,
            metrics,
        }
    }

    /// Handle the WebSocket connection lifecycle
    pub async fn handle(
        self,
        socket: WebSocket,
        mut outbound: mpsc::Receiver<Message>,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        log::info!("Subscriber connection {} established", self.connection_id);
        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        let connection_id = self.connection_id;
        let heartbeat_interval = self.config.heartbeat_interval;
        let send_timeout = self.config.send_timeout;
        let mut send_task = tokio::spawn(async move {
            let mut heartbeat = tokio::time::interval(heartbeat_interval);
            // first tick fires immediately
            heartbeat.tick().await;

            loop {
                let (kind, msg) = tokio::select! {
                    msg = outbound.recv() => {
                        let Some(msg) = msg else { break };
                        ("Write", msg)
                    }
                    _ = heartbeat.tick() => ("Heartbeat", Message::Ping(Bytes::new())),
                };

                match write_frame(&mut ws_sender, msg, send_timeout).await {
                    WriteOutcome::Written => {}
                    WriteOutcome::Failed(e) => {
                        log::debug!("{kind} to subscriber {connection_id} failed: {e}");
                        break;
                    }
                    WriteOutcome::TimedOut => {
                        log::warn!(
                            "{kind} to subscriber {connection_id} stalled for {:?}, disconnecting",
                            send_timeout
                        );
                        break;
                    }
                }
            }

            let _ = tokio::time::timeout(send_timeout, ws_sender.close()).await;
        });

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(Message::Close(_))) | None => {
                            log::info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                        Some(Ok(msg)) => self.handle_client_message(msg),
                        Some(Err(e)) => {
                            log::warn!(
                                "WebSocket error on connection {}: {}",
                                self.connection_id,
                                e
                            );
                            break Err(WsError::connection_closed(format!("WebSocket error: {e}")));
                        }
                    }
                }

                _ = &mut send_task => {
                    log::info!("Writer for connection {} stopped", self.connection_id);
                    break Err(WsError::connection_closed("subscriber stopped accepting data"));
                }

                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    break Ok(());
                }
            }
        };

        // Dropping the receiver makes any later broadcast see this subscriber as closed
        send_task.abort();

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });

        log::info!("Subscriber connection {} closed", self.connection_id);

        result
    }

    /// Subscribers are push-only; inbound frames are logged and otherwise ignored.
    fn handle_client_message(&self, msg: Message) {
        match msg {
            Message::Text(text) => {
                log::debug!(
                    "Ignoring {} byte text frame from subscriber {}",
                    text.len(),
                    self.connection_id
                );
            }
            Message::Binary(data) => {
                log::debug!(
                    "Ignoring {} byte binary frame from subscriber {}",
                    data.len(),
                    self.connection_id
                );
            }
            Message::Ping(_) | Message::Pong(_) => {}
            Message::Close(_) => {}
        }
    }
}
