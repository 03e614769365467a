use crate::{ConnectionConfig, ConnectionId, ConnectionInfo, Metrics, outbound_frame};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::ws::Message;
use bytes::Bytes;
use log::{debug, info, warn};
use tokio::sync::mpsc::error::SendTimeoutError;
use tokio::sync::{RwLock, mpsc};

/// The set of live subscriber connections.
///
/// Registration happens on the accept path, removal on disconnect or when a
/// broadcast cannot hand a frame to a connection. All access goes through the
/// inner lock.
pub struct SubscriberSet {
    inner: Arc<RwLock<SetInner>>,
    config: ConnectionConfig,
    metrics: Metrics,
}

struct SetInner {
    connections: HashMap<ConnectionId, ConnectionInfo>,
}

impl SubscriberSet {
    pub fn new(config: ConnectionConfig, metrics: Metrics) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SetInner {
                connections: HashMap::new(),
            })),
            config,
            metrics,
        }
    }

    /// Add a connection whose writer task drains `sender`'s channel
    pub async fn register(&self, sender: mpsc::Sender<Message>) -> ConnectionId {
        let mut inner = self.inner.write().await;

        let connection_id = ConnectionId::new();
        let info = ConnectionInfo {
            connection_id,
            connected_at: chrono::Utc::now(),
            sender,
        };

        inner.connections.insert(connection_id, info);
        info!(
            "Registered subscriber {connection_id} ({} total)",
            inner.connections.len()
        );

        connection_id
    }

    /// Remove a connection. Returns false if it was already gone.
    pub async fn unregister(&self, connection_id: ConnectionId) -> bool {
        let mut inner = self.inner.write().await;

        let removed = inner.connections.remove(&connection_id).is_some();
        if removed {
            info!(
                "Unregistered subscriber {connection_id} ({} remaining)",
                inner.connections.len()
            );
        }
        removed
    }

    /// Send `payload` to every subscriber present when the call starts.
    ///
    /// Sends run concurrently, each bounded by the configured send timeout.
    /// A subscriber whose queue is closed or stays full past the timeout is
    /// removed; nothing is reported to the caller beyond the delivered count.
    pub async fn broadcast(&self, payload: Bytes) -> usize {
        let started = Instant::now();

        let targets: Vec<(ConnectionId, mpsc::Sender<Message>)> = {
            let inner = self.inner.read().await;
            inner
                .connections
                .values()
                .map(|info| (info.connection_id, info.sender.clone()))
                .collect()
        };

        if targets.is_empty() {
            debug!("Broadcast of {} bytes had no subscribers", payload.len());
            self.metrics.broadcast_published(0, 0);
            return 0;
        }

        let frame = outbound_frame(&payload);
        let send_timeout = self.config.send_timeout;

        let sends = targets.into_iter().map(|(connection_id, sender)| {
            let frame = frame.clone();
            async move {
                let result = sender.send_timeout(frame, send_timeout).await;
                (connection_id, result)
            }
        });
        let results = futures::future::join_all(sends).await;

        let mut delivered = 0;
        let mut dead = Vec::new();
        for (connection_id, result) in results {
            match result {
                Ok(()) => delivered += 1,
                Err(SendTimeoutError::Timeout(_)) => {
                    warn!(
                        "Subscriber {connection_id} did not accept data within {:?}, dropping",
                        send_timeout
                    );
                    self.metrics.subscriber_dropped("timeout");
                    dead.push(connection_id);
                }
                Err(SendTimeoutError::Closed(_)) => {
                    debug!("Subscriber {connection_id} already closed, dropping");
                    self.metrics.subscriber_dropped("closed");
                    dead.push(connection_id);
                }
            }
        }

        if !dead.is_empty() {
            let mut inner = self.inner.write().await;
            for connection_id in &dead {
                inner.connections.remove(connection_id);
            }
            info!(
                "Dropped {} unreachable subscriber(s) ({} remaining)",
                dead.len(),
                inner.connections.len()
            );
        }

        self.metrics.broadcast_published(delivered, dead.len());
        self.metrics.broadcast_latency(started.elapsed());
        debug!(
            "Broadcast {} bytes to {delivered} subscriber(s)",
            payload.len()
        );

        delivered
    }

    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner.connections.get(&connection_id).cloned()
    }

    pub async fn subscriber_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.connections.len()
    }
}

impl Clone for SubscriberSet {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            config: self.config.clone(),
            metrics: self.metrics.clone(),
        }
    }
}
