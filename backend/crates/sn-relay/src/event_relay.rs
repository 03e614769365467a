use crate::{Broadcaster, Forwarder, RelayError, RelayMetrics, RelayVerdict};

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use futures::FutureExt;
use log::{debug, error, info, warn};

/// Relays one stage-status event to subscribers and the remote receiver.
///
/// Holds no per-event state; one instance serves every call for the life of
/// the process.
pub struct EventRelay {
    broadcaster: Arc<dyn Broadcaster>,
    forwarder: Arc<dyn Forwarder>,
    remote_url: String,
    metrics: RelayMetrics,
}

impl EventRelay {
    pub fn new(
        broadcaster: Arc<dyn Broadcaster>,
        forwarder: Arc<dyn Forwarder>,
        remote_url: impl Into<String>,
        metrics: RelayMetrics,
    ) -> Self {
        Self {
            broadcaster,
            forwarder,
            remote_url: remote_url.into(),
            metrics,
        }
    }

    pub fn remote_url(&self) -> &str {
        &self.remote_url
    }

    pub async fn subscriber_count(&self) -> usize {
        self.broadcaster.subscriber_count().await
    }

    /// Broadcast `event` and forward it, producing exactly one verdict.
    ///
    /// Subscriber delivery never affects the verdict. A forward failure
    /// becomes the verdict's single message. Panics in either step are caught
    /// here and reported as failures, so this never unwinds into the caller.
    pub async fn relay(&self, event: Bytes) -> RelayVerdict {
        let started = Instant::now();
        self.metrics.event_received(event.len());
        debug!("Relaying {} byte stage-status event", event.len());

        // The two steps are independent, so they run side by side
        let broadcast = AssertUnwindSafe(self.broadcaster.broadcast(event.clone())).catch_unwind();
        let forward = AssertUnwindSafe(self.forwarder.forward(event, &self.remote_url)).catch_unwind();
        let (broadcast_result, forward_result) = tokio::join!(broadcast, forward);

        let mut verdict = RelayVerdict::success();

        match broadcast_result {
            Ok(delivered) => debug!("Event delivered to {delivered} subscriber(s)"),
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!("Broadcast panicked: {message}");
                verdict.add_failure(format!("Internal error while broadcasting: {message}"));
            }
        }

        match forward_result {
            Ok(Ok(())) => {
                self.metrics.forward_result("accepted");
                debug!("Event accepted by {}", self.remote_url);
            }
            Ok(Err(e)) => {
                self.metrics.forward_result(match e {
                    RelayError::RemoteRejected { .. } => "rejected",
                    RelayError::RemoteUnreachable { .. } => "unreachable",
                    RelayError::ClientBuild { .. } => "error",
                });
                warn!("Failed to notify remote service: {e}");
                verdict.add_failure(e.verdict_message());
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!("Forward panicked: {message}");
                self.metrics.forward_result("error");
                verdict.add_failure(format!("Internal error while forwarding: {message}"));
            }
        }

        let elapsed = started.elapsed();
        self.metrics.verdict(&verdict, elapsed);
        info!(
            "Relay finished in {:?}: {:?} {:?}",
            elapsed, verdict.status, verdict.messages
        );

        verdict
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("unknown panic")
    }
}
