use sn_ws::SubscriberSet;

use async_trait::async_trait;
use bytes::Bytes;

/// Fan-out of one payload to live subscribers.
///
/// Delivery is best effort: implementations absorb per-subscriber failures and
/// only report how many subscribers took the payload.
#[async_trait]
pub trait Broadcaster: Send + Sync {
    async fn broadcast(&self, payload: Bytes) -> usize;

    async fn subscriber_count(&self) -> usize;
}

#[async_trait]
impl Broadcaster for SubscriberSet {
    async fn broadcast(&self, payload: Bytes) -> usize {
        SubscriberSet::broadcast(self, payload).await
    }

    async fn subscriber_count(&self) -> usize {
        SubscriberSet::subscriber_count(self).await
    }
}

/// Stands in when the subscriber listener could not be started
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBroadcaster;

#[async_trait]
impl Broadcaster for NoopBroadcaster {
    async fn broadcast(&self, _payload: Bytes) -> usize {
        0
    }

    async fn subscriber_count(&self) -> usize {
        0
    }
}
