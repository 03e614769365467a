use metrics::{counter, gauge, histogram};

/// Metrics collector for the subscriber channel
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "sn_ws" }
    }

    /// Record subscriber connected
    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    /// Record subscriber disconnected
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    /// Record one broadcast and how many subscribers took it
    pub fn broadcast_published(&self, delivered: usize, dropped: usize) {
        counter!(format!("{}.broadcast.published", self.prefix)).increment(1);
        counter!(format!("{}.broadcast.delivered", self.prefix)).increment(delivered as u64);
        counter!(format!("{}.broadcast.dropped", self.prefix)).increment(dropped as u64);
    }

    /// Record a subscriber removed because a send failed
    pub fn subscriber_dropped(&self, reason: &str) {
        counter!(format!("{}.subscribers.dropped.{}", self.prefix, reason)).increment(1);
    }

    pub fn broadcast_latency(&self, duration: std::time::Duration) {
        histogram!(format!("{}.broadcast.latency_ms", self.prefix))
            .record(duration.as_millis() as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
