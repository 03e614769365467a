use crate::RelayVerdict;

use metrics::{counter, histogram};

/// Metrics collector for relay calls
#[derive(Clone)]
pub struct RelayMetrics {
    prefix: &'static str,
}

impl RelayMetrics {
    pub fn new() -> Self {
        Self { prefix: "sn_relay" }
    }

    pub fn event_received(&self, size: usize) {
        counter!(format!("{}.events.received", self.prefix)).increment(1);
        histogram!(format!("{}.events.size_bytes", self.prefix)).record(size as f64);
    }

    pub fn verdict(&self, verdict: &RelayVerdict, duration: std::time::Duration) {
        let status = if verdict.is_success() { "success" } else { "failure" };
        counter!(format!("{}.verdicts.{}", self.prefix, status)).increment(1);
        histogram!(format!("{}.relay.latency_ms", self.prefix))
            .record(duration.as_millis() as f64);
    }

    /// `outcome` is one of accepted, rejected, unreachable, error
    pub fn forward_result(&self, outcome: &str) {
        counter!(format!("{}.forward.{}", self.prefix, outcome)).increment(1);
    }
}

impl Default for RelayMetrics {
    fn default() -> Self {
        Self::new()
    }
}
