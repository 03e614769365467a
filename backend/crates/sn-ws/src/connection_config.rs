use sn_config::BroadcastConfig;

use std::time::Duration;

/// Per-connection settings for subscriber sockets
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Outbound frames queued per subscriber before sends start waiting
    pub send_buffer_size: usize,
    /// Longest a broadcast waits on one subscriber's queue
    pub send_timeout: Duration,
    pub heartbeat_interval: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::from(&BroadcastConfig::default())
    }
}

impl From<&BroadcastConfig> for ConnectionConfig {
    fn from(config: &BroadcastConfig) -> Self {
        Self {
            send_buffer_size: config.send_buffer_size,
            send_timeout: config.send_timeout(),
            heartbeat_interval: config.heartbeat_interval(),
        }
    }
}
