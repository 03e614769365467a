use crate::{ConfigError, ConfigErrorResult, DEFAULT_BROADCAST_HOST, DEFAULT_BROADCAST_PORT};

use std::time::Duration;

use serde::Deserialize;

// Per-subscriber send timeout constraints (milliseconds)
pub const MIN_SEND_TIMEOUT_MS: u64 = 10;
pub const MAX_SEND_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_SEND_TIMEOUT_MS: u64 = 1_000;

// Outbound queue constraints (frames per subscriber)
pub const MIN_SEND_BUFFER_SIZE: usize = 1;
pub const MAX_SEND_BUFFER_SIZE: usize = 10_000;
pub const DEFAULT_SEND_BUFFER_SIZE: usize = 64;

// Heartbeat interval constraints (seconds)
pub const MIN_HEARTBEAT_INTERVAL_SECS: u64 = 5;
pub const MAX_HEARTBEAT_INTERVAL_SECS: u64 = 300;
pub const DEFAULT_HEARTBEAT_INTERVAL_SECS: u64 = 30;

/// Settings for the subscriber-facing WebSocket listener.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    pub host: String,
    /// 0 lets the OS pick a free port
    pub port: u16,
    /// How long a single subscriber may stall a broadcast before it is dropped
    pub send_timeout_ms: u64,
    pub send_buffer_size: usize,
    pub heartbeat_interval_secs: u64,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_BROADCAST_HOST),
            port: DEFAULT_BROADCAST_PORT,
            send_timeout_ms: DEFAULT_SEND_TIMEOUT_MS,
            send_buffer_size: DEFAULT_SEND_BUFFER_SIZE,
            heartbeat_interval_secs: DEFAULT_HEARTBEAT_INTERVAL_SECS,
        }
    }
}

impl BroadcastConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::broadcast("broadcast.host must not be empty"));
        }

        if self.send_timeout_ms < MIN_SEND_TIMEOUT_MS || self.send_timeout_ms > MAX_SEND_TIMEOUT_MS
        {
            return Err(ConfigError::broadcast(format!(
                "broadcast.send_timeout_ms must be {}-{}, got {}",
                MIN_SEND_TIMEOUT_MS, MAX_SEND_TIMEOUT_MS, self.send_timeout_ms
            )));
        }

        if self.send_buffer_size < MIN_SEND_BUFFER_SIZE
            || self.send_buffer_size > MAX_SEND_BUFFER_SIZE
        {
            return Err(ConfigError::broadcast(format!(
                "broadcast.send_buffer_size must be {}-{}, got {}",
                MIN_SEND_BUFFER_SIZE, MAX_SEND_BUFFER_SIZE, self.send_buffer_size
            )));
        }

        if self.heartbeat_interval_secs < MIN_HEARTBEAT_INTERVAL_SECS
            || self.heartbeat_interval_secs > MAX_HEARTBEAT_INTERVAL_SECS
        {
            return Err(ConfigError::broadcast(format!(
                "broadcast.heartbeat_interval_secs must be {}-{}, got {}",
                MIN_HEARTBEAT_INTERVAL_SECS,
                MAX_HEARTBEAT_INTERVAL_SECS,
                self.heartbeat_interval_secs
            )));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }

    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval_secs)
    }
}
