use crate::{ForwardOutcome, RelayError, Result as RelayResult, classify_status};

use sn_config::RemoteConfig;

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;

/// Upper bound on establishing the TCP connection, independent of the request timeout
const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// One best-effort push of an event to a remote receiver
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// PUT `payload` to `url`. No retry.
    async fn forward(&self, payload: Bytes, url: &str) -> RelayResult<()>;
}

/// Forwarder over HTTP
pub struct HttpForwarder {
    client: ReqwestClient,
}

impl HttpForwarder {
    /// Build a forwarder whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> RelayResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(MAX_CONNECT_TIMEOUT))
            .build()
            .map_err(RelayError::client_build)?;

        Ok(Self { client })
    }

    pub fn from_config(config: &RemoteConfig) -> RelayResult<Self> {
        Self::new(config.timeout())
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    async fn forward(&self, payload: Bytes, url: &str) -> RelayResult<()> {
        let size = payload.len();

        let response = self
            .client
            .put(url)
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                warn!("PUT {url} failed: {e}");
                RelayError::remote_unreachable(url, &e)
            })?;

        let status = response.status().as_u16();
        match classify_status(status) {
            ForwardOutcome::Accepted => {
                debug!("PUT {url} ({size} bytes) accepted with {status}");
                Ok(())
            }
            ForwardOutcome::Rejected(code) => {
                warn!("PUT {url} rejected with {code}");
                Err(RelayError::remote_rejected(code))
            }
        }
    }
}
