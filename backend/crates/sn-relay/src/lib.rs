pub mod broadcaster;
pub mod error;
pub mod event_relay;
pub mod forward_outcome;
pub mod forwarder;
pub mod gateway;
pub mod metrics;
pub mod relay_verdict;

pub use broadcaster::{Broadcaster, NoopBroadcaster};
pub use error::{RelayError, Result};
pub use event_relay::EventRelay;
pub use forward_outcome::{ForwardOutcome, classify_status};
pub use forwarder::{Forwarder, HttpForwarder};
pub use gateway::{
    EXTENSION_TYPE, GatewayResponse, NotificationGateway, PluginRequest,
    REQUEST_NOTIFICATIONS_INTERESTED_IN, REQUEST_PLUGIN_IDENTIFIER, REQUEST_STAGE_STATUS,
    SUPPORTED_VERSIONS,
};
pub use metrics::RelayMetrics;
pub use relay_verdict::{RelayVerdict, VerdictStatus};

#[cfg(test)]
mod tests;
