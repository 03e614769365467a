use crate::error::Result as ServerErrorResult;

use sn_config::{BroadcastConfig, RemoteConfig};
use sn_relay::{Broadcaster, EventRelay, HttpForwarder, NoopBroadcaster, NotificationGateway, RelayMetrics};
use sn_ws::{BroadcastServer, ConnectionConfig, Metrics, ShutdownCoordinator};

use std::sync::Arc;

use log::{error, info, warn};

/// Start the subscriber listener.
///
/// A bind failure is logged and yields None; the gateway keeps running and
/// events are still forwarded, just not broadcast.
pub async fn start_broadcast(
    config: &BroadcastConfig,
    shutdown: ShutdownCoordinator,
) -> Option<BroadcastServer> {
    let bind_addr = config.bind_addr();

    match BroadcastServer::start(
        &bind_addr,
        ConnectionConfig::from(config),
        Metrics::new(),
        shutdown,
    )
    .await
    {
        Ok(server) => Some(server),
        Err(e) => {
            error!("Broadcast server could not start: {e}");
            warn!("Running without subscribers; events will only be forwarded");
            None
        }
    }
}

/// The broadcaster the relay should use for an optionally running server
pub fn broadcaster_for(server: Option<&BroadcastServer>) -> Arc<dyn Broadcaster> {
    match server {
        Some(server) => Arc::new(server.subscribers().clone()),
        None => Arc::new(NoopBroadcaster),
    }
}

/// Wire forwarder, relay and gateway together
pub fn build_gateway(
    remote: &RemoteConfig,
    broadcaster: Arc<dyn Broadcaster>,
) -> ServerErrorResult<NotificationGateway> {
    let forwarder = HttpForwarder::from_config(remote)?;
    info!("Forwarding events to PUT {}", remote.url);

    let relay = EventRelay::new(
        broadcaster,
        Arc::new(forwarder),
        remote.url.clone(),
        RelayMetrics::new(),
    );

    Ok(NotificationGateway::new(Arc::new(relay)))
}
