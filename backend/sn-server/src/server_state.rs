use sn_relay::NotificationGateway;

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state for the gateway's HTTP surface
#[derive(Clone)]
pub struct ServerState {
    pub gateway: NotificationGateway,
    /// Where subscribers connect; None when the broadcast server failed to start
    pub broadcast_addr: Option<SocketAddr>,
    pub metrics: Option<PrometheusHandle>,
}
