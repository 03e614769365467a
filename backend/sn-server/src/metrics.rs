use crate::ServerState;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{info, warn};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder. Metrics are still recorded as
/// no-ops if this fails, so the server runs on without `/metrics`.
pub fn install_recorder() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            info!("Prometheus metrics recorder installed");
            Some(handle)
        }
        Err(e) => {
            warn!("Metrics recorder unavailable: {e}");
            None
        }
    }
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics_handler(State(state): State<ServerState>) -> Response {
    match state.metrics {
        Some(ref handle) => (StatusCode::OK, handle.render()).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder not installed").into_response(),
    }
}
