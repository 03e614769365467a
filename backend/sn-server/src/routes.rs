use crate::{ServerState, gateway, health, metrics};

use axum::{
    Router,
    routing::{get, post},
};

/// Build the gateway router with all endpoints
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        // Host protocol
        .route(
            "/notifications-interested-in",
            post(gateway::notifications_interested_in),
        )
        .route("/stage-status", post(gateway::stage_status))
        .route("/plugin-identifier", get(gateway::plugin_identifier))
        .route("/requests/{name}", post(gateway::plugin_request))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/metrics", get(metrics::metrics_handler))
        .with_state(state)
}
