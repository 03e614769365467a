use crate::ServerState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Component status for operators
pub async fn health(State(state): State<ServerState>) -> Response {
    let relay = state.gateway.relay();
    let subscribers = relay.subscriber_count().await;

    let (status, broadcast) = match state.broadcast_addr {
        Some(addr) => (
            "healthy",
            json!({ "status": "listening", "address": addr.to_string() }),
        ),
        None => ("degraded", json!({ "status": "unavailable" })),
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "broadcast": broadcast,
            "subscribers": subscribers,
            "remote_url": relay.remote_url(),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}
