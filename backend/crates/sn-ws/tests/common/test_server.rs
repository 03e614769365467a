#![allow(dead_code)]

use sn_ws::{AppState, ConnectionConfig, Metrics, ShutdownCoordinator, SubscriberSet, build_router};

use std::time::Duration;

use axum_test::TestServer;

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(ConnectionConfig::default())
}

/// Create a TestServer with custom connection configuration
pub fn create_test_server_with_config(config: ConnectionConfig) -> TestServerWithState {
    let metrics = Metrics::new();
    let app_state = AppState {
        subscribers: SubscriberSet::new(config.clone(), metrics.clone()),
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config,
    };

    let server = TestServer::builder()
        .http_transport()
        .build(build_router(app_state.clone()))
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

/// Registration happens after the handshake completes, so poll until the
/// set reaches the expected size.
pub async fn wait_for_subscribers(subscribers: &SubscriberSet, expected: usize) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while subscribers.subscriber_count().await != expected {
        if tokio::time::Instant::now() > deadline {
            panic!(
                "expected {expected} subscribers, have {}",
                subscribers.subscriber_count().await
            );
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
