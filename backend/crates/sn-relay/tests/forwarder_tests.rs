//! Integration tests for the HTTP forwarder using wiremock mock server

use sn_relay::{Forwarder, HttpForwarder, RelayError};

use std::time::Duration;

use bytes::Bytes;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string, method, path},
};

const EVENT: &str = r#"{"pipeline":{"name":"build-linux","counter":"42","stage":{"name":"test","state":"Passed","result":"Passed"}}}"#;

fn forwarder() -> HttpForwarder {
    HttpForwarder::new(Duration::from_secs(2)).unwrap()
}

/// A local address with nothing listening on it
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/ci-receiver")
}

#[tokio::test]
async fn test_forward_puts_body_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/ci-receiver"))
        .and(body_string(EVENT))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/ci-receiver", mock_server.uri());
    let result = forwarder().forward(Bytes::from_static(EVENT.as_bytes()), &url).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_forward_accepts_any_2xx() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let result = forwarder()
        .forward(Bytes::from_static(b"{}"), &mock_server.uri())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_forward_rejects_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = forwarder()
        .forward(Bytes::from_static(b"{}"), &mock_server.uri())
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::RemoteRejected { status: 503, .. }));
    assert!(err.verdict_message().contains("503"));
}

#[tokio::test]
async fn test_forward_rejects_redirect_without_following() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(300))
        .mount(&mock_server)
        .await;

    let err = forwarder()
        .forward(Bytes::from_static(b"{}"), &mock_server.uri())
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::RemoteRejected { status: 300, .. }));
}

#[tokio::test]
async fn test_forward_does_not_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = forwarder()
        .forward(Bytes::from_static(b"{}"), &mock_server.uri())
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_forward_connection_refused_is_unreachable() {
    let url = closed_port_url();

    let err = forwarder()
        .forward(Bytes::from_static(b"{}"), &url)
        .await
        .unwrap_err();

    match err {
        RelayError::RemoteUnreachable { url: reported, .. } => assert_eq!(reported, url),
        other => panic!("expected unreachable, got {other}"),
    }
}

#[tokio::test]
async fn test_forward_slow_remote_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let forwarder = HttpForwarder::new(Duration::from_millis(200)).unwrap();
    let err = forwarder
        .forward(Bytes::from_static(b"{}"), &mock_server.uri())
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::RemoteUnreachable { .. }));
}

#[tokio::test]
async fn test_forward_malformed_url_is_unreachable() {
    let err = forwarder()
        .forward(Bytes::from_static(b"{}"), "not a url")
        .await
        .unwrap_err();

    assert!(err.verdict_message().contains("not a url"));
}
