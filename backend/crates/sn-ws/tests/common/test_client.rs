#![allow(dead_code)]

use axum_test::{TestServer, TestWebSocket};
use bytes::Bytes;

/// WebSocket subscriber used by the tests
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    pub async fn connect(server: &TestServer) -> Self {
        Self::connect_to(server, "/").await
    }

    pub async fn connect_to(server: &TestServer, path: &str) -> Self {
        let ws = server.get_websocket(path).await.into_websocket().await;
        Self { ws }
    }

    pub async fn receive_text(&mut self) -> String {
        self.ws.receive_text().await
    }

    pub async fn receive_binary(&mut self) -> Bytes {
        self.ws.receive_bytes().await
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Connect `count` subscribers to the same server
pub async fn connect_clients(server: &TestServer, count: usize) -> Vec<WsTestClient> {
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        clients.push(WsTestClient::connect(server).await);
    }
    clients
}
