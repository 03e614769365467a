use crate::{ConnectionConfig, Metrics, SubscriberSet};

use std::time::Duration;

use axum::extract::ws::Message;
use bytes::Bytes;
use googletest::assert_that;
use googletest::prelude::{anything, eq, none, some};
use tokio::sync::mpsc;

fn test_config(send_buffer_size: usize, send_timeout: Duration) -> ConnectionConfig {
    ConnectionConfig {
        send_buffer_size,
        send_timeout,
        heartbeat_interval: Duration::from_secs(30),
    }
}

fn test_set() -> SubscriberSet {
    SubscriberSet::new(test_config(8, Duration::from_millis(100)), Metrics::new())
}

fn text_of(message: Message) -> String {
    match message {
        Message::Text(text) => text.to_string(),
        other => panic!("expected text frame, got {other:?}"),
    }
}

#[tokio::test]
async fn given_no_subscribers_when_broadcast_then_zero_delivered() {
    let set = test_set();

    let delivered = set.broadcast(Bytes::from("event")).await;

    assert_that!(delivered, eq(0));
}

#[tokio::test]
async fn given_registered_subscribers_when_broadcast_then_each_queue_gets_payload() {
    // Given
    let set = test_set();
    let mut receivers = Vec::new();
    for _ in 0..3 {
        let (tx, rx) = mpsc::channel(8);
        set.register(tx).await;
        receivers.push(rx);
    }

    // When
    let delivered = set.broadcast(Bytes::from(r#"{"stage":"dist"}"#)).await;

    // Then
    assert_that!(delivered, eq(3));
    for rx in &mut receivers {
        let message = rx.recv().await.unwrap();
        assert_that!(text_of(message).as_str(), eq(r#"{"stage":"dist"}"#));
    }
}

#[tokio::test]
async fn given_closed_subscriber_when_broadcast_then_removed_and_others_delivered() {
    // Given
    let set = test_set();
    let (live_tx, mut live_rx) = mpsc::channel(8);
    let (dead_tx, dead_rx) = mpsc::channel(8);
    set.register(live_tx).await;
    let dead_id = set.register(dead_tx).await;
    drop(dead_rx);

    // When
    let delivered = set.broadcast(Bytes::from("e1")).await;

    // Then
    assert_that!(delivered, eq(1));
    assert_that!(set.subscriber_count().await, eq(1));
    assert_that!(set.get(dead_id).await, none());
    assert_that!(text_of(live_rx.recv().await.unwrap()).as_str(), eq("e1"));
}

#[tokio::test]
async fn given_stalled_subscriber_when_broadcast_then_dropped_after_timeout() {
    // Given - queue of one that nobody drains
    let set = SubscriberSet::new(test_config(1, Duration::from_millis(50)), Metrics::new());
    let (slow_tx, _slow_rx) = mpsc::channel(1);
    let (fast_tx, mut fast_rx) = mpsc::channel(8);
    let slow_id = set.register(slow_tx).await;
    set.register(fast_tx).await;

    // When - first fills the slow queue, second times out on it
    let first = set.broadcast(Bytes::from("e1")).await;
    let second = set.broadcast(Bytes::from("e2")).await;

    // Then
    assert_that!(first, eq(2));
    assert_that!(second, eq(1));
    assert_that!(set.get(slow_id).await, none());
    assert_that!(text_of(fast_rx.recv().await.unwrap()).as_str(), eq("e1"));
    assert_that!(text_of(fast_rx.recv().await.unwrap()).as_str(), eq("e2"));
}

#[tokio::test]
async fn given_stalled_subscriber_when_broadcast_then_call_is_bounded_by_timeout() {
    let set = SubscriberSet::new(test_config(1, Duration::from_millis(50)), Metrics::new());
    let (slow_tx, _slow_rx) = mpsc::channel(1);
    set.register(slow_tx).await;
    set.broadcast(Bytes::from("fill")).await;

    let result = tokio::time::timeout(
        Duration::from_secs(2),
        set.broadcast(Bytes::from("blocked")),
    )
    .await;

    assert_eq!(result.ok(), Some(0));
}

#[tokio::test]
async fn given_sequential_broadcasts_when_received_then_order_preserved() {
    let set = test_set();
    let (tx, mut rx) = mpsc::channel(8);
    set.register(tx).await;

    for event in ["e1", "e2", "e3"] {
        set.broadcast(Bytes::from(event)).await;
    }

    for expected in ["e1", "e2", "e3"] {
        assert_that!(text_of(rx.recv().await.unwrap()).as_str(), eq(expected));
    }
}

#[tokio::test]
async fn given_registered_connection_when_unregister_then_gone() {
    let set = test_set();
    let (tx, _rx) = mpsc::channel(8);
    let id = set.register(tx).await;
    assert_that!(set.get(id).await, some(anything()));

    assert!(set.unregister(id).await);
    assert!(!set.unregister(id).await);
    assert_that!(set.subscriber_count().await, eq(0));
}

#[tokio::test]
async fn given_clone_when_register_then_visible_through_original() {
    let set = test_set();
    let clone = set.clone();
    let (tx, _rx) = mpsc::channel(8);

    clone.register(tx).await;

    assert_that!(set.subscriber_count().await, eq(1));
}
