use axum::extract::ws::Message;
use bytes::Bytes;

/// Wrap an event payload in a single WebSocket frame.
///
/// Text frames carry the payload verbatim; anything that is not valid UTF-8
/// goes out as a binary frame so no byte is altered.
pub fn outbound_frame(payload: &Bytes) -> Message {
    match std::str::from_utf8(payload) {
        Ok(text) => Message::Text(text.into()),
        Err(_) => Message::Binary(payload.clone()),
    }
}
