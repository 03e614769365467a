use crate::{RelayVerdict, VerdictStatus};

use serde_json::json;

#[test]
fn given_success_when_serialized_then_empty_messages() {
    let value = serde_json::to_value(RelayVerdict::success()).unwrap();

    assert_eq!(value, json!({"status": "success", "messages": []}));
}

#[test]
fn given_failure_when_serialized_then_single_message() {
    let value = serde_json::to_value(RelayVerdict::failure("boom")).unwrap();

    assert_eq!(value, json!({"status": "failure", "messages": ["boom"]}));
}

#[test]
fn given_success_when_add_failure_then_failed_with_messages_in_order() {
    let mut verdict = RelayVerdict::success();

    verdict.add_failure("first");
    verdict.add_failure("second");

    assert_eq!(verdict.status, VerdictStatus::Failure);
    assert_eq!(verdict.messages, vec!["first", "second"]);
    assert!(!verdict.is_success());
}

#[test]
fn given_host_json_when_deserialized_then_round_trips_status() {
    let verdict: RelayVerdict =
        serde_json::from_str(r#"{"status":"failure","messages":["x"]}"#).unwrap();

    assert_eq!(verdict, RelayVerdict::failure("x"));
}
