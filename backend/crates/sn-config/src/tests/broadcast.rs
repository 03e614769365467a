use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_send_timeout_below_minimum_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("SN_BROADCAST_SEND_TIMEOUT_MS", "5");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_send_timeout_at_minimum_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("SN_BROADCAST_SEND_TIMEOUT_MS", "10");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_zero_send_buffer_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _buffer = EnvGuard::set("SN_BROADCAST_SEND_BUFFER_SIZE", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_heartbeat_over_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _heartbeat = EnvGuard::set("SN_BROADCAST_HEARTBEAT_INTERVAL_SECS", "301");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("SN_BROADCAST_PORT", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_default_config_when_durations_then_match_fields() {
    let config = crate::BroadcastConfig::default();

    assert_that!(config.send_timeout(), eq(Duration::from_millis(1000)));
    assert_that!(config.heartbeat_interval(), eq(Duration::from_secs(30)));
    assert_that!(config.bind_addr().as_str(), eq("0.0.0.0:8887"));
}
