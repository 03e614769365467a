use crate::logger::{initialize_from_config, resolve_log_file};

use sn_config::{Config, LoggingConfig};

use tempfile::TempDir;

#[test]
fn given_no_file_when_resolved_then_stdout() {
    let temp = TempDir::new().unwrap();
    let logging = LoggingConfig::default();

    let path = resolve_log_file(&logging, temp.path()).unwrap();

    assert!(path.is_none());
    assert!(!temp.path().join(&logging.dir).exists());
}

#[test]
fn given_file_when_resolved_then_dir_created_under_config_dir() {
    let temp = TempDir::new().unwrap();
    let logging = LoggingConfig {
        file: Some("sn-server.log".to_string()),
        dir: "logs".to_string(),
        ..LoggingConfig::default()
    };

    let path = resolve_log_file(&logging, temp.path()).unwrap();

    assert_eq!(path, Some(temp.path().join("logs").join("sn-server.log")));
    assert!(temp.path().join("logs").is_dir());
}

// Installs the global logger, so it is the only test in this binary that may
// initialize logging.
#[test]
fn given_missing_config_file_when_logging_initialized_then_warning_reaches_log_file() {
    // Given
    let config_dir = TempDir::new().unwrap();
    let mut config = Config::load_from(config_dir.path()).unwrap();
    config.logging.file = Some("sn-server.log".to_string());
    config.logging.colored = false;

    // When
    initialize_from_config(&config, config_dir.path()).unwrap();
    log::logger().flush();

    // Then
    let log_path = config_dir.path().join(&config.logging.dir).join("sn-server.log");
    let contents = std::fs::read_to_string(log_path).unwrap();
    assert!(contents.contains("Logger initialized"));
    assert!(
        contents.contains("was not found"),
        "missing config file was not logged: {contents}"
    );
}
