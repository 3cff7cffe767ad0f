//! Configuration module unit tests

use idea_evaluator::config::Settings;
use std::env;
use std::sync::Mutex;

/// Tests in this file mutate process-wide environment variables
static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARS: [&str; 8] = [
    "SERVER_HOST",
    "SERVER_PORT",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "OPENAI_TIMEOUT",
    "MAX_REQUEST_SIZE",
    "RUST_LOG",
    "LOG_FORMAT",
];

/// Clean up test environment variables
fn cleanup_test_env() {
    for var in &VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_defaults_without_environment() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_test_env();

    let settings = Settings::new().unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.openai.api_key, None);
    assert_eq!(settings.openai.base_url, "https://api.openai.com/v1");
    assert_eq!(settings.openai.timeout, None);
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.logging.format, "text");
}

#[test]
fn test_missing_api_key_does_not_fail_startup() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_test_env();
    env::set_var("OPENAI_API_KEY", "   ");

    let settings = Settings::new().unwrap();
    assert_eq!(settings.openai.api_key, None);

    cleanup_test_env();
}

#[test]
fn test_settings_from_environment() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_test_env();
    env::set_var("SERVER_HOST", "127.0.0.1");
    env::set_var("SERVER_PORT", "8080");
    env::set_var("OPENAI_API_KEY", "sk-test-key-12345678901234567890");
    env::set_var("OPENAI_BASE_URL", "http://localhost:11434/v1");
    env::set_var("OPENAI_TIMEOUT", "45");
    env::set_var("MAX_REQUEST_SIZE", "2048");
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");

    let settings = Settings::new().unwrap();

    assert_eq!(settings.bind_address(), "127.0.0.1:8080");
    assert_eq!(
        settings.openai.api_key.as_deref(),
        Some("sk-test-key-12345678901234567890")
    );
    assert_eq!(settings.openai.base_url, "http://localhost:11434/v1");
    assert_eq!(settings.openai.timeout, Some(45));
    assert_eq!(settings.request.max_request_size, 2048);
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, "json");

    cleanup_test_env();
}

#[test]
fn test_invalid_values_are_rejected() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let cases = [
        ("SERVER_PORT", "0"),
        ("SERVER_PORT", "not-a-port"),
        ("OPENAI_BASE_URL", "api.openai.com"),
        ("OPENAI_TIMEOUT", "0"),
        ("OPENAI_TIMEOUT", "soon"),
        ("MAX_REQUEST_SIZE", "0"),
        ("RUST_LOG", "verbose"),
        ("LOG_FORMAT", "yaml"),
    ];

    for (var, value) in cases {
        cleanup_test_env();
        env::set_var(var, value);

        assert!(Settings::new().is_err(), "{}={} should be rejected", var, value);
    }

    cleanup_test_env();
}
