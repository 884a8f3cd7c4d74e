//! Configuration module unit tests

use loopa_client::config::settings::{
    Settings, DEFAULT_API_URL, DEFAULT_PROVINCES_URL, MAX_TOKEN_TTL_DAYS, TOKEN_KEY,
};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const VARS: [&str; 9] = [
    "LOOPA_API_URL",
    "PROVINCES_API_URL",
    "REQUEST_TIMEOUT",
    "TOKEN_TTL_DAYS",
    "TOKEN_STORE_PATH",
    "SERVER_HOST",
    "SERVER_PORT",
    "RUST_LOG",
    "LOG_FORMAT",
];

/// Clean up test environment variables
fn cleanup_test_env() {
    for var in &VARS {
        env::remove_var(var);
    }
}

// Environment is process-wide, so every env-driven case lives in this one test
#[test]
fn test_settings_from_env() {
    cleanup_test_env();

    let settings = Settings::new().expect("defaults should load");
    assert_eq!(settings.api.base_url, DEFAULT_API_URL);
    assert_eq!(settings.api.provinces_url, DEFAULT_PROVINCES_URL);
    assert_eq!(settings.credentials.ttl_days, 7);
    assert_eq!(settings.server.port, 3000);
    assert!(settings.request_timeout().is_none());

    env::set_var("LOOPA_API_URL", "http://127.0.0.1:8000/");
    env::set_var("PROVINCES_API_URL", "http://127.0.0.1:8001/v1/");
    env::set_var("REQUEST_TIMEOUT", "15");
    env::set_var("TOKEN_TTL_DAYS", "30");
    env::set_var("TOKEN_STORE_PATH", "/var/lib/loopa/token.json");
    env::set_var("SERVER_HOST", "127.0.0.1");
    env::set_var("SERVER_PORT", "8080");
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");

    let settings = Settings::new().expect("env settings should load");
    assert_eq!(settings.api.base_url, "http://127.0.0.1:8000");
    assert_eq!(settings.api.provinces_url, "http://127.0.0.1:8001/v1");
    assert_eq!(settings.request_timeout(), Some(Duration::from_secs(15)));
    assert_eq!(settings.credentials.ttl_days, 30);
    assert_eq!(
        settings.credential_store_path(),
        PathBuf::from("/var/lib/loopa/token.json")
    );
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, "json");

    env::set_var("SERVER_PORT", "not-a-port");
    assert!(Settings::new().is_err());
    env::set_var("SERVER_PORT", "8080");

    env::set_var("TOKEN_TTL_DAYS", "0");
    assert!(Settings::new().is_err());
    env::set_var("TOKEN_TTL_DAYS", "200000000");
    assert!(Settings::new().is_err());
    env::set_var("TOKEN_TTL_DAYS", "7");

    env::set_var("LOOPA_API_URL", "ftp://example.com");
    assert!(Settings::new().is_err());

    cleanup_test_env();
}

#[test]
fn test_default_gate_rules() {
    let settings = Settings::default();
    assert_eq!(settings.gate.cookie_name, TOKEN_KEY);
    assert_eq!(settings.credentials.key, TOKEN_KEY);
    assert_eq!(settings.gate.login_path, "/auth/login");
    assert_eq!(settings.gate.home_path, "/");
    assert_eq!(
        settings.gate.excluded_prefixes,
        vec!["api", "_next/static", "_next/image", "favicon.ico"]
    );
}

#[test]
fn test_settings_validation() {
    let mut settings = Settings::default();
    settings.server.port = 0;
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.logging.level = "verbose".to_string();
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.logging.format = "xml".to_string();
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.gate.login_path = "auth/login".to_string();
    assert!(settings.validate().is_err());

    let settings = Settings::default().with_provinces_url("not-a-url");
    assert!(settings.validate().is_err());
}

#[test]
fn test_token_ttl_bounds() {
    let mut settings = Settings::default();

    settings.credentials.ttl_days = MAX_TOKEN_TTL_DAYS;
    assert!(settings.validate().is_ok());

    settings.credentials.ttl_days = MAX_TOKEN_TTL_DAYS + 1;
    assert!(settings.validate().is_err());

    settings.credentials.ttl_days = 200_000_000;
    assert!(settings.validate().is_err());
}

#[test]
fn test_default_store_path_lives_under_data_dir() {
    let path = Settings::default().credential_store_path();
    assert!(path.ends_with("loopa/credentials.json"));
}
