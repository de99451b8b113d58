use skrybe_client::application::config::{Config, RateLimiterConfig};
use std::env;
use std::time::Duration;

#[test]
fn test_config_new_uses_defaults() {
    let config = Config::new("key-1");
    assert_eq!(config.credentials.api_key, "key-1");
    assert_eq!(config.rest_api.base_url, "https://dashboard.skry.be");
    assert_eq!(config.rate_limiter.min_interval_ms, 100);
}

#[test]
fn test_config_with_base_url() {
    let config = Config::with_base_url("key-1", "http://localhost:8080/");
    assert_eq!(
        config.endpoint_url("/api/lists/get-lists.php"),
        "http://localhost:8080/api/lists/get-lists.php"
    );
}

#[test]
fn test_endpoint_url_always_joins_base() {
    let config = Config::with_base_url("key-1", "http://127.0.0.1:9999");
    assert_eq!(
        config.endpoint_url("api/emails/send.php"),
        "http://127.0.0.1:9999/api/emails/send.php"
    );
    assert_eq!(
        config.endpoint_url("https://other.example.com/x"),
        "http://127.0.0.1:9999/https://other.example.com/x"
    );
}

#[test]
fn test_credentials_debug_masks_key() {
    let config = Config::new("super-secret");
    let debug = format!("{:?}", config.credentials);
    assert!(!debug.contains("super-secret"));
}

#[test]
fn test_min_interval_never_zero() {
    let config = RateLimiterConfig { min_interval_ms: 0 };
    assert_eq!(config.min_interval(), Duration::from_millis(1));
}

#[test]
fn test_config_from_env() {
    unsafe {
        env::set_var("SKRYBE_API_KEY", "env-key");
        env::set_var("SKRYBE_BASE_URL", "http://127.0.0.1:9999");
        env::set_var("SKRYBE_MIN_REQUEST_INTERVAL_MS", "250");
    }

    let config = Config::from_env();
    assert_eq!(config.credentials.api_key, "env-key");
    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:9999");
    assert_eq!(config.rate_limiter.min_interval_ms, 250);

    // a blank override falls back to the production host
    unsafe {
        env::set_var("SKRYBE_BASE_URL", "  ");
    }
    assert_eq!(Config::from_env().rest_api.base_url, "https://dashboard.skry.be");

    unsafe {
        env::remove_var("SKRYBE_BASE_URL");
    }
    assert_eq!(Config::from_env().rest_api.base_url, "https://dashboard.skry.be");

    unsafe {
        env::remove_var("SKRYBE_API_KEY");
        env::remove_var("SKRYBE_MIN_REQUEST_INTERVAL_MS");
    }
}

#[test]
fn test_config_serialization_roundtrip_keeps_settings() {
    let config = Config::with_base_url("k", "http://h").with_min_interval_ms(500);
    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
