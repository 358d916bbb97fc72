use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use habitpet::error::{ConfigError, Error};
use habitpet::infrastructure::config::settings::Config;
use tempfile::TempDir;

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

fn expect_invalid(toml: &str, expected_field: &str) {
    let dir = TempDir::new().expect("temp dir");
    let path = write_temp_config(&dir, toml);

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue { field, .. })) if field == expected_field => {}
        Err(err) => panic!("Expected invalid {expected_field}, got {err}"),
        Ok(config) => panic!("Expected {expected_field} to be rejected, got {config:?}"),
    }
}

#[test]
fn config_loads_every_section() {
    let toml = r#"
database = "data/pets.db"

[logging]
level = "debug"
format = "json"

[server]
bind = "0.0.0.0:8080"

[client]
api_url = "https://pets.example.com/api"
timeout_secs = 3

[auth]
token_ttl_secs = 3600
"#;
    let dir = TempDir::new().expect("temp dir");
    let config = Config::load(write_temp_config(&dir, toml)).expect("valid config");

    assert_eq!(config.database, "data/pets.db");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.bind_addr().expect("bind").port(), 8080);
    assert_eq!(config.client.api_url, "https://pets.example.com/api");
    assert_eq!(config.request_timeout(), Duration::from_secs(3));
    assert_eq!(config.token_ttl(), chrono::Duration::hours(1));
}

#[test]
fn partial_config_keeps_defaults_for_the_rest() {
    let dir = TempDir::new().expect("temp dir");
    let config =
        Config::load(write_temp_config(&dir, "database = \"other.db\"\n")).expect("valid config");

    let defaults = Config::default();
    assert_eq!(config.database, "other.db");
    assert_eq!(config.server, defaults.server);
    assert_eq!(config.client, defaults.client);
    assert_eq!(config.logging, defaults.logging);
}

#[test]
fn config_rejects_unknown_log_format() {
    expect_invalid("[logging]\nformat = \"xml\"\n", "format");
}

#[test]
fn config_rejects_unparsable_bind_address() {
    expect_invalid("[server]\nbind = \"localhost\"\n", "bind");
}

#[test]
fn config_rejects_relative_api_url() {
    expect_invalid("[client]\napi_url = \"/api\"\n", "api_url");
}

#[test]
fn config_rejects_zero_timeouts() {
    expect_invalid("[client]\ntimeout_secs = 0\n", "timeout_secs");
    expect_invalid("[auth]\ntoken_ttl_secs = 0\n", "token_ttl_secs");
}

#[test]
fn config_rejects_empty_database_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_temp_config(&dir, "database = \"  \"\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::MissingField { field: "database" }))
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_temp_config(&dir, "[server\nbind = 1");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn missing_file_falls_back_only_when_asked() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.toml");

    let mut loaded = Config::load_or_default(&path).expect("defaults");
    loaded.auth.jwt_secret = None;
    assert_eq!(loaded, Config::default());
    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}
