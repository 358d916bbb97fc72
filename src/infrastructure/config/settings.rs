//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with an environment variable
//! override for the token signing secret (`HABITPET_JWT_SECRET`).
//!
//! # Example
//!
//! ```no_run
//! use habitpet::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::logging::{LoggingConfig, FORMATS};
use super::service::{AuthConfig, ClientConfig, ServerConfig};
use crate::error::{ConfigError, Result};

/// Environment variable holding the token signing secret.
pub const JWT_SECRET_ENV: &str = "HABITPET_JWT_SECRET";

/// Shortest signing secret `serve` accepts.
pub const MIN_SECRET_LEN: usize = 32;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Path to SQLite database file.
    ///
    /// Defaults to "habitpet.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_database_path() -> String {
    "habitpet.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            database: default_database_path(),
            server: ServerConfig::default(),
            client: ClientConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the signing secret from the `HABITPET_JWT_SECRET` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.auth.jwt_secret = secret_from_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when an existing file is unreadable or invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.auth.jwt_secret = secret_from_env();
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        if !FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of: {}", FORMATS.join(", ")),
            }
            .into());
        }
        self.bind_addr()?;
        url::Url::parse(&self.client.api_url).map_err(|e| ConfigError::InvalidValue {
            field: "api_url",
            reason: e.to_string(),
        })?;
        if self.client.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.auth.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "token_ttl_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// The parsed server bind address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unparsable address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    field: "bind",
                    reason: e.to_string(),
                }
                .into()
            })
    }

    /// The signing secret, which `serve` cannot run without.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when `HABITPET_JWT_SECRET` is
    /// unset and [`ConfigError::InvalidValue`] when it is too short.
    pub fn require_secret(&self) -> Result<&str> {
        let secret = self
            .auth
            .jwt_secret
            .as_deref()
            .ok_or(ConfigError::MissingField {
                field: JWT_SECRET_ENV,
            })?;
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::InvalidValue {
                field: JWT_SECRET_ENV,
                reason: format!("must be at least {MIN_SECRET_LEN} bytes"),
            }
            .into());
        }
        Ok(secret)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.client.timeout_secs)
    }

    #[must_use]
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::try_from(self.auth.token_ttl_secs).unwrap_or(i64::MAX))
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn secret_from_env() -> Option<String> {
    std::env::var(JWT_SECRET_ENV)
        .ok()
        .filter(|secret| !secret.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.database, "habitpet.db");
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.client.api_url, "http://127.0.0.1:3000");
        assert_eq!(config.client.timeout_secs, 10);
        assert_eq!(config.auth.token_ttl_secs, 86_400);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn sections_override_defaults() {
        let config = parse(
            r#"
database = "/tmp/pets.db"

[logging]
level = "debug"
format = "json"

[server]
bind = "0.0.0.0:8080"

[client]
api_url = "https://pets.example.com/api"
timeout_secs = 3
"#,
        )
        .unwrap();
        assert_eq!(config.database, "/tmp/pets.db");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn secret_is_never_read_from_file() {
        let config = parse("[auth]\njwt_secret = \"in-the-file\"\n").unwrap();
        assert_eq!(config.auth.jwt_secret, None);
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = parse("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "format", .. })
        ));
    }

    #[test]
    fn rejects_bad_bind_address() {
        let err = parse("[server]\nbind = \"localhost\"\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "bind", .. })
        ));
    }

    #[test]
    fn rejects_zero_timeout_and_ttl() {
        let err = parse("[client]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "timeout_secs",
                ..
            })
        ));
        let err = parse("[auth]\ntoken_ttl_secs = 0\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "token_ttl_secs",
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_database() {
        let err = parse("database = \"  \"\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField { field: "database" })
        ));
    }

    #[test]
    fn require_secret_checks_presence_and_length() {
        let mut config = Config::default();
        assert!(matches!(
            config.require_secret(),
            Err(Error::Config(ConfigError::MissingField { .. }))
        ));

        config.auth.jwt_secret = Some("short".into());
        assert!(matches!(
            config.require_secret(),
            Err(Error::Config(ConfigError::InvalidValue { .. }))
        ));

        let secret = "x".repeat(MIN_SECRET_LEN);
        config.auth.jwt_secret = Some(secret.clone());
        assert_eq!(config.require_secret().unwrap(), secret);
    }
}
