//! Service configuration for the HTTP server, the API client and tokens.

use serde::Deserialize;

/// Where `habitpet serve` listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address, e.g. `127.0.0.1:3000`.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".into(),
        }
    }
}

/// How the terminal front end reaches the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the REST API.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:3000".into(),
            timeout_secs: 10,
        }
    }
}

/// Session token settings.
/// The signing secret is loaded from `HABITPET_JWT_SECRET` at runtime (never from config file).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Token lifetime in seconds (default: one day).
    pub token_ttl_secs: u64,
    #[serde(skip)]
    pub jwt_secret: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_secs: 86_400,
            jwt_secret: None,
        }
    }
}
