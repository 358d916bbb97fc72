//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{output, paths};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::{Config, JWT_SECRET_ENV};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    paths::ensure_parent(path)?;
    fs::write(path, CONFIG_TEMPLATE)?;

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!("2. Set {JWT_SECRET_ENV} before running `habitpet serve`"));
    output::note("3. Run: habitpet seed");
    output::note("4. Run: habitpet serve");
    Ok(())
}

/// Execute `config show`. A missing file shows the defaults.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;
    let secret_loaded = config.auth.jwt_secret.is_some();

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "file_exists": path.exists(),
            "database": config.database,
            "logging": { "level": config.logging.level, "format": config.logging.format },
            "server": { "bind": config.server.bind },
            "client": {
                "api_url": config.client.api_url,
                "timeout_secs": config.client.timeout_secs,
            },
            "auth": {
                "token_ttl_secs": config.auth.token_ttl_secs,
                "secret_loaded": secret_loaded,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !path.exists() {
        output::note("(file not found, showing defaults)");
    }
    output::field("Database", &config.database);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Server");
    output::field("Bind", &config.server.bind);

    output::section("Client");
    output::field("API", &config.client.api_url);
    output::field("Timeout", format!("{}s", config.client.timeout_secs));

    output::section("Auth");
    output::field("Token TTL", format!("{}s", config.auth.token_ttl_secs));
    if secret_loaded {
        output::success(&format!("Signing secret loaded from {JWT_SECRET_ENV}"));
    } else {
        output::warning(&format!("{JWT_SECRET_ENV} not set (required by serve)"));
    }

    Ok(())
}

/// Execute `config validate`. Unlike `show`, the file must exist.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    Config::load(path)?;
    output::success("Config file is valid");
    output::field("Next", format!("habitpet config show -c {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_config_template_is_a_valid_config() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).expect("template parses");
        config.validate().expect("template validates");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        execute_init(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "database = \"mine.db\"\n").unwrap();

        let err = execute_init(&path, false).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "config", .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "database = \"mine.db\"\n");

        execute_init(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }

    #[test]
    fn test_validate_requires_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute_validate(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
    }

    #[test]
    fn test_validate_reports_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[client]\ntimeout_secs = 0\n").unwrap();
        let err = execute_validate(&path).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }
}
