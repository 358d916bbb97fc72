//! Path utilities for habitpet.
//!
//! All local state lives under `~/.habitpet/` (or `$HABITPET_HOME`):
//! - `~/.habitpet/config.toml` - main configuration
//! - `~/.habitpet/session.json` - token saved by `habitpet login`

use std::path::{Path, PathBuf};

/// Environment variable that relocates the habitpet home directory.
pub const HOME_ENV: &str = "HABITPET_HOME";

/// Returns the habitpet home directory (`~/.habitpet/`).
pub fn home_dir() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(home);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".habitpet")
}

/// Returns the default config file path (`~/.habitpet/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the saved session path (`~/.habitpet/session.json`).
pub fn session_file() -> PathBuf {
    home_dir().join("session.json")
}

/// Ensures the directory holding `path` exists.
pub fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_habitpet_home() {
        let home = home_dir();
        assert!(default_config().starts_with(&home));
        assert!(session_file().starts_with(&home));
    }

    #[test]
    fn ensure_parent_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a").join("b").join("pets.db");
        ensure_parent(&file).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
    }

    #[test]
    fn ensure_parent_accepts_bare_file_names() {
        ensure_parent(Path::new("habitpet.db")).unwrap();
    }
}
