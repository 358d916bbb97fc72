//! Handlers for `login` and `logout`, and the saved session every player
//! command authenticates with.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::adapter::inbound::cli::command::LoginArgs;
use crate::adapter::inbound::cli::{output, paths};
use crate::api::HttpPetApi;
use crate::domain::Profile;
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;

/// What `habitpet login` leaves on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    pub api_url: String,
    pub token: String,
    pub user: Profile,
}

impl SavedSession {
    /// Read a saved session.
    ///
    /// # Errors
    /// Returns [`Error::Auth`] when nobody is logged in.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::Auth(
                    "not logged in (run `habitpet login <email>`)".into(),
                ));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the session, readable by the owner only.
    pub fn save(&self, path: &Path) -> Result<()> {
        paths::ensure_parent(path)?;
        let content = serde_json::to_string_pretty(self)?;
        write_private(path, content.as_bytes())?;
        debug!(path = %path.display(), "Session saved");
        Ok(())
    }

    /// A client authenticated as the saved user.
    pub fn client(&self, config: &Config) -> Result<HttpPetApi> {
        Ok(HttpPetApi::new(&self.api_url, config.request_timeout())?.with_token(&self.token))
    }
}

#[cfg(unix)]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(content)
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    fs::write(path, content)
}

/// Load the saved session and build a client from it.
pub fn client(config: &Config) -> Result<HttpPetApi> {
    SavedSession::load(&paths::session_file())?.client(config)
}

/// Execute `login`.
pub async fn execute_login(config: &Config, args: &LoginArgs) -> Result<()> {
    let api_url = args
        .api_url
        .clone()
        .unwrap_or_else(|| config.client.api_url.clone());
    let api = HttpPetApi::new(&api_url, config.request_timeout())?;

    let pb = output::spinner(&format!("Signing in as {}", args.email));
    let session = match api.login(&args.email, &args.password).await {
        Ok(session) => session,
        Err(e) => {
            output::spinner_fail(&pb, "Login failed");
            return Err(e);
        }
    };

    let saved = SavedSession {
        api_url: api.base_url().to_string(),
        token: session.token,
        user: session.user,
    };
    let path = paths::session_file();
    saved.save(&path)?;
    output::spinner_success(&pb, &format!("Signed in as {}", saved.user.username));

    if output::is_json() {
        output::json_output(json!({
            "command": "login",
            "user": saved.user,
            "api_url": saved.api_url,
        }));
        return Ok(());
    }
    output::field("User", &saved.user.username);
    output::field("Gold", saved.user.gold);
    output::field("Gems", saved.user.gems);
    output::hint("run `habitpet inventory` to see your items");
    Ok(())
}

/// Execute `logout`.
pub fn execute_logout() -> Result<()> {
    let path = paths::session_file();
    match fs::remove_file(&path) {
        Ok(()) => output::success("Signed out"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => output::note("Not signed in"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;

    fn saved() -> SavedSession {
        SavedSession {
            api_url: "http://127.0.0.1:3000".into(),
            token: "tok".into(),
            user: Profile {
                id: UserId::new("u1"),
                email: "alice@example.com".into(),
                username: "alice".into(),
                gold: 500,
                gems: 10,
            },
        }
    }

    #[test]
    fn session_survives_a_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        saved().save(&path).unwrap();
        assert_eq!(SavedSession::load(&path).unwrap(), saved());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        saved().save(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn missing_session_means_not_logged_in() {
        let dir = tempfile::tempdir().unwrap();
        let err = SavedSession::load(&dir.path().join("session.json")).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }
}
