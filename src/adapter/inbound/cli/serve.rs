//! Handler for the `serve` command.

use tokio::net::TcpListener;
use tracing::info;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::{output, paths};
use crate::adapter::inbound::http::{self, AppState};
use crate::adapter::outbound::sqlite::database::connection;
use crate::adapter::outbound::sqlite::SqliteStore;
use crate::application::auth::{PasswordHasher, TokenService};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `serve`: run the REST API until Ctrl-C.
pub async fn execute(config: &Config, args: &ServeArgs) -> Result<()> {
    let secret = config.require_secret()?;
    let bind = match args.bind {
        Some(addr) => addr,
        None => config.bind_addr()?,
    };
    let database = args
        .database
        .clone()
        .unwrap_or_else(|| config.database.clone().into());

    paths::ensure_parent(&database)?;
    let pool = connection::open(&database.to_string_lossy())?;
    let state = AppState::new(
        SqliteStore::new(pool),
        PasswordHasher::new()?,
        TokenService::new(secret, config.token_ttl()),
    );

    let listener = TcpListener::bind(bind).await?;
    let addr = listener.local_addr()?;
    output::success("REST API ready");
    output::field("Listening", format!("http://{addr}"));
    output::field("Database", database.display());
    output::hint("press Ctrl-C to stop");

    http::serve(listener, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
