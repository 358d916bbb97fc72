//! Listener lifecycle.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use super::router::router;
use super::state::AppState;
use crate::error::Result;
use crate::port::outbound::store::{AccountStore, HabitStore, PetStore};

/// Serve the API on `listener` until `shutdown` resolves.
///
/// # Errors
/// Returns an error if the listener fails.
pub async fn serve<S, F>(listener: TcpListener, state: AppState<S>, shutdown: F) -> Result<()>
where
    S: AccountStore + PetStore + HabitStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(addr = %addr, "REST API listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("REST API stopped");
    Ok(())
}
