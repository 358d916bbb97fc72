//! REST service (`habitpet serve`).
//!
//! An axum router over the store ports. Every route except login and the
//! health check requires a bearer token issued by `POST /auth/login`.

mod auth;
mod error;
mod handler;
mod router;
mod server;
mod state;

pub use auth::AuthUser;
pub use error::ApiFailure;
pub use router::router;
pub use server::serve;
pub use state::AppState;
