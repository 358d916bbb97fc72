use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use super::error::ApiFailure;
use crate::application::auth::TokenService;
use crate::domain::UserId;
use crate::error::Error;

/// The user a request's bearer token was issued to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    TokenService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiFailure;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| Error::Auth("missing bearer token".into()))?;

        let tokens = TokenService::from_ref(state);
        let user = tokens.verify(token.trim()).map_err(|e| {
            debug!(error = %e, "Rejected bearer token");
            e
        })?;
        Ok(AuthUser(user))
    }
}
