use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::api::types::ErrorBody;
use crate::domain::DomainError;
use crate::error::Error;

/// Handler error: maps [`Error`] to a status and a `{ "message" }` body.
#[derive(Debug)]
pub struct ApiFailure(pub Error);

impl<E: Into<Error>> From<E> for ApiFailure {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl ApiFailure {
    fn status(&self) -> StatusCode {
        match &self.0 {
            Error::Domain(domain) => match domain {
                DomainError::NotInInventory
                | DomainError::UnknownItem(_)
                | DomainError::UnknownHabit
                | DomainError::UnknownUser
                | DomainError::MissingPet => StatusCode::NOT_FOUND,
                DomainError::NotUsable
                | DomainError::NotEquippable
                | DomainError::InsufficientGold { .. }
                | DomainError::NonPositiveQuantity(_)
                | DomainError::UnknownVariant { .. } => StatusCode::BAD_REQUEST,
            },
            Error::Auth(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match (&self.0, status) {
            (Error::Domain(domain), _) => domain.to_string(),
            (_, StatusCode::UNAUTHORIZED) => "Unauthorized".to_string(),
            _ => {
                error!(error = %self.0, "Request failed");
                "Internal server error".to_string()
            }
        };
        (status, Json(ErrorBody::new(message))).into_response()
    }
}
