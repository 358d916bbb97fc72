use std::sync::Arc;

use axum::extract::FromRef;

use crate::application::auth::{PasswordHasher, TokenService};

/// Shared handler state.
pub struct AppState<S> {
    pub store: Arc<S>,
    pub hasher: PasswordHasher,
    pub tokens: TokenService,
}

impl<S> AppState<S> {
    pub fn new(store: S, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self {
            store: Arc::new(store),
            hasher,
            tokens,
        }
    }
}

// Manual impl: `S` itself need not be Clone behind the Arc.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            hasher: self.hasher.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

impl<S> FromRef<AppState<S>> for TokenService {
    fn from_ref(state: &AppState<S>) -> Self {
        state.tokens.clone()
    }
}
