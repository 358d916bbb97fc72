use axum::routing::{get, post};
use axum::Router;

use super::handler;
use super::state::AppState;
use crate::port::outbound::store::{AccountStore, HabitStore, PetStore};

/// Build the API router.
pub fn router<S>(state: AppState<S>) -> Router
where
    S: AccountStore + PetStore + HabitStore + 'static,
{
    Router::new()
        .route("/healthz", get(handler::health))
        .route("/auth/login", post(handler::login::<S>))
        .route("/user/me", get(handler::me::<S>))
        .route("/pet", get(handler::pet::<S>))
        .route("/pet/inventory", get(handler::inventory::<S>))
        .route("/pet/use", post(handler::use_item::<S>))
        .route("/pet/equip", post(handler::equip_item::<S>))
        .route("/shop/items", get(handler::shop_items::<S>))
        .route("/shop/buy", post(handler::buy::<S>))
        .route("/habits/:id/complete", post(handler::complete_habit::<S>))
        .with_state(state)
}
