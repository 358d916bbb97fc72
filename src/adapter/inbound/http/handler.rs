//! Route handlers.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::auth::AuthUser;
use super::error::ApiFailure;
use super::state::AppState;
use crate::api::types::{BuyRequest, ItemActionRequest, LoginRequest, Session};
use crate::domain::{
    DomainError, EquippedItem, HabitCompletion, HabitId, InventoryEntry, Pet, PetItem, PetView,
    Profile, Purchase,
};
use crate::error::Error;
use crate::port::outbound::store::{AccountStore, HabitStore, PetStore};

type ApiResult<T> = Result<Json<T>, ApiFailure>;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn login<S: AccountStore>(
    State(state): State<AppState<S>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Session> {
    let rejected = || ApiFailure(Error::Auth("invalid credentials".into()));

    let Some(credentials) = state.store.credentials(&req.email).await? else {
        warn!(email = %req.email, "Login for unknown email");
        return Err(rejected());
    };
    if !state.hasher.verify(&req.password, &credentials.password_hash)? {
        warn!(email = %req.email, "Login with wrong password");
        return Err(rejected());
    }

    let user = state
        .store
        .profile(&credentials.user_id)
        .await?
        .ok_or(DomainError::UnknownUser)?;
    let token = state.tokens.issue(&user.id)?;
    info!(user = %user.username, "Logged in");
    Ok(Json(Session { token, user }))
}

pub async fn me<S: AccountStore>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
) -> ApiResult<Profile> {
    let profile = state
        .store
        .profile(&user)
        .await?
        .ok_or(DomainError::UnknownUser)?;
    Ok(Json(profile))
}

pub async fn pet<S: PetStore>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
) -> ApiResult<PetView> {
    Ok(Json(state.store.pet(&user).await?))
}

pub async fn inventory<S: PetStore>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
) -> ApiResult<Vec<InventoryEntry>> {
    Ok(Json(state.store.inventory(&user).await?))
}

pub async fn use_item<S: PetStore>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
    Json(req): Json<ItemActionRequest>,
) -> ApiResult<Pet> {
    Ok(Json(state.store.use_item(&user, &req.user_pet_item_id).await?))
}

pub async fn equip_item<S: PetStore>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
    Json(req): Json<ItemActionRequest>,
) -> ApiResult<EquippedItem> {
    Ok(Json(
        state.store.equip_item(&user, &req.user_pet_item_id).await?,
    ))
}

pub async fn shop_items<S: PetStore>(
    State(state): State<AppState<S>>,
    AuthUser(_): AuthUser,
) -> ApiResult<Vec<PetItem>> {
    Ok(Json(state.store.catalog().await?))
}

pub async fn buy<S: PetStore>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
    Json(req): Json<BuyRequest>,
) -> ApiResult<Purchase> {
    Ok(Json(state.store.buy(&user, &req.item_id).await?))
}

pub async fn complete_habit<S: HabitStore>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
    Path(habit): Path<String>,
) -> ApiResult<HabitCompletion> {
    let habit = HabitId::new(habit);
    Ok(Json(
        state.store.complete_habit(&user, &habit, Utc::now()).await?,
    ))
}
