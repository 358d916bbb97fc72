//! JSON bodies exchanged between the REST service and its clients.
//!
//! Field names follow the web client: camelCase, `userPetItemId` for
//! inventory rows and `itemId` for catalog entries.

use serde::{Deserialize, Serialize};

use crate::domain::{InventoryId, ItemId, Profile};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A signed-in user and the bearer token that authenticates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Profile,
}

/// Body of `POST /pet/use` and `POST /pet/equip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemActionRequest {
    pub user_pet_item_id: InventoryId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyRequest {
    pub item_id: ItemId,
}

/// Error payload of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
