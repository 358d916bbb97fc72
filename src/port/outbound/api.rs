//! REST API port used by the client-side pages.

use async_trait::async_trait;

use crate::domain::{
    EquippedItem, InventoryEntry, InventoryId, ItemId, Pet, PetItem, PetView, Profile, Purchase,
};
use crate::error::Result;

/// The habit-pet REST API, authenticated as one user.
///
/// A failed call surfaces as [`Error::Api`](crate::error::Error::Api) carrying
/// the HTTP status and the server's message, when it sent one.
#[async_trait]
pub trait PetApi: Send + Sync {
    /// `GET /user/me`
    async fn profile(&self) -> Result<Profile>;

    /// `GET /pet`
    async fn pet(&self) -> Result<PetView>;

    /// `GET /pet/inventory`
    async fn inventory(&self) -> Result<Vec<InventoryEntry>>;

    /// `POST /pet/use`
    async fn use_item(&self, entry: &InventoryId) -> Result<Pet>;

    /// `POST /pet/equip`
    async fn equip_item(&self, entry: &InventoryId) -> Result<EquippedItem>;

    /// `GET /shop/items`
    async fn catalog(&self) -> Result<Vec<PetItem>>;

    /// `POST /shop/buy`
    async fn buy(&self, item: &ItemId) -> Result<Purchase>;
}
