//! Persistence ports for accounts, pets and seed data.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::{
    Challenge, ChallengeId, Credentials, DailyId, EquipmentSlot, EquippedItem, Group, GroupId,
    GroupMessage, HabitCompletion, HabitId, InventoryEntry, InventoryId, ItemId, NewAccount,
    NewChallenge, NewPetItem, Pet, PetId, PetItem, PetView, Profile, Purchase, UserGroupRole,
    UserId,
};
use crate::error::Result;

/// A row that was looked up by its unique key and inserted if absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upserted<T> {
    pub value: T,
    /// True when this call inserted the row.
    pub created: bool,
}

impl<T> Upserted<T> {
    pub fn created(value: T) -> Self {
        Self {
            value,
            created: true,
        }
    }

    pub fn existing(value: T) -> Self {
        Self {
            value,
            created: false,
        }
    }
}

/// Lookups behind login and the profile header.
pub trait AccountStore: Send + Sync {
    /// Login material for the account registered under `email`.
    fn credentials(&self, email: &str) -> impl Future<Output = Result<Option<Credentials>>> + Send;

    /// Public profile (wallet included) of a user.
    fn profile(&self, user: &UserId) -> impl Future<Output = Result<Option<Profile>>> + Send;
}

/// Pet, inventory and shop operations for one user.
///
/// Mutations are atomic: either every row they touch changes or none does.
pub trait PetStore: Send + Sync {
    /// The user's pet with its equipped items.
    fn pet(&self, user: &UserId) -> impl Future<Output = Result<PetView>> + Send;

    /// The user's inventory rows, oldest first.
    fn inventory(&self, user: &UserId) -> impl Future<Output = Result<Vec<InventoryEntry>>> + Send;

    /// Consume one unit of an inventory row on the user's pet.
    fn use_item(
        &self,
        user: &UserId,
        entry: &InventoryId,
    ) -> impl Future<Output = Result<Pet>> + Send;

    /// Put the customization item of an inventory row on the user's pet,
    /// replacing whatever occupied its slot.
    fn equip_item(
        &self,
        user: &UserId,
        entry: &InventoryId,
    ) -> impl Future<Output = Result<EquippedItem>> + Send;

    /// Add `quantity` units of a catalog item to the user's inventory.
    fn grant_item(
        &self,
        user: &UserId,
        item: &ItemId,
        quantity: i32,
    ) -> impl Future<Output = Result<InventoryEntry>> + Send;

    /// The whole catalog, cheapest first.
    fn catalog(&self) -> impl Future<Output = Result<Vec<PetItem>>> + Send;

    /// Buy one unit of a catalog item with gold.
    fn buy(&self, user: &UserId, item: &ItemId) -> impl Future<Output = Result<Purchase>> + Send;
}

/// Task completion.
pub trait HabitStore: Send + Sync {
    /// Log a completion of one of the user's habits and pay out its gold.
    fn complete_habit(
        &self,
        user: &UserId,
        habit: &HabitId,
        at: DateTime<Utc>,
    ) -> impl Future<Output = Result<HabitCompletion>> + Send;
}

/// Idempotent writes used to populate a fresh database.
pub trait SeedStore: Send + Sync {
    /// Insert a catalog entry unless one with the same name exists.
    fn upsert_item(&self, item: &NewPetItem) -> impl Future<Output = Result<Upserted<PetItem>>> + Send;

    /// Insert a challenge unless one with the same title exists.
    fn find_or_create_challenge(
        &self,
        challenge: &NewChallenge,
    ) -> impl Future<Output = Result<Upserted<Challenge>>> + Send;

    /// Open an account (user, pet and starting tasks) unless the email is
    /// already registered. Existing accounts are returned unchanged.
    fn upsert_account(
        &self,
        account: &NewAccount,
    ) -> impl Future<Output = Result<Upserted<Profile>>> + Send;

    fn record_habit_log(
        &self,
        user: &UserId,
        habit: &HabitId,
        at: DateTime<Utc>,
    ) -> impl Future<Output = Result<()>> + Send;

    fn record_daily_log(
        &self,
        user: &UserId,
        daily: &DailyId,
        at: DateTime<Utc>,
        notes: Option<&str>,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Assign `item` to `slot` on a pet, replacing the slot's occupant.
    fn equip_on_pet(
        &self,
        pet: &PetId,
        item: &ItemId,
        slot: EquipmentSlot,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Create a group owned by `owner` unless the name is taken. The owner
    /// membership is ensured either way.
    fn upsert_group(
        &self,
        name: &str,
        description: &str,
        owner: &UserId,
    ) -> impl Future<Output = Result<Upserted<Group>>> + Send;

    /// Add a member. Returns false when they already belonged.
    fn join_group(
        &self,
        group: &GroupId,
        user: &UserId,
        role: UserGroupRole,
    ) -> impl Future<Output = Result<bool>> + Send;

    fn post_messages(
        &self,
        group: &GroupId,
        messages: &[GroupMessage],
    ) -> impl Future<Output = Result<usize>> + Send;

    /// Enrol a user. Returns false when they had already joined.
    fn join_challenge(
        &self,
        challenge: &ChallengeId,
        user: &UserId,
    ) -> impl Future<Output = Result<bool>> + Send;
}
