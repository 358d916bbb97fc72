//! Pet, inventory and shop persistence.

use diesel::prelude::*;
use tracing::{debug, info};

use super::database::model::{EquippedRow, InventoryRow, PetItemRow, PetRow};
use super::database::schema::{equipped_items, pet_items, pets, user_pet_items, users};
use super::store::{find_user, now, SqliteStore};
use crate::domain::{
    DomainError, EquipmentSlot, EquippedId, EquippedItem, InventoryEntry, InventoryId, ItemId,
    Pet, PetId, PetItem, PetView, Purchase, UserId,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::PetStore;

fn find_pet(conn: &mut SqliteConnection, user: &UserId) -> Result<PetRow> {
    pets::table
        .filter(pets::user_id.eq(user.as_str()))
        .select(PetRow::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| DomainError::MissingPet.into())
}

/// An inventory row together with its catalog entry, if the row belongs to
/// `user`.
fn owned_entry(
    conn: &mut SqliteConnection,
    user: &UserId,
    entry: &InventoryId,
) -> Result<(InventoryRow, PetItemRow)> {
    user_pet_items::table
        .inner_join(pet_items::table)
        .filter(user_pet_items::id.eq(entry.as_str()))
        .filter(user_pet_items::user_id.eq(user.as_str()))
        .select((InventoryRow::as_select(), PetItemRow::as_select()))
        .first(conn)
        .optional()?
        .ok_or_else(|| DomainError::NotInInventory.into())
}

fn find_item(conn: &mut SqliteConnection, item: &ItemId) -> Result<PetItemRow> {
    pet_items::table
        .find(item.as_str())
        .select(PetItemRow::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| DomainError::UnknownItem(item.to_string()).into())
}

fn write_stats(conn: &mut SqliteConnection, pet: &Pet) -> Result<()> {
    diesel::update(pets::table.find(pet.id.as_str()))
        .set((
            pets::hunger.eq(pet.stats.hunger),
            pets::happiness.eq(pet.stats.happiness),
            pets::energy.eq(pet.stats.energy),
        ))
        .execute(conn)?;
    Ok(())
}

/// Add `quantity` units of `item` to the user's stack, creating the stack
/// when the user has none.
pub(super) fn add_to_inventory(
    conn: &mut SqliteConnection,
    user: &UserId,
    item: PetItemRow,
    quantity: i32,
) -> Result<InventoryEntry> {
    if quantity <= 0 {
        return Err(DomainError::NonPositiveQuantity(quantity).into());
    }

    let existing: Option<InventoryRow> = user_pet_items::table
        .filter(user_pet_items::user_id.eq(user.as_str()))
        .filter(user_pet_items::item_id.eq(&item.id))
        .select(InventoryRow::as_select())
        .first(conn)
        .optional()?;

    let row = match existing {
        Some(mut row) => {
            row.quantity += quantity;
            diesel::update(user_pet_items::table.find(&row.id))
                .set(user_pet_items::quantity.eq(row.quantity))
                .execute(conn)?;
            row
        }
        None => {
            let row = InventoryRow {
                id: InventoryId::generate().into_inner(),
                user_id: user.to_string(),
                item_id: item.id.clone(),
                quantity,
                acquired_at: now(),
            };
            diesel::insert_into(user_pet_items::table)
                .values(&row)
                .execute(conn)?;
            row
        }
    };

    row.into_domain(item)
}

/// Put `item` in `slot` on `pet`. The unique `(pet_id, slot)` key makes the
/// REPLACE evict whatever was there.
pub(super) fn put_in_slot(
    conn: &mut SqliteConnection,
    pet: &PetId,
    item: &ItemId,
    slot: EquipmentSlot,
) -> Result<EquippedRow> {
    let row = EquippedRow {
        id: EquippedId::generate().into_inner(),
        pet_id: pet.to_string(),
        item_id: item.to_string(),
        slot: slot.as_str().to_string(),
    };
    diesel::replace_into(equipped_items::table)
        .values(&row)
        .execute(conn)?;
    Ok(row)
}

impl PetStore for SqliteStore {
    async fn pet(&self, user: &UserId) -> Result<PetView> {
        let mut conn = self.conn()?;
        let pet: Pet = find_pet(&mut conn, user)?.into();

        let worn: Vec<(EquippedRow, PetItemRow)> = equipped_items::table
            .inner_join(pet_items::table)
            .filter(equipped_items::pet_id.eq(pet.id.as_str()))
            .order(equipped_items::slot.asc())
            .select((EquippedRow::as_select(), PetItemRow::as_select()))
            .load(&mut conn)?;

        let equipped = worn
            .into_iter()
            .map(|(row, item)| row.into_domain(item))
            .collect::<Result<Vec<_>>>()?;

        Ok(PetView { pet, equipped })
    }

    async fn inventory(&self, user: &UserId) -> Result<Vec<InventoryEntry>> {
        let mut conn = self.conn()?;
        let rows: Vec<(InventoryRow, PetItemRow)> = user_pet_items::table
            .inner_join(pet_items::table)
            .filter(user_pet_items::user_id.eq(user.as_str()))
            .order((user_pet_items::acquired_at.asc(), user_pet_items::id.asc()))
            .select((InventoryRow::as_select(), PetItemRow::as_select()))
            .load(&mut conn)?;

        debug!(user = %user, rows = rows.len(), "Loaded inventory");
        rows.into_iter()
            .map(|(row, item)| row.into_domain(item))
            .collect()
    }

    async fn use_item(&self, user: &UserId, entry: &InventoryId) -> Result<Pet> {
        let mut conn = self.conn()?;
        let pet = conn.immediate_transaction::<_, Error, _>(|conn| {
            let (row, item_row) = owned_entry(conn, user, entry)?;
            let item = item_row.into_domain()?;
            if !item.is_consumable() {
                return Err(DomainError::NotUsable.into());
            }

            let mut pet: Pet = find_pet(conn, user)?.into();
            pet.feed(&item);
            write_stats(conn, &pet)?;

            if row.quantity > 1 {
                diesel::update(user_pet_items::table.find(&row.id))
                    .set(user_pet_items::quantity.eq(row.quantity - 1))
                    .execute(conn)?;
            } else {
                diesel::delete(user_pet_items::table.find(&row.id)).execute(conn)?;
            }
            Ok(pet)
        })?;

        info!(user = %user, entry = %entry, "Item used");
        Ok(pet)
    }

    async fn equip_item(&self, user: &UserId, entry: &InventoryId) -> Result<EquippedItem> {
        let mut conn = self.conn()?;
        let equipped = conn.immediate_transaction::<_, Error, _>(|conn| {
            let (_, item_row) = owned_entry(conn, user, entry)?;
            let item: PetItem = item_row.clone().into_domain()?;
            let slot = item.equip_slot().ok_or(DomainError::NotEquippable)?;

            let pet = find_pet(conn, user)?;
            let row = put_in_slot(conn, &PetId::new(pet.id), &item.id, slot)?;
            row.into_domain(item_row)
        })?;

        info!(user = %user, entry = %entry, slot = %equipped.slot, "Item equipped");
        Ok(equipped)
    }

    async fn grant_item(
        &self,
        user: &UserId,
        item: &ItemId,
        quantity: i32,
    ) -> Result<InventoryEntry> {
        let mut conn = self.conn()?;
        conn.immediate_transaction::<_, Error, _>(|conn| {
            let item_row = find_item(conn, item)?;
            add_to_inventory(conn, user, item_row, quantity)
        })
    }

    async fn catalog(&self) -> Result<Vec<PetItem>> {
        let mut conn = self.conn()?;
        let rows: Vec<PetItemRow> = pet_items::table
            .order((pet_items::cost.asc(), pet_items::name.asc()))
            .select(PetItemRow::as_select())
            .load(&mut conn)?;
        rows.into_iter().map(PetItemRow::into_domain).collect()
    }

    async fn buy(&self, user: &UserId, item: &ItemId) -> Result<Purchase> {
        let mut conn = self.conn()?;
        let purchase = conn.immediate_transaction::<_, Error, _>(|conn| {
            let mut profile = find_user(conn, user)?
                .ok_or(DomainError::UnknownUser)?
                .profile();
            let item_row = find_item(conn, item)?;
            profile.charge(&item_row.clone().into_domain()?)?;

            diesel::update(users::table.find(user.as_str()))
                .set(users::gold.eq(profile.gold))
                .execute(conn)?;
            let entry = add_to_inventory(conn, user, item_row, 1)?;
            Ok(Purchase {
                entry,
                gold: profile.gold,
            })
        })?;

        info!(user = %user, item = %purchase.entry.item.name, gold = purchase.gold, "Item bought");
        Ok(purchase)
    }
}
