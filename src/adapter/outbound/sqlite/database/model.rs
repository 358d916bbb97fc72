//! Database model types for Diesel ORM.
//!
//! Ids and timestamps are stored as text (UUIDs and RFC 3339); enum columns
//! hold the upper-case names of the domain enums.

use diesel::prelude::*;

use super::schema::{
    challenges, dailies, daily_logs, equipped_items, group_members, group_messages, habit_logs,
    habits, pet_items, pets, rewards, social_groups, todos, user_challenges, user_pet_items,
    users,
};
use crate::domain::{
    Challenge, ChallengeId, Credentials, EquipmentSlot, EquippedId, EquippedItem, Group, GroupId,
    InventoryEntry, InventoryId, ItemId, ItemType, Pet, PetId, PetItem, PetStat, PetStats,
    Profile, UserId,
};
use crate::error::Result;

/// Database row for a user.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub gold: i32,
    pub gems: i32,
    pub created_at: String,
}

impl UserRow {
    pub fn profile(&self) -> Profile {
        Profile {
            id: UserId::new(self.id.clone()),
            email: self.email.clone(),
            username: self.username.clone(),
            gold: self.gold,
            gems: self.gems,
        }
    }

    pub fn credentials(self) -> Credentials {
        Credentials {
            user_id: UserId::new(self.id),
            password_hash: self.password_hash,
        }
    }
}

/// Database row for a pet.
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = pets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PetRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub hunger: i32,
    pub happiness: i32,
    pub energy: i32,
}

impl From<PetRow> for Pet {
    fn from(row: PetRow) -> Self {
        Pet {
            id: PetId::new(row.id),
            user_id: UserId::new(row.user_id),
            name: row.name,
            stats: PetStats {
                hunger: row.hunger,
                happiness: row.happiness,
                energy: row.energy,
            },
        }
    }
}

/// Database row for a catalog entry.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = pet_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PetItemRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub item_type: String,
    pub cost: i32,
    pub stat_effect: Option<String>,
    pub effect_value: Option<i32>,
    pub equipment_slot: Option<String>,
    pub image_url: Option<String>,
}

impl PetItemRow {
    pub fn into_domain(self) -> Result<PetItem> {
        Ok(PetItem {
            id: ItemId::new(self.id),
            name: self.name,
            description: self.description,
            item_type: ItemType::parse(&self.item_type)?,
            cost: self.cost,
            stat_effect: self.stat_effect.as_deref().map(PetStat::parse).transpose()?,
            effect_value: self.effect_value,
            equipment_slot: self
                .equipment_slot
                .as_deref()
                .map(EquipmentSlot::parse)
                .transpose()?,
            image_url: self.image_url,
        })
    }
}

/// Database row for an inventory stack.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = user_pet_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InventoryRow {
    pub id: String,
    pub user_id: String,
    pub item_id: String,
    pub quantity: i32,
    pub acquired_at: String,
}

impl InventoryRow {
    pub fn into_domain(self, item: PetItemRow) -> Result<InventoryEntry> {
        Ok(InventoryEntry {
            id: InventoryId::new(self.id),
            item: item.into_domain()?,
            quantity: self.quantity,
        })
    }
}

/// Database row for an equipment assignment.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = equipped_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EquippedRow {
    pub id: String,
    pub pet_id: String,
    pub item_id: String,
    pub slot: String,
}

impl EquippedRow {
    pub fn into_domain(self, item: PetItemRow) -> Result<EquippedItem> {
        Ok(EquippedItem {
            id: EquippedId::new(self.id),
            slot: EquipmentSlot::parse(&self.slot)?,
            item: item.into_domain()?,
        })
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = habits)]
pub struct HabitRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub difficulty: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = dailies)]
pub struct DailyRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub difficulty: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = todos)]
pub struct TodoRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub completed: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = rewards)]
pub struct RewardRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub cost: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = habit_logs)]
pub struct HabitLogRow {
    pub id: String,
    pub habit_id: String,
    pub user_id: String,
    pub completed_at: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = daily_logs)]
pub struct DailyLogRow {
    pub id: String,
    pub daily_id: String,
    pub user_id: String,
    pub completed_at: String,
    pub notes: Option<String>,
}

/// Database row for a group.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = social_groups)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GroupRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Group {
            id: GroupId::new(row.id),
            name: row.name,
            description: row.description,
        }
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = group_members)]
pub struct GroupMemberRow {
    pub id: String,
    pub group_id: String,
    pub user_id: String,
    pub role: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = group_messages)]
pub struct GroupMessageRow {
    pub id: String,
    pub group_id: String,
    pub user_id: String,
    pub content: String,
    pub sent_at: String,
}

/// Database row for a challenge.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = challenges)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ChallengeRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub goal: String,
    pub created_at: String,
}

impl From<ChallengeRow> for Challenge {
    fn from(row: ChallengeRow) -> Self {
        Challenge {
            id: ChallengeId::new(row.id),
            title: row.title,
            description: row.description,
            goal: row.goal,
        }
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = user_challenges)]
pub struct UserChallengeRow {
    pub id: String,
    pub user_id: String,
    pub challenge_id: String,
    pub joined_at: String,
}
