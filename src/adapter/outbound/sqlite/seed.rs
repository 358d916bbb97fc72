//! Find-or-create writes backing `habitpet seed`.

use chrono::{DateTime, Duration, Utc};
use diesel::prelude::*;

use super::database::model::{
    ChallengeRow, DailyLogRow, DailyRow, GroupMemberRow, GroupMessageRow, GroupRow, HabitRow,
    PetItemRow, PetRow, RewardRow, TodoRow, UserChallengeRow, UserRow,
};
use super::database::schema::{
    challenges, dailies, daily_logs, group_members, group_messages, habits, pet_items, pets,
    rewards, social_groups, todos, user_challenges, users,
};
use super::habit::insert_habit_log;
use super::pet::put_in_slot;
use super::store::{now, timestamp, SqliteStore};
use crate::domain::{
    Challenge, ChallengeId, DailyId, EquipmentSlot, Group, GroupId, GroupMessage, HabitId, ItemId,
    NewAccount, NewChallenge, NewPetItem, PetId, PetItem, PetStats, Profile, UserGroupRole,
    UserId,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::{SeedStore, Upserted};

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn insert_tasks(conn: &mut SqliteConnection, user: &str, account: &NewAccount) -> Result<()> {
    let plan = &account.tasks;

    let habit_rows: Vec<HabitRow> = plan
        .habits
        .iter()
        .map(|h| HabitRow {
            id: h.id.to_string(),
            user_id: user.to_string(),
            title: h.title.clone(),
            difficulty: h.difficulty.as_str().to_string(),
        })
        .collect();
    if !habit_rows.is_empty() {
        diesel::insert_into(habits::table)
            .values(&habit_rows)
            .execute(conn)?;
    }

    let daily_rows: Vec<DailyRow> = plan
        .dailies
        .iter()
        .map(|d| DailyRow {
            id: d.id.to_string(),
            user_id: user.to_string(),
            title: d.title.clone(),
            difficulty: d.difficulty.as_str().to_string(),
        })
        .collect();
    if !daily_rows.is_empty() {
        diesel::insert_into(dailies::table)
            .values(&daily_rows)
            .execute(conn)?;
    }

    let todo_rows: Vec<TodoRow> = plan
        .todos
        .iter()
        .map(|t| TodoRow {
            id: new_id(),
            user_id: user.to_string(),
            title: t.title.clone(),
            completed: i32::from(t.completed),
        })
        .collect();
    if !todo_rows.is_empty() {
        diesel::insert_into(todos::table)
            .values(&todo_rows)
            .execute(conn)?;
    }

    let reward_rows: Vec<RewardRow> = plan
        .rewards
        .iter()
        .map(|r| RewardRow {
            id: new_id(),
            user_id: user.to_string(),
            title: r.title.clone(),
            cost: r.cost,
        })
        .collect();
    if !reward_rows.is_empty() {
        diesel::insert_into(rewards::table)
            .values(&reward_rows)
            .execute(conn)?;
    }

    Ok(())
}

impl SeedStore for SqliteStore {
    async fn upsert_item(&self, item: &NewPetItem) -> Result<Upserted<PetItem>> {
        let mut conn = self.conn()?;
        let existing: Option<PetItemRow> = pet_items::table
            .filter(pet_items::name.eq(&item.name))
            .select(PetItemRow::as_select())
            .first(&mut conn)
            .optional()?;
        if let Some(row) = existing {
            return Ok(Upserted::existing(row.into_domain()?));
        }

        let row = PetItemRow {
            id: ItemId::generate().into_inner(),
            name: item.name.clone(),
            description: item.description.clone(),
            item_type: item.item_type.as_str().to_string(),
            cost: item.cost,
            stat_effect: item.stat_effect.map(|s| s.as_str().to_string()),
            effect_value: item.effect_value,
            equipment_slot: item.equipment_slot.map(|s| s.as_str().to_string()),
            image_url: item.image_url.clone(),
        };
        diesel::insert_into(pet_items::table)
            .values(&row)
            .execute(&mut conn)?;
        Ok(Upserted::created(row.into_domain()?))
    }

    async fn find_or_create_challenge(
        &self,
        challenge: &NewChallenge,
    ) -> Result<Upserted<Challenge>> {
        let mut conn = self.conn()?;
        let existing: Option<ChallengeRow> = challenges::table
            .filter(challenges::title.eq(&challenge.title))
            .select(ChallengeRow::as_select())
            .first(&mut conn)
            .optional()?;
        if let Some(row) = existing {
            return Ok(Upserted::existing(row.into()));
        }

        let row = ChallengeRow {
            id: ChallengeId::generate().into_inner(),
            title: challenge.title.clone(),
            description: challenge.description.clone(),
            goal: challenge.goal.clone(),
            created_at: now(),
        };
        diesel::insert_into(challenges::table)
            .values(&row)
            .execute(&mut conn)?;
        Ok(Upserted::created(row.into()))
    }

    async fn upsert_account(&self, account: &NewAccount) -> Result<Upserted<Profile>> {
        let mut conn = self.conn()?;
        conn.immediate_transaction::<_, Error, _>(|conn| {
            let existing: Option<UserRow> = users::table
                .filter(users::email.eq(&account.email))
                .select(UserRow::as_select())
                .first(conn)
                .optional()?;
            if let Some(row) = existing {
                return Ok(Upserted::existing(row.profile()));
            }

            let user = UserRow {
                id: UserId::generate().into_inner(),
                email: account.email.clone(),
                username: account.username.clone(),
                password_hash: account.password_hash.clone(),
                gold: account.gold,
                gems: account.gems,
                created_at: now(),
            };
            diesel::insert_into(users::table)
                .values(&user)
                .execute(conn)?;

            let stats = PetStats::default();
            let pet = PetRow {
                id: PetId::generate().into_inner(),
                user_id: user.id.clone(),
                name: account.pet_name.clone(),
                hunger: stats.hunger,
                happiness: stats.happiness,
                energy: stats.energy,
            };
            diesel::insert_into(pets::table).values(&pet).execute(conn)?;

            insert_tasks(conn, &user.id, account)?;
            Ok(Upserted::created(user.profile()))
        })
    }

    async fn record_habit_log(
        &self,
        user: &UserId,
        habit: &HabitId,
        at: DateTime<Utc>,
    ) -> Result<()> {
        let mut conn = self.conn()?;
        insert_habit_log(&mut conn, user, habit, at)
    }

    async fn record_daily_log(
        &self,
        user: &UserId,
        daily: &DailyId,
        at: DateTime<Utc>,
        notes: Option<&str>,
    ) -> Result<()> {
        let mut conn = self.conn()?;
        let row = DailyLogRow {
            id: new_id(),
            daily_id: daily.to_string(),
            user_id: user.to_string(),
            completed_at: timestamp(at),
            notes: notes.map(str::to_string),
        };
        diesel::insert_into(daily_logs::table)
            .values(&row)
            .execute(&mut conn)?;
        Ok(())
    }

    async fn equip_on_pet(&self, pet: &PetId, item: &ItemId, slot: EquipmentSlot) -> Result<()> {
        let mut conn = self.conn()?;
        put_in_slot(&mut conn, pet, item, slot)?;
        Ok(())
    }

    async fn upsert_group(
        &self,
        name: &str,
        description: &str,
        owner: &UserId,
    ) -> Result<Upserted<Group>> {
        let mut conn = self.conn()?;
        conn.immediate_transaction::<_, Error, _>(|conn| {
            let existing: Option<GroupRow> = social_groups::table
                .filter(social_groups::name.eq(name))
                .select(GroupRow::as_select())
                .first(conn)
                .optional()?;

            let (row, created) = match existing {
                Some(row) => (row, false),
                None => {
                    let row = GroupRow {
                        id: GroupId::generate().into_inner(),
                        name: name.to_string(),
                        description: description.to_string(),
                        created_at: now(),
                    };
                    diesel::insert_into(social_groups::table)
                        .values(&row)
                        .execute(conn)?;
                    (row, true)
                }
            };

            let owner_row = GroupMemberRow {
                id: new_id(),
                group_id: row.id.clone(),
                user_id: owner.to_string(),
                role: UserGroupRole::Owner.as_str().to_string(),
            };
            diesel::insert_or_ignore_into(group_members::table)
                .values(&owner_row)
                .execute(conn)?;

            Ok(Upserted {
                value: row.into(),
                created,
            })
        })
    }

    async fn join_group(&self, group: &GroupId, user: &UserId, role: UserGroupRole) -> Result<bool> {
        let mut conn = self.conn()?;
        let row = GroupMemberRow {
            id: new_id(),
            group_id: group.to_string(),
            user_id: user.to_string(),
            role: role.as_str().to_string(),
        };
        let inserted = diesel::insert_or_ignore_into(group_members::table)
            .values(&row)
            .execute(&mut conn)?;
        Ok(inserted > 0)
    }

    async fn post_messages(&self, group: &GroupId, messages: &[GroupMessage]) -> Result<usize> {
        if messages.is_empty() {
            return Ok(0);
        }
        let mut conn = self.conn()?;
        let start = Utc::now();
        let rows: Vec<GroupMessageRow> = messages
            .iter()
            .zip(0_i64..)
            .map(|(message, offset)| GroupMessageRow {
                id: new_id(),
                group_id: group.to_string(),
                user_id: message.user_id.to_string(),
                content: message.content.clone(),
                // Keep posting order even when the clock does not advance.
                sent_at: timestamp(start + Duration::microseconds(offset)),
            })
            .collect();
        Ok(diesel::insert_into(group_messages::table)
            .values(&rows)
            .execute(&mut conn)?)
    }

    async fn join_challenge(&self, challenge: &ChallengeId, user: &UserId) -> Result<bool> {
        let mut conn = self.conn()?;
        let row = UserChallengeRow {
            id: new_id(),
            user_id: user.to_string(),
            challenge_id: challenge.to_string(),
            joined_at: now(),
        };
        let inserted = diesel::insert_or_ignore_into(user_challenges::table)
            .values(&row)
            .execute(&mut conn)?;
        Ok(inserted > 0)
    }
}
