//! Habit completion persistence.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tracing::info;

use super::database::model::HabitLogRow;
use super::database::schema::{habit_logs, habits, users};
use super::store::{timestamp, SqliteStore};
use crate::domain::{Difficulty, DomainError, HabitCompletion, HabitId, UserId};
use crate::error::{Error, Result};
use crate::port::outbound::store::HabitStore;

pub(super) fn insert_habit_log(
    conn: &mut SqliteConnection,
    user: &UserId,
    habit: &HabitId,
    at: DateTime<Utc>,
) -> Result<()> {
    let row = HabitLogRow {
        id: uuid::Uuid::new_v4().to_string(),
        habit_id: habit.to_string(),
        user_id: user.to_string(),
        completed_at: timestamp(at),
    };
    diesel::insert_into(habit_logs::table)
        .values(&row)
        .execute(conn)?;
    Ok(())
}

impl HabitStore for SqliteStore {
    async fn complete_habit(
        &self,
        user: &UserId,
        habit: &HabitId,
        at: DateTime<Utc>,
    ) -> Result<HabitCompletion> {
        let mut conn = self.conn()?;
        let completion = conn.immediate_transaction::<_, Error, _>(|conn| {
            let difficulty: String = habits::table
                .filter(habits::id.eq(habit.as_str()))
                .filter(habits::user_id.eq(user.as_str()))
                .select(habits::difficulty)
                .first(conn)
                .optional()?
                .ok_or(DomainError::UnknownHabit)?;
            let reward = Difficulty::parse(&difficulty)?.gold_reward();

            insert_habit_log(conn, user, habit, at)?;
            diesel::update(users::table.find(user.as_str()))
                .set(users::gold.eq(users::gold + reward))
                .execute(conn)?;
            let gold: i32 = users::table
                .find(user.as_str())
                .select(users::gold)
                .first(conn)?;

            Ok(HabitCompletion {
                habit_id: habit.clone(),
                gold_awarded: reward,
                gold,
            })
        })?;

        info!(user = %user, habit = %habit, gold = completion.gold, "Habit completed");
        Ok(completion)
    }
}
