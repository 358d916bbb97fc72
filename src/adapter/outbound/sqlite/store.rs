//! SQLite store: shared plumbing and account lookups.

use chrono::{DateTime, SecondsFormat, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use tracing::debug;

use super::database::connection::DbPool;
use super::database::model::UserRow;
use super::database::schema::users;
use crate::domain::{Credentials, Profile, UserId};
use crate::error::{Error, Result};
use crate::port::outbound::store::AccountStore;

pub(super) type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// SQLite-backed implementation of the account, pet, habit and seed stores.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Create a new store over a migrated connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Release the pool. Idle connections are closed when the last clone
    /// of the store goes away.
    pub fn close(self) {
        let state = self.pool.state();
        debug!(
            connections = state.connections,
            idle = state.idle_connections,
            "Closing SQLite pool"
        );
        drop(self.pool);
    }

    pub(super) fn conn(&self) -> Result<Conn> {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }
}

/// Text form of a timestamp. Nanosecond precision with a `Z` suffix keeps
/// lexical and chronological order the same.
pub(super) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(super) fn now() -> String {
    timestamp(Utc::now())
}

pub(super) fn find_user(conn: &mut SqliteConnection, user: &UserId) -> Result<Option<UserRow>> {
    Ok(users::table
        .find(user.as_str())
        .select(UserRow::as_select())
        .first(conn)
        .optional()?)
}

impl AccountStore for SqliteStore {
    async fn credentials(&self, email: &str) -> Result<Option<Credentials>> {
        let mut conn = self.conn()?;
        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(row.map(UserRow::credentials))
    }

    async fn profile(&self, user: &UserId) -> Result<Option<Profile>> {
        let mut conn = self.conn()?;
        Ok(find_user(&mut conn, user)?.map(|row| row.profile()))
    }
}
