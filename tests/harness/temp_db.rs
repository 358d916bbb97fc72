use std::path::{Path, PathBuf};

use habitpet::adapter::outbound::sqlite::database::connection;
use habitpet::adapter::outbound::sqlite::SqliteStore;
use tempfile::TempDir;

/// Migrated SQLite database in a temporary directory.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
    store: SqliteStore,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("habitpet.db");
        let pool = connection::open(path.to_str().expect("utf-8 temp path")).expect("open sqlite");
        Self {
            _dir: dir,
            path,
            store: SqliteStore::new(pool),
        }
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Count rows of `table` with a raw query.
    pub fn count(&self, table: &str) -> i64 {
        use diesel::prelude::*;
        use diesel::sql_types::BigInt;

        #[derive(QueryableByName)]
        struct Count {
            #[diesel(sql_type = BigInt)]
            n: i64,
        }

        let mut conn = self.store.pool().get().expect("get sqlite connection");
        diesel::sql_query(format!("SELECT COUNT(*) AS n FROM {table}"))
            .get_result::<Count>(&mut conn)
            .expect("count rows")
            .n
    }
}
