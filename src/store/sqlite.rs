//! `KvStore` backed by the `kv` table of the SQLite database.

use super::KvStore;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database at `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    /// Append a line to the internal audit log; failures only warn.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        log::ttlog_soft(&self.pool.conn, operation, target, message);
    }
}

impl KvStore for SqliteStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let mut stmt = self.pool.conn.prepare_cached(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![key, value, now])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_wholesale() {
        let mut store = SqliteStore::in_memory().unwrap();
        assert_eq!(store.get_raw("drinks").unwrap(), None);

        store.set_raw("drinks", "[1]").unwrap();
        store.set_raw("drinks", "[2]").unwrap();
        assert_eq!(store.get_raw("drinks").unwrap().as_deref(), Some("[2]"));

        let rows: i64 = store
            .pool()
            .conn
            .query_row("SELECT COUNT(*) FROM kv", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn audit_lines_land_in_log_table() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.audit("start", "bakdag", "Session started");

        let n: i64 = store
            .pool()
            .conn
            .query_row("SELECT COUNT(*) FROM log WHERE operation = 'start'", [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(n, 1);
    }
}
