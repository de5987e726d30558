use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column named `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the key/value table holding the persisted records.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Early databases stored records without a modification stamp.
fn migrate_add_updated_at(conn: &Connection) -> Result<()> {
    let version = "20250601_0001_kv_updated_at";

    if is_applied(conn, version)? {
        return Ok(());
    }

    if !has_column(conn, "kv", "updated_at")? {
        conn.execute(
            "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
            [],
        )?;
        success(format!(
            "Migration applied: {version} → added 'updated_at' to kv table"
        ));
    }

    mark_applied(conn, version, "kv records carry updated_at")
}

/// The source app kept a dark-mode flag next to its records; it has no
/// meaning for the terminal and is dropped.
fn migrate_drop_dark_mode(conn: &Connection) -> Result<()> {
    let version = "20250601_0002_drop_dark_mode";

    if is_applied(conn, version)? {
        return Ok(());
    }

    let removed = conn.execute("DELETE FROM kv WHERE key = 'darkMode'", [])?;
    if removed > 0 {
        success(format!("Migration applied: {version} → removed darkMode record"));
    }

    mark_applied(conn, version, "darkMode record removed")
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "kv")? {
        create_kv_table(conn)?;
    }

    migrate_add_updated_at(conn)?;
    migrate_drop_dark_mode(conn)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(applied, 2);
        assert!(has_column(&conn, "kv", "updated_at").unwrap());
    }

    #[test]
    fn upgrades_legacy_kv_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE kv (key TEXT PRIMARY KEY, value TEXT NOT NULL);
             INSERT INTO kv (key, value) VALUES ('darkMode', 'true');
             INSERT INTO kv (key, value) VALUES ('drinks', '[]');",
        )
        .unwrap();

        run_pending_migrations(&conn).unwrap();

        assert!(has_column(&conn, "kv", "updated_at").unwrap());
        let keys: i64 = conn
            .query_row("SELECT COUNT(*) FROM kv", [], |r| r.get(0))
            .unwrap();
        assert_eq!(keys, 1);
    }
}
