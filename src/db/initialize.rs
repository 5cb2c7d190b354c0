use crate::errors::AppResult;
use rusqlite::Connection;

/// Create every table the application needs, if missing.
/// There is no migration engine: the schema only ever grows by
/// `CREATE ... IF NOT EXISTS`.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS gratitude_entries (
            id          TEXT PRIMARY KEY NOT NULL,
            date        TEXT NOT NULL UNIQUE,
            content     TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_date ON gratitude_entries(date);

        CREATE TABLE IF NOT EXISTS settings (
            id      INTEGER PRIMARY KEY CHECK (id = 1),
            enabled INTEGER NOT NULL DEFAULT 1,
            hour    INTEGER NOT NULL DEFAULT 8,
            minute  INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS reminder_trigger (
            id            INTEGER PRIMARY KEY CHECK (id = 1),
            hour          INTEGER NOT NULL,
            minute        INTEGER NOT NULL,
            title         TEXT NOT NULL,
            body          TEXT NOT NULL,
            registered_at TEXT NOT NULL
        );

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
