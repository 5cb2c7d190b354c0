use crate::errors::AppResult;
use crate::models::settings::NotificationSettings;
use rusqlite::{Connection, params};

/// Read the settings row, creating the default one on first access.
///
/// `INSERT OR IGNORE` makes the creation a no-op once the row exists,
/// so repeated reads never touch the stored values.
pub fn load_or_create_settings(conn: &Connection) -> AppResult<NotificationSettings> {
    let d = NotificationSettings::default();
    conn.execute(
        "INSERT OR IGNORE INTO settings (id, enabled, hour, minute) VALUES (1, ?1, ?2, ?3)",
        params![d.enabled as i32, d.hour, d.minute],
    )?;

    let settings = conn.query_row(
        "SELECT enabled, hour, minute FROM settings WHERE id = 1",
        [],
        |row| {
            Ok(NotificationSettings {
                enabled: row.get::<_, i32>("enabled")? == 1,
                hour: row.get("hour")?,
                minute: row.get("minute")?,
            })
        },
    )?;
    Ok(settings)
}

/// Replace the singleton row. Values are stored as given.
pub fn save_settings(conn: &Connection, enabled: bool, hour: i32, minute: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (id, enabled, hour, minute) VALUES (1, ?1, ?2, ?3)",
        params![if enabled { 1 } else { 0 }, hour, minute],
    )?;
    Ok(())
}
