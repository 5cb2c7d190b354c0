use crate::errors::AppResult;
use crate::models::trigger::DailyTrigger;
use crate::utils::time::now_iso;
use rusqlite::{Connection, OptionalExtension, params};

/// Store `trigger` as the one registered reminder, replacing any other.
pub fn store_trigger(conn: &Connection, trigger: &DailyTrigger) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO reminder_trigger (id, hour, minute, title, body, registered_at)
         VALUES (1, ?1, ?2, ?3, ?4, ?5)",
        params![
            trigger.hour,
            trigger.minute,
            trigger.title,
            trigger.body,
            now_iso()
        ],
    )?;
    Ok(())
}

pub fn load_trigger(conn: &Connection) -> AppResult<Option<DailyTrigger>> {
    let t = conn
        .query_row(
            "SELECT hour, minute, title, body FROM reminder_trigger WHERE id = 1",
            [],
            |row| {
                Ok(DailyTrigger {
                    hour: row.get("hour")?,
                    minute: row.get("minute")?,
                    title: row.get("title")?,
                    body: row.get("body")?,
                })
            },
        )
        .optional()?;
    Ok(t)
}

pub fn clear_triggers(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM reminder_trigger", [])?;
    Ok(())
}
