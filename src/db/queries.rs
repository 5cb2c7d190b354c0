use crate::db::store::SaveOutcome;
use crate::errors::AppResult;
use crate::models::entry::GratitudeEntry;
use crate::utils::time::{now_iso, stamp_after};
use rusqlite::{Connection, OptionalExtension, Row, TransactionBehavior, params};
use uuid::Uuid;

const SELECT_ENTRY: &str =
    "SELECT id, date, content, created_at, updated_at FROM gratitude_entries";

pub fn map_row(row: &Row) -> rusqlite::Result<GratitudeEntry> {
    Ok(GratitudeEntry {
        id: row.get("id")?,
        date: row.get("date")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn load_entry_by_date(conn: &Connection, date: &str) -> AppResult<Option<GratitudeEntry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRY} WHERE date = ?1"))?;
    let entry = stmt.query_row([date], map_row).optional()?;
    Ok(entry)
}

/// Every entry, newest date first.
pub fn load_all_entries(conn: &Connection) -> AppResult<Vec<GratitudeEntry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRY} ORDER BY date DESC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Entries whose date key falls in `[from, to]`, newest first.
/// Keys compare as text, which matches calendar order for `YYYY-MM-DD`.
pub fn load_entries_between(
    conn: &Connection,
    from: &str,
    to: &str,
) -> AppResult<Vec<GratitudeEntry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_ENTRY} WHERE date >= ?1 AND date <= ?2 ORDER BY date DESC"
    ))?;
    let rows = stmt.query_map([from, to], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert or update the entry for `date`.
///
/// The lookup and the write share one IMMEDIATE transaction, so no other
/// writer can slip an insert for the same date in between.
pub fn upsert_entry(conn: &mut Connection, date: &str, content: &str) -> AppResult<SaveOutcome> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let previous: Option<String> = tx
        .query_row(
            "SELECT updated_at FROM gratitude_entries WHERE date = ?1",
            [date],
            |row| row.get(0),
        )
        .optional()?;

    let outcome = match previous {
        Some(prev_updated) => {
            tx.execute(
                "UPDATE gratitude_entries SET content = ?1, updated_at = ?2 WHERE date = ?3",
                params![content, stamp_after(&prev_updated), date],
            )?;
            SaveOutcome::Updated
        }
        None => {
            let now = now_iso();
            tx.execute(
                "INSERT INTO gratitude_entries (id, date, content, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![Uuid::new_v4().to_string(), date, content, now, now],
            )?;
            SaveOutcome::Inserted
        }
    };

    tx.commit()?;
    Ok(outcome)
}

/// Returns the number of removed rows (0 or 1).
pub fn delete_entry(conn: &Connection, date: &str) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM gratitude_entries WHERE date = ?1", [date])?;
    Ok(n)
}

/// One statement: either every row goes or none does.
pub fn delete_all_entries(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM gratitude_entries", [])?;
    Ok(n)
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM gratitude_entries", [], |row| {
        row.get(0)
    })?;
    Ok(n)
}
