use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::{EntryStore, SaveOutcome};
use crate::errors::{AppError, AppResult};
use crate::utils::date::format_db;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Save `content` (trimmed, non-empty) as the entry for `date`.
    pub fn apply(pool: &mut DbPool, date: NaiveDate, content: &str) -> AppResult<SaveOutcome> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::Validation("entry content cannot be empty".into()));
        }

        let key = format_db(&date);
        let outcome = pool.save_entry(&key, content)?;

        let op = match outcome {
            SaveOutcome::Inserted => "add",
            SaveOutcome::Updated => "edit",
        };
        ttlog_quiet(pool.conn()?, op, &key, &format!("{} chars", content.chars().count()));

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn trims_and_saves() {
        let mut pool = DbPool::in_memory();
        let out = AddLogic::apply(&mut pool, d("2024-02-29"), "  friends \n").unwrap();
        assert_eq!(out, SaveOutcome::Inserted);
        let e = pool.get_entry_by_date("2024-02-29").unwrap().unwrap();
        assert_eq!(e.content, "friends");
    }

    #[test]
    fn second_add_is_an_edit() {
        let mut pool = DbPool::in_memory();
        AddLogic::apply(&mut pool, d("2024-01-01"), "a").unwrap();
        let out = AddLogic::apply(&mut pool, d("2024-01-01"), "b").unwrap();
        assert_eq!(out, SaveOutcome::Updated);
    }

    #[test]
    fn blank_content_rejected() {
        let mut pool = DbPool::in_memory();
        assert!(matches!(
            AddLogic::apply(&mut pool, d("2024-01-01"), " \n\t"),
            Err(AppError::Validation(_))
        ));
        assert!(pool.get_all_entries().unwrap().is_empty());
    }

    #[test]
    fn writes_audit_log() {
        let mut pool = DbPool::in_memory();
        AddLogic::apply(&mut pool, d("2024-01-01"), "a").unwrap();
        AddLogic::apply(&mut pool, d("2024-01-01"), "b").unwrap();
        let log = crate::db::log::load_log(pool.conn().unwrap()).unwrap();
        let ops: Vec<&str> = log.iter().map(|r| r.2.as_str()).collect();
        assert_eq!(ops, vec!["add", "edit"]);
    }
}
