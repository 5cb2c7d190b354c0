//! Store interfaces used by the codec and the reminder scheduler.
//!
//! `DbPool` is the SQLite implementation; every method opens the database
//! on first use, so callers never sequence an explicit setup step.

use crate::db::pool::DbPool;
use crate::db::{queries, settings};
use crate::errors::AppResult;
use crate::models::entry::GratitudeEntry;
use crate::models::settings::NotificationSettings;

/// What a save did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted,
    Updated,
}

/// Journal entries keyed by their `YYYY-MM-DD` date.
pub trait EntryStore {
    /// Exact match on the date key.
    fn get_entry_by_date(&mut self, date: &str) -> AppResult<Option<GratitudeEntry>>;

    /// Every entry, ordered by date descending.
    fn get_all_entries(&mut self) -> AppResult<Vec<GratitudeEntry>>;

    /// Upsert keyed on `date`. An update keeps `id` and `created_at` and
    /// moves `updated_at` forward; an insert stamps both timestamps.
    fn save_entry(&mut self, date: &str, content: &str) -> AppResult<SaveOutcome>;

    /// Remove the entry for `date`; absent dates are not an error.
    fn delete_entry(&mut self, date: &str) -> AppResult<()>;

    /// Remove every entry. Irreversible.
    fn delete_all_entries(&mut self) -> AppResult<()>;
}

/// The singleton reminder settings record.
pub trait SettingsStore {
    /// Current settings; the default row is written on first read.
    fn get_notification_settings(&mut self) -> AppResult<NotificationSettings>;

    /// Replace the settings wholesale. No range validation.
    fn save_notification_settings(&mut self, enabled: bool, hour: i32, minute: i32)
    -> AppResult<()>;
}

impl EntryStore for DbPool {
    fn get_entry_by_date(&mut self, date: &str) -> AppResult<Option<GratitudeEntry>> {
        queries::load_entry_by_date(self.conn()?, date)
    }

    fn get_all_entries(&mut self) -> AppResult<Vec<GratitudeEntry>> {
        queries::load_all_entries(self.conn()?)
    }

    fn save_entry(&mut self, date: &str, content: &str) -> AppResult<SaveOutcome> {
        queries::upsert_entry(self.conn()?, date, content)
    }

    fn delete_entry(&mut self, date: &str) -> AppResult<()> {
        queries::delete_entry(self.conn()?, date).map(|_| ())
    }

    fn delete_all_entries(&mut self) -> AppResult<()> {
        queries::delete_all_entries(self.conn()?).map(|_| ())
    }
}

impl SettingsStore for DbPool {
    fn get_notification_settings(&mut self) -> AppResult<NotificationSettings> {
        settings::load_or_create_settings(self.conn()?)
    }

    fn save_notification_settings(
        &mut self,
        enabled: bool,
        hour: i32,
        minute: i32,
    ) -> AppResult<()> {
        settings::save_settings(self.conn()?, enabled, hour, minute)
    }
}
