pub mod add;
pub mod calendar;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod notify;
pub mod remind;
pub mod show;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// A stored date key and its long display label.
pub(crate) struct DayKey {
    pub key: String,
    pub label: String,
}

/// Parse an optional `YYYY-MM-DD` argument; missing means today.
/// Unlike CSV import, the CLI only accepts real calendar dates.
pub(crate) fn date_or_today(arg: Option<&str>) -> AppResult<NaiveDate> {
    match arg {
        None => Ok(date::today()),
        Some("today") => Ok(date::today()),
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

/// Like [`date_or_today`] but for existing entries: any `dddd-dd-dd` key is
/// accepted, since an import may have stored one that is not a real date.
pub(crate) fn entry_key_or_today(arg: Option<&str>) -> AppResult<DayKey> {
    let key = match arg {
        None | Some("today") => date::format_db(&date::today()),
        Some(s) if date::is_db_date_syntax(s) => s.to_string(),
        Some(s) => return Err(AppError::InvalidDate(s.to_string())),
    };
    let label = date::display_from_db(&key);
    Ok(DayKey { key, label })
}
