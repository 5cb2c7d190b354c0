use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Storage/key format of entry dates.
pub const DB_DATE_FORMAT: &str = "%Y-%m-%d";
/// Long display form, e.g. "Monday, January 1, 2024".
pub const DISPLAY_DATE_FORMAT: &str = "%A, %B %-d, %Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn format_db(d: &NaiveDate) -> String {
    d.format(DB_DATE_FORMAT).to_string()
}

pub fn format_display(d: &NaiveDate) -> String {
    d.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Display form of a stored date key; keys that are not real calendar
/// dates (imports only check syntax) are shown verbatim.
pub fn display_from_db(s: &str) -> String {
    match parse_date(s) {
        Some(d) => format_display(&d),
        None => s.to_string(),
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DB_DATE_FORMAT).ok()
}

/// Syntactic check only: `dddd-dd-dd`. `2024-13-01` passes, `2024-1-1` does not.
pub fn is_db_date_syntax(s: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("static date regex"))
        .is_match(s)
}

pub fn first_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1).and_then(|d| d.pred_opt())
}

/// First and last day covered by a single period token:
/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
pub fn bounds_from_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&format!("{p}-01"), DB_DATE_FORMAT)
        && let Some(last) = last_day_of_month(dm.year(), dm.month())
    {
        return Ok((dm, last));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

/// Resolve `P` or `START:END` into inclusive date bounds.
pub fn resolve_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((start, end)) = p.split_once(':') {
        let (from, _) = bounds_from_period(start)?;
        let (_, to) = bounds_from_period(end)?;
        if from > to {
            return Err(format!("Invalid period: {} is after {}", start, end));
        }
        return Ok((from, to));
    }
    bounds_from_period(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn syntax_check_is_width_only() {
        assert!(is_db_date_syntax("2024-01-01"));
        assert!(is_db_date_syntax("2024-13-01"));
        assert!(is_db_date_syntax("2024-02-31"));
        assert!(!is_db_date_syntax("2024-1-1"));
        assert!(!is_db_date_syntax("2024-01-01 "));
        assert!(!is_db_date_syntax("24-01-01"));
        assert!(!is_db_date_syntax("२०२४-01-01"));
    }

    #[test]
    fn display_format() {
        assert_eq!(display_from_db("2024-01-01"), "Monday, January 1, 2024");
        assert_eq!(display_from_db("2024-13-01"), "2024-13-01");
    }

    #[test]
    fn month_edges() {
        assert_eq!(last_day_of_month(2024, 2), Some(d("2024-02-29")));
        assert_eq!(last_day_of_month(2023, 12), Some(d("2023-12-31")));
        assert_eq!(first_day_of_month(2023, 13), None);
    }

    #[test]
    fn periods() {
        assert_eq!(
            resolve_period("2025-06").unwrap(),
            (d("2025-06-01"), d("2025-06-30"))
        );
        assert_eq!(
            resolve_period("2024").unwrap(),
            (d("2024-01-01"), d("2024-12-31"))
        );
        assert_eq!(
            resolve_period("2024-09:2025-09").unwrap(),
            (d("2024-09-01"), d("2025-09-30"))
        );
        assert_eq!(
            resolve_period("2025-06-18").unwrap(),
            (d("2025-06-18"), d("2025-06-18"))
        );
        assert!(resolve_period("2025:2024").is_err());
        assert!(resolve_period("june").is_err());
    }
}
