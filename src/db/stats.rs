use crate::db::pool::DbPool;
use crate::db::queries::count_entries;
use crate::errors::AppResult;
use crate::utils::colors::{self, CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool) -> AppResult<()> {
    let db_path = pool.path().to_string();
    let conn = pool.conn()?;

    let (cyan, green, grey, yellow, reset) = (
        colors::code(CYAN),
        colors::code(GREEN),
        colors::code(GREY),
        colors::code(YELLOW),
        colors::code(RESET),
    );

    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", cyan, reset, yellow, db_path, reset);
    println!("{}• Size:{} {:.1} KB", cyan, reset, file_kb);

    //
    // 2) TOTAL ENTRIES
    //
    let count = count_entries(conn)?;
    println!(
        "{}• Total entries:{} {}{}{}",
        cyan, reset, green, count, reset
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = conn
        .query_row(
            "SELECT date FROM gratitude_entries ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = conn
        .query_row(
            "SELECT date FROM gratitude_entries ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date
        .clone()
        .unwrap_or_else(|| format!("{grey}--{reset}"));
    let fmt_last = last_date
        .clone()
        .unwrap_or_else(|| format!("{grey}--{reset}"));

    println!("{}• Date range:{}", cyan, reset);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) COVERAGE: share of days in the range that have an entry
    //
    if let (Some(f), Some(l)) = (first_date, last_date)
        && let (Ok(d1), Ok(d2)) = (
            NaiveDate::parse_from_str(&f, "%Y-%m-%d"),
            NaiveDate::parse_from_str(&l, "%Y-%m-%d"),
        )
    {
        let days = (d2 - d1).num_days() + 1;
        let pct = count as f64 * 100.0 / days.max(1) as f64;
        println!("{}• Days journaled:{} {:.1}%", cyan, reset, pct.min(100.0));
    }

    println!();
    Ok(())
}
