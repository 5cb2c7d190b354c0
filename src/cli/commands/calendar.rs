use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_between;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{self, GREEN, RESET};
use crate::utils::date::{self, first_day_of_month, format_db, last_day_of_month};
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let first = match month {
            Some(m) => NaiveDate::parse_from_str(&format!("{m}-01"), date::DB_DATE_FORMAT)
                .map_err(|_| AppError::InvalidDate(m.clone()))?,
            None => {
                let t = date::today();
                first_day_of_month(t.year(), t.month())
                    .ok_or_else(|| AppError::InvalidDate(format_db(&t)))?
            }
        };
        let last = last_day_of_month(first.year(), first.month())
            .ok_or_else(|| AppError::InvalidDate(format_db(&first)))?;

        let mut pool = DbPool::new(&cfg.database);
        let entries = load_entries_between(pool.conn()?, &format_db(&first), &format_db(&last))?;
        let marked: HashSet<u32> = entries
            .iter()
            .filter_map(|e| date::parse_date(&e.date))
            .map(|d| d.day())
            .collect();

        print!("{}", render_month(first, &marked, colors::enabled()));
        println!("{} of {} days journaled", marked.len(), last.day());
    }
    Ok(())
}

/// Month grid, Monday first. Marked days are wrapped in `[..]`.
pub fn render_month(first: NaiveDate, marked: &HashSet<u32>, color: bool) -> String {
    let mut out = format!("{:^28}\n", first.format("%B %Y").to_string());
    out.push_str(" Mo  Tu  We  Th  Fr  Sa  Su\n");

    let offset = first.weekday().num_days_from_monday() as usize;
    out.push_str(&"    ".repeat(offset));

    let days = last_day_of_month(first.year(), first.month())
        .map(|d| d.day())
        .unwrap_or(28);

    let mut col = offset;
    for day in 1..=days {
        let cell = if marked.contains(&day) {
            if color {
                format!("{GREEN}[{day:>2}]{RESET}")
            } else {
                format!("[{day:>2}]")
            }
        } else {
            format!(" {day:>2} ")
        };
        out.push_str(&cell);
        col += 1;
        if col % 7 == 0 {
            out.push('\n');
        }
    }
    if col % 7 != 0 {
        out.push('\n');
    }
    out
}
