use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_between;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::GratitudeEntry;
use crate::ui::messages::info;
use crate::utils::colors::{self, RESET, color_for_date_key};
use crate::utils::date::{self, display_from_db};
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let mut pool = DbPool::new(&cfg.database);

        let entries = match period {
            Some(p) => {
                let (from, to) = date::resolve_period(p).map_err(AppError::InvalidDate)?;
                load_entries_between(
                    pool.conn()?,
                    &date::format_db(&from),
                    &date::format_db(&to),
                )?
            }
            None => pool.get_all_entries()?,
        };

        if entries.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        println!("{}", render(&entries, cfg));
        println!("{} entries", entries.len());
    }
    Ok(())
}

fn render(entries: &[GratitudeEntry], cfg: &Config) -> String {
    let date_w = if cfg.show_weekday { 30 } else { 10 };
    let mut table = Table::new(vec![
        Column::new("Date", date_w),
        Column::new("Entry", cfg.preview_width),
    ]);

    for e in entries {
        let valid = date::parse_date(&e.date).is_some();
        let label = if cfg.show_weekday {
            display_from_db(&e.date)
        } else {
            e.date.clone()
        };
        let more = if e.content.lines().count() > 1 { " ↵" } else { "" };
        table.add_row(vec![
            if colors::enabled() {
                format!("{}{}{}", color_for_date_key(valid), label, RESET)
            } else {
                label
            },
            truncate(&format!("{}{}", e.headline(), more), cfg.preview_width),
        ]);
    }

    table.render()
}
