use super::entry_key_or_today;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::italic;

const WRAP_WIDTH: usize = 72;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let day = entry_key_or_today(date.as_deref())?;

        let mut pool = DbPool::new(&cfg.database);
        let Some(entry) = pool.get_entry_by_date(&day.key)? else {
            info(format!("No entry for {}", day.label));
            return Ok(());
        };

        header(day.label);
        println!();
        for paragraph in entry.content.lines() {
            for l in textwrap::wrap(paragraph, WRAP_WIDTH) {
                println!("  {}", l);
            }
        }
        println!();
        println!("{}", italic(&format!("last updated {}", entry.updated_at)));
    }
    Ok(())
}
