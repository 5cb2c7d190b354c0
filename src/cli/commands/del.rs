use super::entry_key_or_today;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::fs_utils::ask_confirmation;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, all, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database);

        if *all {
            if !*yes
                && !ask_confirmation(
                    "Are you sure you want to delete ALL gratitude entries? This cannot be undone.",
                )
            {
                info("Nothing deleted.");
                return Ok(());
            }

            let n = DeleteLogic::delete_all(&mut pool)?;
            success(format!("Deleted {} entries.", n));
            return Ok(());
        }

        let day = entry_key_or_today(date.as_deref())?;

        if !*yes
            && !ask_confirmation(&format!("Delete the entry for {}?", day.label))
        {
            info("Nothing deleted.");
            return Ok(());
        }

        if DeleteLogic::delete_one(&mut pool, &day.key)? {
            success(format!("Entry for {} deleted.", day.label));
        } else {
            warning(format!("No entry for {}.", day.label));
        }
    }
    Ok(())
}
