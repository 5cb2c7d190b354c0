use super::date_or_today;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::db::store::SaveOutcome;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::format_display;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { content, date } = cmd {
        let d = date_or_today(date.as_deref())?;

        let mut pool = DbPool::new(&cfg.database);
        match AddLogic::apply(&mut pool, d, content)? {
            SaveOutcome::Inserted => success(format!("Entry saved for {}", format_display(&d))),
            SaveOutcome::Updated => success(format!("Entry updated for {}", format_display(&d))),
        }
    }
    Ok(())
}
