use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notify::NotifyLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::reminder::{LocalPlatform, ReminderScheduler};
use crate::utils::date;

/// Run by the daily trigger (cron, systemd timer, ...).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remind = cmd {
        let mut pool = DbPool::new(&cfg.database);
        let mut scheduler = ReminderScheduler::new(LocalPlatform::open(
            &cfg.database,
            cfg.notifications_allowed,
        ));
        NotifyLogic::remind(&mut pool, &mut scheduler, date::today())?;
    }
    Ok(())
}
