use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notify::{NotifyLogic, SettingsChange};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::reminder::{LocalPlatform, ReminderScheduler};
use crate::ui::messages::{info, success};
use crate::utils::time::parse_clock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notify {
        print,
        enable,
        disable,
        at,
        sync,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database);
        let mut scheduler = ReminderScheduler::new(LocalPlatform::open(
            &cfg.database,
            cfg.notifications_allowed,
        ));

        let change = SettingsChange {
            enabled: if *enable {
                Some(true)
            } else if *disable {
                Some(false)
            } else {
                None
            },
            at: at.as_deref().map(parse_clock).transpose()?,
        };

        if !change.is_empty() {
            NotifyLogic::update(&mut pool, &mut scheduler, change)?;
        }

        if *sync {
            match NotifyLogic::sync(&mut pool, &mut scheduler)? {
                Some(t) => success(format!("Daily reminder scheduled at {}", t.time_label())),
                None => info("Notifications are disabled; no reminder scheduled."),
            }
        }

        if *print || (change.is_empty() && !*sync) {
            NotifyLogic::print(&mut pool, &mut scheduler)?;
        }
    }
    Ok(())
}
