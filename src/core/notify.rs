use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::SettingsStore;
use crate::errors::AppResult;
use crate::models::settings::NotificationSettings;
use crate::models::trigger::DailyTrigger;
use crate::reminder::{NotificationPlatform, ReminderScheduler, should_present};
use crate::ui::messages::{info, success, warning};
use chrono::NaiveDate;

/// Requested change to the reminder settings; `None` keeps the stored value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsChange {
    pub enabled: Option<bool>,
    pub at: Option<(i32, i32)>,
}

impl SettingsChange {
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.at.is_none()
    }

    pub fn merge(&self, current: NotificationSettings) -> NotificationSettings {
        let (hour, minute) = self.at.unwrap_or((current.hour, current.minute));
        NotificationSettings {
            enabled: self.enabled.unwrap_or(current.enabled),
            hour,
            minute,
        }
    }
}

pub struct NotifyLogic;

impl NotifyLogic {
    pub fn print<P: NotificationPlatform>(
        pool: &mut DbPool,
        scheduler: &mut ReminderScheduler<P>,
    ) -> AppResult<()> {
        let s = pool.get_notification_settings()?;

        println!("🔔 Daily reminder");
        println!(
            "   enabled : {}",
            if s.enabled { "yes" } else { "no" }
        );
        println!("   time    : {}", s.time_label());

        let pending = scheduler.scheduled()?;
        if pending.is_empty() {
            println!("   trigger : none");
        }
        for t in pending {
            println!("   trigger : every day at {} ({})", t.time_label(), t.title);
        }
        Ok(())
    }

    /// Apply a change: the platform is updated first, the settings row
    /// second, so a refused registration leaves the stored settings as
    /// they were. Scheduling cancels before it registers; on failure the
    /// previous settings are re-applied so the old trigger comes back when
    /// the platform still accepts it.
    pub fn update<P: NotificationPlatform>(
        pool: &mut DbPool,
        scheduler: &mut ReminderScheduler<P>,
        change: SettingsChange,
    ) -> AppResult<NotificationSettings> {
        let current = pool.get_notification_settings()?;
        let next = change.merge(current);

        let trigger = match scheduler.apply_settings(&next) {
            Ok(t) => t,
            Err(e) => {
                if let Err(restore) = scheduler.apply_settings(&current) {
                    warning(format!("Previous reminder could not be restored: {}", restore));
                }
                return Err(e);
            }
        };
        pool.save_notification_settings(next.enabled, next.hour, next.minute)?;

        match trigger {
            Some(t) => success(format!(
                "Notifications enabled! You'll receive a reminder at {} every day.",
                t.time_label()
            )),
            None => success("Notifications disabled"),
        }

        ttlog_quiet(
            pool.conn()?,
            "notify",
            &next.time_label(),
            if next.enabled { "enabled" } else { "disabled" },
        );

        Ok(next)
    }

    /// Re-register the trigger from stored settings (startup sync).
    pub fn sync<P: NotificationPlatform>(
        pool: &mut DbPool,
        scheduler: &mut ReminderScheduler<P>,
    ) -> AppResult<Option<DailyTrigger>> {
        let settings = pool.get_notification_settings()?;
        scheduler.apply_settings(&settings)
    }

    /// The check a fired trigger runs. Prints the reminder when it should
    /// be shown and returns whether it was.
    pub fn remind<P: NotificationPlatform>(
        pool: &mut DbPool,
        scheduler: &mut ReminderScheduler<P>,
        today: NaiveDate,
    ) -> AppResult<bool> {
        let pending = scheduler.scheduled()?;
        let Some(trigger) = pending.first() else {
            info("No reminder is scheduled.");
            return Ok(false);
        };

        if !should_present(pool, today)? {
            info("Skipping reminder - entry already exists for today");
            return Ok(false);
        }

        println!("{}", trigger.title);
        println!("{}", trigger.body);
        Ok(true)
    }
}
