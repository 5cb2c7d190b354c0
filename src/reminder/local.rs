use super::NotificationPlatform;
use crate::db::pool::DbPool;
use crate::db::trigger::{clear_triggers, load_trigger, store_trigger};
use crate::errors::{AppError, AppResult};
use crate::models::trigger::DailyTrigger;

/// Notification platform backed by the journal database.
///
/// The registered trigger is a single row; an external timer (cron, a
/// systemd timer, Task Scheduler) runs `gratitude remind` at that time.
pub struct LocalPlatform {
    pool: DbPool,
    allowed: bool,
}

impl LocalPlatform {
    pub fn new(pool: DbPool, allowed: bool) -> Self {
        Self { pool, allowed }
    }

    pub fn open(db_path: &str, allowed: bool) -> Self {
        Self::new(DbPool::new(db_path), allowed)
    }
}

impl NotificationPlatform for LocalPlatform {
    fn register_daily(&mut self, trigger: &DailyTrigger) -> AppResult<()> {
        if !self.allowed {
            return Err(AppError::Permission(
                "notifications are disabled in the configuration (notifications_allowed: false)"
                    .into(),
            ));
        }
        store_trigger(self.pool.conn()?, trigger)
    }

    fn cancel_all(&mut self) -> AppResult<()> {
        clear_triggers(self.pool.conn()?)
    }

    fn scheduled(&mut self) -> AppResult<Vec<DailyTrigger>> {
        Ok(load_trigger(self.pool.conn()?)?.into_iter().collect())
    }
}
