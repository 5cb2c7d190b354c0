//! Daily reminder scheduling.
//!
//! Delivery belongs to a [`NotificationPlatform`]; the scheduler only
//! decides what is registered and, at fire time, whether the reminder is
//! still worth showing.

mod local;

pub use local::LocalPlatform;

use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::models::settings::NotificationSettings;
use crate::models::trigger::DailyTrigger;
use chrono::NaiveDate;

/// The platform side of notifications: registration and cancellation of
/// repeating triggers. Delivery itself never passes through here.
pub trait NotificationPlatform {
    /// Register a repeating daily trigger. Fails with
    /// `AppError::Permission` when the platform refuses.
    fn register_daily(&mut self, trigger: &DailyTrigger) -> AppResult<()>;

    /// Remove every pending trigger. Idempotent.
    fn cancel_all(&mut self) -> AppResult<()>;

    /// Pending triggers, for display.
    fn scheduled(&mut self) -> AppResult<Vec<DailyTrigger>>;
}

pub struct ReminderScheduler<P: NotificationPlatform> {
    platform: P,
}

impl<P: NotificationPlatform> ReminderScheduler<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Replace whatever is scheduled with one daily trigger at `hour:minute`.
    pub fn schedule_daily(&mut self, hour: i32, minute: i32) -> AppResult<DailyTrigger> {
        let trigger = DailyTrigger::reminder(hour, minute)?;
        self.platform.cancel_all()?;
        self.platform.register_daily(&trigger)?;
        Ok(trigger)
    }

    pub fn cancel_all(&mut self) -> AppResult<()> {
        self.platform.cancel_all()
    }

    /// Bring the platform in line with stored settings: schedule when
    /// enabled, cancel otherwise. Returns the active trigger, if any.
    pub fn apply_settings(
        &mut self,
        settings: &NotificationSettings,
    ) -> AppResult<Option<DailyTrigger>> {
        if settings.enabled {
            self.schedule_daily(settings.hour, settings.minute).map(Some)
        } else {
            self.cancel_all()?;
            Ok(None)
        }
    }

    pub fn scheduled(&mut self) -> AppResult<Vec<DailyTrigger>> {
        self.platform.scheduled()
    }
}

/// Presentation check run when a trigger fires: suppress the reminder when
/// `today` already has an entry. Settings play no part here; they only
/// decide whether a trigger exists at all.
pub fn should_present<S: EntryStore + ?Sized>(store: &mut S, today: NaiveDate) -> AppResult<bool> {
    let key = crate::utils::date::format_db(&today);
    Ok(store.get_entry_by_date(&key)?.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::db::store::SettingsStore;
    use crate::errors::AppError;

    #[derive(Default)]
    struct FakePlatform {
        pending: Vec<DailyTrigger>,
        refuse: bool,
        cancels: usize,
    }

    impl NotificationPlatform for FakePlatform {
        fn register_daily(&mut self, trigger: &DailyTrigger) -> AppResult<()> {
            if self.refuse {
                return Err(AppError::Permission("denied".into()));
            }
            self.pending.push(trigger.clone());
            Ok(())
        }

        fn cancel_all(&mut self) -> AppResult<()> {
            self.cancels += 1;
            self.pending.clear();
            Ok(())
        }

        fn scheduled(&mut self) -> AppResult<Vec<DailyTrigger>> {
            Ok(self.pending.clone())
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn scheduling_supersedes() {
        let mut s = ReminderScheduler::new(FakePlatform::default());
        s.schedule_daily(8, 0).unwrap();
        s.schedule_daily(20, 30).unwrap();

        let pending = s.scheduled().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!((pending[0].hour, pending[0].minute), (20, 30));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut s = ReminderScheduler::new(FakePlatform::default());
        s.cancel_all().unwrap();
        s.cancel_all().unwrap();
        assert!(s.scheduled().unwrap().is_empty());

        s.schedule_daily(7, 5).unwrap();
        s.cancel_all().unwrap();
        assert!(s.scheduled().unwrap().is_empty());
    }

    #[test]
    fn refused_registration_is_permission_error() {
        let mut s = ReminderScheduler::new(FakePlatform {
            refuse: true,
            ..Default::default()
        });
        assert!(matches!(
            s.schedule_daily(8, 0),
            Err(AppError::Permission(_))
        ));
        assert!(s.scheduled().unwrap().is_empty());
    }

    #[test]
    fn invalid_clock_never_reaches_platform() {
        let mut s = ReminderScheduler::new(FakePlatform::default());
        s.schedule_daily(6, 0).unwrap();
        assert!(matches!(
            s.schedule_daily(25, 0),
            Err(AppError::InvalidTime(_))
        ));
        // previous trigger untouched
        assert_eq!(s.scheduled().unwrap().len(), 1);
        assert_eq!(s.platform().cancels, 1);
    }

    #[test]
    fn apply_settings_follows_enabled_flag() {
        let mut s = ReminderScheduler::new(FakePlatform::default());

        let on = NotificationSettings {
            enabled: true,
            hour: 9,
            minute: 15,
        };
        let t = s.apply_settings(&on).unwrap().unwrap();
        assert_eq!(t.time_label(), "09:15");
        assert_eq!(s.scheduled().unwrap().len(), 1);

        let off = NotificationSettings {
            enabled: false,
            ..on
        };
        assert!(s.apply_settings(&off).unwrap().is_none());
        assert!(s.scheduled().unwrap().is_empty());
    }

    #[test]
    fn present_only_without_todays_entry() {
        let mut store = DbPool::in_memory();
        let today = day("2024-06-01");

        assert!(should_present(&mut store, today).unwrap());

        store.save_entry("2024-05-31", "yesterday").unwrap();
        assert!(should_present(&mut store, today).unwrap());

        store.save_entry("2024-06-01", "today").unwrap();
        assert!(!should_present(&mut store, today).unwrap());
    }

    #[test]
    fn presentation_ignores_settings() {
        let mut store = DbPool::in_memory();
        let today = day("2024-06-01");

        for (enabled, hour, minute) in [(false, 8, 0), (true, 23, 59), (true, 99, 99)] {
            store
                .save_notification_settings(enabled, hour, minute)
                .unwrap();
            assert!(should_present(&mut store, today).unwrap());
        }

        store.save_entry("2024-06-01", "done").unwrap();
        store.save_notification_settings(true, 8, 0).unwrap();
        assert!(!should_present(&mut store, today).unwrap());
    }
}
