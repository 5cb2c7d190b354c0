pub mod entry;
pub mod settings;
pub mod trigger;

pub use entry::GratitudeEntry;
pub use settings::NotificationSettings;
pub use trigger::DailyTrigger;
