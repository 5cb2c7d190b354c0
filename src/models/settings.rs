/// Reminder preferences. Stored as the single row of the `settings` table.
///
/// `hour`/`minute` are plain integers: the store persists whatever it is
/// given, range checks belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub hour: i32,
    pub minute: i32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            hour: 8,
            minute: 0,
        }
    }
}

impl NotificationSettings {
    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}
