use crate::errors::{AppError, AppResult};

pub const REMINDER_TITLE: &str = "Daily Gratitude Reminder 🙏";
pub const REMINDER_BODY: &str = "Take a moment to reflect on what you're grateful for today.";

/// A repeating wall-clock trigger registered with the notification platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTrigger {
    pub hour: u32,
    pub minute: u32,
    pub title: String,
    pub body: String,
}

impl DailyTrigger {
    /// Build the daily gratitude reminder. The platform can only fire at a
    /// real clock time, so out-of-range values are rejected here.
    pub fn reminder(hour: i32, minute: i32) -> AppResult<Self> {
        if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
            return Err(AppError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self {
            hour: hour as u32,
            minute: minute as u32,
            title: REMINDER_TITLE.to_string(),
            body: REMINDER_BODY.to_string(),
        })
    }

    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reminder_accepts_clock_bounds() {
        assert!(DailyTrigger::reminder(0, 0).is_ok());
        let t = DailyTrigger::reminder(23, 59).unwrap();
        assert_eq!(t.time_label(), "23:59");
        assert_eq!(t.title, REMINDER_TITLE);
    }

    #[test]
    fn reminder_rejects_out_of_range() {
        assert!(matches!(
            DailyTrigger::reminder(24, 0),
            Err(AppError::InvalidTime(_))
        ));
        assert!(matches!(
            DailyTrigger::reminder(7, 60),
            Err(AppError::InvalidTime(_))
        ));
        assert!(DailyTrigger::reminder(-1, 0).is_err());
    }
}
