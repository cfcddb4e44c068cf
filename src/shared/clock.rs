use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::shared::constants::MALAYSIA_UTC_OFFSET_SECS;

/// Source of the current time, injected wherever expiry or "today" matters
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date in Malaysia Time (UTC+8)
    fn today_in_malaysia(&self) -> NaiveDate {
        match FixedOffset::east_opt(MALAYSIA_UTC_OFFSET_SECS) {
            Some(offset) => self.now().with_timezone(&offset).date_naive(),
            None => self.now().date_naive(),
        }
    }
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub use manual::ManualClock;


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_today_in_malaysia_rolls_over_at_utc_sixteen() {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 16, 15, 59, 0).unwrap());
        assert_eq!(
            clock.today_in_malaysia(),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );

        clock.advance(chrono::Duration::minutes(1));
        assert_eq!(
            clock.today_in_malaysia(),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
        );
    }
}
