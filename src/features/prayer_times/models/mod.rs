mod error;
mod prayer_time;

pub use error::UpstreamError;
pub use prayer_time::{PrayerTimeRecord, PrayerTimeSource, PrayerTimes};
