mod progress;

pub use progress::{PrayerName, PrayerProgress, UserLocation, UserProgress};
