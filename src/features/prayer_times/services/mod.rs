mod fallback_table;
mod prayer_time_fetcher;
mod prayer_time_service;
mod response_cache;

pub use fallback_table::FallbackTable;
pub use prayer_time_fetcher::{PrayerTimeFetcher, Sleeper, TokioSleeper};
pub use prayer_time_service::PrayerTimeService;
pub use response_cache::PrayerTimeCache;
