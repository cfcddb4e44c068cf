use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::features::prayer_times::models::{PrayerTimeRecord, PrayerTimeSource, UpstreamError};
use crate::shared::clock::Clock;

struct CacheEntry {
    record: PrayerTimeRecord,
    expires_at: DateTime<Utc>,
}

/// Time-bounded cache of successful fetches keyed by `(zone, date)`.
///
/// No single-flight: two concurrent misses for the same key both fetch,
/// and the later store wins.
pub struct PrayerTimeCache {
    entries: RwLock<HashMap<(String, NaiveDate), CacheEntry>>,
    ttl: chrono::Duration,
    clock: Arc<dyn Clock>,
}

impl PrayerTimeCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
            clock,
        }
    }

    /// Returns a live entry tagged `cache`, otherwise runs `fetch` and stores its result.
    ///
    /// Failures from `fetch` are returned as-is and nothing is stored.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        zone_code: &str,
        date: NaiveDate,
        fetch: F,
    ) -> Result<PrayerTimeRecord, UpstreamError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<PrayerTimeRecord, UpstreamError>>,
    {
        let key = (zone_code.to_string(), date);

        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(&key) {
                if self.clock.now() < entry.expires_at {
                    tracing::debug!("Prayer time cache hit for {} on {}", zone_code, date);
                    return Ok(entry.record.with_source(PrayerTimeSource::Cache));
                }
            }
        }

        tracing::debug!("Prayer time cache miss for {} on {}", zone_code, date);
        let record = fetch().await?;

        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| now < entry.expires_at);
        entries.insert(
            key,
            CacheEntry {
                record: record.clone(),
                expires_at: now
                    .checked_add_signed(self.ttl)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC),
            },
        );
        tracing::debug!("Cached prayer times for {} on {}", zone_code, date);

        Ok(record.with_source(PrayerTimeSource::JakimOfficial))
    }

    /// Number of stored entries, live or not yet pruned
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
