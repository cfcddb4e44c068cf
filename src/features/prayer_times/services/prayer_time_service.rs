use std::sync::Arc;

use crate::features::prayer_times::models::PrayerTimeRecord;
use crate::features::prayer_times::services::{FallbackTable, PrayerTimeCache, PrayerTimeFetcher};
use crate::features::zones::models::ZoneMatch;
use crate::features::zones::ZoneResolver;
use crate::shared::clock::Clock;
use crate::shared::types::Coordinate;

/// Today's times for a zone: cache, then JAKIM with retries, then the fallback table.
///
/// Always yields a record; upstream failures are logged and downgraded.
pub struct PrayerTimeService {
    resolver: Arc<ZoneResolver>,
    fetcher: PrayerTimeFetcher,
    cache: PrayerTimeCache,
    fallback: FallbackTable,
    clock: Arc<dyn Clock>,
}

impl PrayerTimeService {
    pub fn new(
        resolver: Arc<ZoneResolver>,
        fetcher: PrayerTimeFetcher,
        cache: PrayerTimeCache,
        fallback: FallbackTable,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            cache,
            fallback,
            clock,
        }
    }

    /// `zone_code` is expected upper-cased and well-formed
    pub async fn prayer_times_for_zone(&self, zone_code: &str) -> PrayerTimeRecord {
        let today = self.clock.today_in_malaysia();

        let result = self
            .cache
            .get_or_fetch(zone_code, today, || {
                self.fetcher.fetch_prayer_times(zone_code, today)
            })
            .await;

        match result {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(
                    "Serving fallback prayer times for {} on {}: {}",
                    zone_code,
                    today,
                    err
                );
                self.fallback.get_fallback(zone_code, today)
            }
        }
    }

    pub async fn prayer_times_for_coordinates(
        &self,
        coordinate: Coordinate,
    ) -> (ZoneMatch, PrayerTimeRecord) {
        let found = self.zone_for_coordinates(coordinate);
        let record = self.prayer_times_for_zone(found.zone.code).await;
        (found, record)
    }

    pub fn zone_for_coordinates(&self, coordinate: Coordinate) -> ZoneMatch {
        self.resolver.resolve(coordinate)
    }

    /// Entries currently held by the response cache
    pub async fn cached_entries(&self) -> usize {
        self.cache.len().await
    }
}
