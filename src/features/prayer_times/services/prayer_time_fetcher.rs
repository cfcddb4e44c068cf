use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::config::JakimConfig;
use crate::features::prayer_times::clients::{PrayerTimeUpstream, UpstreamPrayerDay};
use crate::features::prayer_times::models::{
    PrayerTimeRecord, PrayerTimeSource, PrayerTimes, UpstreamError,
};
use crate::features::zones::ZoneResolver;
use crate::shared::validation::PRAYER_TIME_REGEX;

/// Waits between retry attempts
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Fetches one day of official times with a per-attempt timeout and linear backoff.
///
/// Makes `1 + retries` attempts at most. The delay before retry `n` is
/// `retry_base_delay * n`. Nothing is cached here.
pub struct PrayerTimeFetcher {
    upstream: Arc<dyn PrayerTimeUpstream>,
    sleeper: Arc<dyn Sleeper>,
    resolver: Arc<ZoneResolver>,
    timeout: Duration,
    retries: u32,
    retry_base_delay: Duration,
}

impl PrayerTimeFetcher {
    pub fn new(
        upstream: Arc<dyn PrayerTimeUpstream>,
        sleeper: Arc<dyn Sleeper>,
        resolver: Arc<ZoneResolver>,
        config: &JakimConfig,
    ) -> Self {
        Self {
            upstream,
            sleeper,
            resolver,
            timeout: config.timeout,
            retries: config.retries,
            retry_base_delay: config.retry_base_delay,
        }
    }

    pub async fn fetch_prayer_times(
        &self,
        zone_code: &str,
        date: NaiveDate,
    ) -> Result<PrayerTimeRecord, UpstreamError> {
        let max_attempts = self.retries.saturating_add(1);
        let mut attempt = 1;

        loop {
            match self.attempt(zone_code, date).await {
                Ok(times) => {
                    tracing::info!(
                        "JAKIM times fetched for {} on {} (attempt {})",
                        zone_code,
                        date,
                        attempt
                    );
                    return Ok(self.record(zone_code, date, times));
                }
                Err(err) if attempt < max_attempts => {
                    tracing::warn!(
                        "JAKIM attempt {}/{} failed for {}: {}",
                        attempt,
                        max_attempts,
                        zone_code,
                        err
                    );
                    self.sleeper.sleep(self.retry_base_delay * attempt).await;
                    attempt += 1;
                }
                Err(err) => {
                    tracing::error!(
                        "JAKIM fetch for {} gave up after {} attempts: {}",
                        zone_code,
                        attempt,
                        err
                    );
                    return Err(UpstreamError::Exhausted {
                        attempts: attempt,
                        last: Box::new(err),
                    });
                }
            }
        }
    }

    async fn attempt(&self, zone_code: &str, date: NaiveDate) -> Result<PrayerTimes, UpstreamError> {
        let day = tokio::time::timeout(self.timeout, self.upstream.fetch_day(zone_code, date))
            .await
            .map_err(|_| UpstreamError::Timeout(self.timeout))??;

        validate_day(day)
    }

    fn record(&self, zone_code: &str, date: NaiveDate, times: PrayerTimes) -> PrayerTimeRecord {
        let location_name = self
            .resolver
            .find(zone_code)
            .map(|zone| zone.label.to_string())
            .unwrap_or_else(|| zone_code.to_string());

        PrayerTimeRecord {
            times,
            date,
            zone: zone_code.to_string(),
            location_name,
            source: PrayerTimeSource::JakimOfficial,
        }
    }
}

fn required(name: &str, value: Option<String>) -> Result<String, UpstreamError> {
    match value {
        Some(v) if PRAYER_TIME_REGEX.is_match(v.trim()) => Ok(v.trim().to_string()),
        Some(v) if v.trim().is_empty() => {
            Err(UpstreamError::Malformed(format!("{} is empty", name)))
        }
        Some(v) => Err(UpstreamError::Malformed(format!(
            "{} has invalid time {:?}",
            name, v
        ))),
        None => Err(UpstreamError::Malformed(format!("{} is missing", name))),
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| PRAYER_TIME_REGEX.is_match(v))
}

fn validate_day(day: UpstreamPrayerDay) -> Result<PrayerTimes, UpstreamError> {
    Ok(PrayerTimes {
        fajr: required("fajr", day.fajr)?,
        dhuhr: required("dhuhr", day.dhuhr)?,
        asr: required("asr", day.asr)?,
        maghrib: required("maghrib", day.maghrib)?,
        isha: required("isha", day.isha)?,
        imsak: optional(day.imsak),
        syuruk: optional(day.syuruk),
    })
}
